use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::Runner;

/// Request payload for registering a new runner.
///
/// `subscription_date` is not part of the payload: it is server-assigned at
/// first persist and never accepted as input.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRunnerRequest {
    #[validate(length(min = 1, message = "Nickname must not be empty"))]
    pub nickname: String,

    pub name: Option<String>,

    pub surname: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    pub birth_date: Option<NaiveDate>,

    pub last_race: Option<String>,
}

impl From<CreateRunnerRequest> for Runner {
    fn from(req: CreateRunnerRequest) -> Self {
        Runner {
            nickname: req.nickname,
            name: req.name,
            surname: req.surname,
            email: req.email,
            birth_date: req.birth_date,
            subscription_date: None,
            last_race: req.last_race,
        }
    }
}

/// Request payload for updating a runner.
///
/// Only `last_race` is honored; any other field in the payload is silently
/// discarded, and the nickname comes from the request path.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRunnerRequest {
    pub last_race: Option<String>,
}
