use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A race participant profile, keyed by nickname.
///
/// `nickname` is unique and immutable once created. `subscription_date` is
/// assigned by the store on first persist and never overwritten afterwards.
/// `last_race` is the only field mutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Runner {
    pub nickname: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_race: Option<String>,
}
