use storage::{
    RunnerStore,
    dto::runner::{CreateRunnerRequest, UpdateRunnerRequest},
    models::Runner,
};

use crate::error::{WebError, WebResult};
use crate::events::EventPublisher;

/// Look up a runner by nickname. Absence is a valid, non-error result that
/// the handler layer translates into a 404.
pub async fn find_by_nickname(store: &dyn RunnerStore, nickname: &str) -> WebResult<Option<Runner>> {
    Ok(store.find_by_nickname(nickname).await?)
}

/// Register a new runner. Fails with `AlreadyExists` when the nickname is
/// taken, with no further side effects.
pub async fn create(
    store: &dyn RunnerStore,
    publisher: &dyn EventPublisher,
    request: CreateRunnerRequest,
) -> WebResult<Runner> {
    if store.find_by_nickname(&request.nickname).await?.is_some() {
        return Err(WebError::AlreadyExists(request.nickname));
    }

    let runner = Runner::from(request);

    // The registration event goes out before the record lands. If the persist
    // fails afterwards, an event may exist with no stored runner.
    publisher.publish_runner_registered(&runner).await?;

    Ok(store.save(runner).await?)
}

/// Update a runner's last race. Every other field is taken from the stored
/// record, whatever else the caller submitted.
pub async fn update(
    store: &dyn RunnerStore,
    nickname: &str,
    request: UpdateRunnerRequest,
) -> WebResult<Runner> {
    let Some(current) = store.find_by_nickname(nickname).await? else {
        return Err(WebError::NotFound(nickname.to_string()));
    };

    let merged = Runner {
        last_race: request.last_race,
        ..current
    };

    Ok(store.save(merged).await?)
}

/// Delete a runner by nickname. Deleting an absent key is not an error.
pub async fn delete_by_nickname(store: &dyn RunnerStore, nickname: &str) -> WebResult<()> {
    Ok(store.delete_by_nickname(nickname).await?)
}
