use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    dto::runner::{CreateRunnerRequest, UpdateRunnerRequest},
    models::Runner,
};
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/{nickname}",
    params(
        ("nickname" = String, Path, description = "Runner nickname")
    ),
    responses(
        (status = 200, description = "Runner found", body = Runner),
        (status = 404, description = "Runner not found")
    ),
    tag = "runners"
)]
pub async fn get_runner(
    State(state): State<AppState>,
    Path(nickname): Path<String>,
) -> Result<Response, WebError> {
    tracing::info!(%nickname, "find runner");

    let runner = services::find_by_nickname(state.store.as_ref(), &nickname)
        .await?
        .ok_or(WebError::NotFound(nickname))?;

    Ok(Json(runner).into_response())
}

#[utoipa::path(
    post,
    path = "/",
    request_body = CreateRunnerRequest,
    responses(
        (status = 201, description = "Runner registered", body = Runner),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Nickname already taken")
    ),
    tag = "runners"
)]
pub async fn create_runner(
    State(state): State<AppState>,
    Json(req): Json<CreateRunnerRequest>,
) -> Result<Response, WebError> {
    tracing::info!(nickname = %req.nickname, "create runner");
    req.validate()?;

    let runner = services::create(state.store.as_ref(), state.publisher.as_ref(), req).await?;

    Ok((StatusCode::CREATED, Json(runner)).into_response())
}

#[utoipa::path(
    put,
    path = "/{nickname}",
    params(
        ("nickname" = String, Path, description = "Runner nickname")
    ),
    request_body = UpdateRunnerRequest,
    responses(
        (status = 200, description = "Runner updated", body = Runner),
        (status = 404, description = "Runner not found")
    ),
    tag = "runners"
)]
pub async fn update_runner(
    State(state): State<AppState>,
    Path(nickname): Path<String>,
    Json(req): Json<UpdateRunnerRequest>,
) -> Result<Response, WebError> {
    tracing::info!(%nickname, "update runner");

    let updated = services::update(state.store.as_ref(), &nickname, req).await?;

    Ok(Json(updated).into_response())
}

#[utoipa::path(
    delete,
    path = "/{nickname}",
    params(
        ("nickname" = String, Path, description = "Runner nickname")
    ),
    responses(
        (status = 204, description = "Runner deleted")
    ),
    tag = "runners"
)]
pub async fn delete_runner(
    State(state): State<AppState>,
    Path(nickname): Path<String>,
) -> Result<Response, WebError> {
    tracing::info!(%nickname, "delete runner");

    services::delete_by_nickname(state.store.as_ref(), &nickname).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
