use axum::{
    Router,
    routing::{get, post},
};

use super::handlers::{create_runner, delete_runner, get_runner, update_runner};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_runner))
        .route(
            "/:nickname",
            get(get_runner).put(update_runner).delete(delete_runner),
        )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use storage::memory::InMemoryRunnerStore;
    use tower::ServiceExt;

    use super::routes;
    use crate::events::testing::RecordingPublisher;
    use crate::state::AppState;

    fn app() -> Router {
        let state = AppState::new(
            Arc::new(InMemoryRunnerStore::new()),
            Arc::new(RecordingPublisher::default()),
        );
        routes().with_state(state)
    }

    fn post_alice() -> Request<Body> {
        json_request(
            "POST",
            "/",
            json!({
                "nickname": "alice",
                "name": "Alice",
                "surname": "A",
                "email": "a@x.com",
                "birthDate": "1990-01-01"
            }),
        )
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn get_missing_runner_returns_not_found() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/ghost")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Runner with nickname ghost does not exist");
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let app = app();

        let created = app.clone().oneshot(post_alice()).await.unwrap();
        assert_eq!(created.status(), StatusCode::CREATED);
        let created = body_json(created).await;
        assert_eq!(
            created["subscriptionDate"],
            chrono::Local::now().date_naive().to_string()
        );
        assert!(created.get("lastRace").is_none());

        let fetched = app
            .oneshot(
                Request::builder()
                    .uri("/alice")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(fetched.status(), StatusCode::OK);
        assert_eq!(body_json(fetched).await, created);
    }

    #[tokio::test]
    async fn create_duplicate_nickname_conflicts() {
        let app = app();
        app.clone().oneshot(post_alice()).await.unwrap();

        let response = app.oneshot(post_alice()).await.unwrap();

        assert_eq!(response.status(), StatusCode::CONFLICT);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Runner with nickname alice already exists");
    }

    #[tokio::test]
    async fn create_empty_nickname_is_rejected() {
        let response = app()
            .oneshot(json_request("POST", "/", json!({ "nickname": "" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn update_rewrites_last_race_and_ignores_other_fields() {
        let app = app();
        app.clone().oneshot(post_alice()).await.unwrap();

        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                "/alice",
                json!({
                    "name": "Mallory",
                    "subscriptionDate": "1970-01-01",
                    "lastRace": "Boston Marathon"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["lastRace"], "Boston Marathon");
        assert_eq!(body["name"], "Alice");
        assert_eq!(
            body["subscriptionDate"],
            chrono::Local::now().date_naive().to_string()
        );
    }

    #[tokio::test]
    async fn update_missing_runner_returns_not_found() {
        let response = app()
            .oneshot(json_request(
                "PUT",
                "/ghost",
                json!({ "lastRace": "Boston Marathon" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_returns_no_content_even_when_absent() {
        let app = app();
        app.clone().oneshot(post_alice()).await.unwrap();

        for uri in ["/alice", "/alice", "/ghost"] {
            let response = app
                .clone()
                .oneshot(
                    Request::builder()
                        .method("DELETE")
                        .uri(uri)
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::NO_CONTENT);
        }

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/alice")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
