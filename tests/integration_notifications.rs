mod common;

use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use slateport::fixtures;
use slateport::modules::{AuthService, NotificationService};
use slateport_core::{FallbackReason, ListSource, PortalError};
use slateport_models::roles::Role;

async fn notices() -> Json<Value> {
    Json(json!([
        {
            "_id": "n1",
            "title": "Exam schedule",
            "body": "Mid-sems start Sep 12.",
            "isRead": false,
            "createdAt": "2026-08-18T09:00:00Z"
        },
        {
            "id": "n2",
            "title": "Library notice",
            "message": "Reading hall closes early on Friday.",
            "seen": true
        }
    ]))
}

async fn mark_read(Path(id): Path<String>) -> StatusCode {
    assert_eq!(id, "n1");
    StatusCode::NO_CONTENT
}

#[tokio::test]
async fn test_list_reads_both_flag_spellings() {
    let router = Router::new().route("/notifications", get(notices));
    let backend = common::MockBackend::start(router).await;
    let client = common::client_for(&backend);

    let listing = NotificationService::list(&client).await.unwrap();

    assert_eq!(listing.source, ListSource::Live);
    assert!(!listing.items[0].read);
    assert!(listing.items[1].read);
    assert_eq!(listing.items[1].message, "Reading hall closes early on Friday.");
}

#[tokio::test]
async fn test_list_falls_back_to_the_sample_board() {
    let client = common::unreachable_client();

    let listing = NotificationService::list(&client).await.unwrap();

    assert_eq!(
        listing.source,
        ListSource::Fixture(FallbackReason::Unreachable)
    );
    assert_eq!(listing.items, fixtures::notifications::sample());
}

#[tokio::test]
async fn test_mark_read_posts_the_acknowledgement() {
    let router = Router::new().route("/notifications/{id}/read", post(mark_read));
    let backend = common::MockBackend::start(router).await;
    let client = common::client_for(&backend);
    common::sign_in_live(&client, Role::Student);

    NotificationService::mark_read(&client, "n1").await.unwrap();
    assert_eq!(backend.hits(), 1);
}

#[tokio::test]
async fn test_mark_read_surfaces_backend_errors() {
    async fn missing() -> (StatusCode, Json<Value>) {
        (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "notification not found" })),
        )
    }
    let router = Router::new().route("/notifications/{id}/read", post(missing));
    let backend = common::MockBackend::start(router).await;
    let client = common::client_for(&backend);

    let err = NotificationService::mark_read(&client, "ghost").await.unwrap_err();

    match err {
        PortalError::Api { status, message, .. } => {
            assert_eq!(status, 404);
            assert_eq!(message, "notification not found");
        }
        other => panic!("expected an api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_mock_mark_read_stays_local() {
    let router = Router::new().route("/notifications/{id}/read", post(mark_read));
    let backend = common::MockBackend::start(router).await;
    let client = common::client_for(&backend);
    AuthService::login_mock(&client, Role::Student);

    NotificationService::mark_read(&client, "ntf-01").await.unwrap();
    assert_eq!(backend.hits(), 0);
}
