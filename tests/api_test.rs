use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::Duration;
use library_inventory::adapters::mock::{CheckableRepository, FixedClock, LibraryRepository};
use library_inventory::api::handlers::AppState;
use library_inventory::api::router::create_router;
use library_inventory::api::types::*;
use library_inventory::domain::*;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

mod common;

use common::{checkable, evaluation_instant, sample_checkables};

// ============================================================================
// ヘルパー関数
// ============================================================================

struct TestApp {
    router: axum::Router,
    library_repository: Arc<LibraryRepository>,
    checkable_repository: Arc<CheckableRepository>,
}

fn setup_app(libraries: Vec<Library>) -> TestApp {
    let library_repository = Arc::new(LibraryRepository::with_libraries(libraries));
    let checkable_repository =
        Arc::new(CheckableRepository::with_checkables(sample_checkables()));
    let clock = Arc::new(FixedClock::fixed(evaluation_instant()));

    let state = AppState::new(
        library_repository.clone(),
        checkable_repository.clone(),
        clock,
    );

    TestApp {
        router: create_router(Arc::new(state)),
        library_repository,
        checkable_repository,
    }
}

async fn send(app: &TestApp, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn central() -> Library {
    let now = evaluation_instant();
    Library::new("Central")
        .with_checkables(vec![CheckableAmount::new(checkable("2-0"), 5)])
        .with_library_cards(vec![LibraryCard::new(
            Patron::new("Alice"),
            vec![
                Checkout::new(
                    checkable("1-0"),
                    now - Duration::days(14),
                    now - Duration::hours(1),
                ),
                Checkout::new(checkable("1-1"), now, now + Duration::hours(1)),
            ],
        )])
}

// ============================================================================
// テスト
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let app = setup_app(Vec::new());

    let (status, body) = send(&app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("OK".to_string()));
}

#[tokio::test]
async fn test_create_library_then_conflict() {
    let app = setup_app(Vec::new());

    let (status, body) = send(&app, post_json("/libraries", json!({ "name": "Central" }))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["key"], "Central");

    let (status, body) = send(&app, post_json("/libraries", json!({ "name": "Central" }))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "RESOURCE_EXISTS");
    assert_eq!(body["message"], "Library with name: Central already exists!");

    assert_eq!(app.library_repository.save_count(), 1);
}

#[tokio::test]
async fn test_get_library_not_found() {
    let app = setup_app(Vec::new());

    let (status, body) = send(&app, get("/libraries/Nowhere")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "LIBRARY_NOT_FOUND");
    assert_eq!(body["message"], "Nowhere not found!");
}

#[tokio::test]
async fn test_get_checkable_amount_stocked_and_unstocked() {
    let app = setup_app(vec![central()]);

    let (status, body) = send(&app, get("/libraries/Central/checkables/2-0")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["amount"], 5);
    assert_eq!(body["checkable"]["isbn"], "2-0");
    assert_eq!(body["checkable"]["type"], "ScienceKit");

    let (status, body) = send(&app, get("/libraries/Central/checkables/2-1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["amount"], 0);
    assert_eq!(body["checkable"]["isbn"], "2-1");

    let (status, body) = send(&app, get("/libraries/Central/checkables/9-9")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "CHECKABLE_NOT_FOUND");
}

#[tokio::test]
async fn test_overdue_checkouts_endpoint() {
    let app = setup_app(vec![central()]);

    let (status, body) = send(&app, get("/libraries/Central/overdue")).await;

    assert_eq!(status, StatusCode::OK);
    let overdue = body.as_array().unwrap();
    assert_eq!(overdue.len(), 1);
    assert_eq!(overdue[0]["patron"]["name"], "Alice");
    assert_eq!(overdue[0]["checkout"]["checkable"]["isbn"], "1-0");
}

#[tokio::test]
async fn test_availability_endpoint() {
    let app = setup_app(vec![central(), Library::new("Branch")]);

    let (status, body) = send(&app, get("/checkables/2-0/availability")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{ "available": 5, "library_name": "Central" }])
    );
}

#[tokio::test]
async fn test_checkable_lookup_endpoints() {
    let app = setup_app(Vec::new());

    let (status, body) = send(&app, get("/checkables")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 8);

    let (status, body) = send(&app, get("/checkables/1-2")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "When You're Gone");
    assert_eq!(body["media_type"], "Music");

    let (status, body) = send(&app, get("/checkables/types/Ticket")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isbn"], "3-0");

    let (status, body) = send(&app, get("/checkables/types/List")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "CHECKABLE_NOT_FOUND");
}

#[tokio::test]
async fn test_create_checkable_then_conflict() {
    let app = setup_app(Vec::new());
    let new_kit = json!({ "type": "ScienceKit", "isbn": "2-2", "title": "Microscope" });

    let (status, body) = send(&app, post_json("/checkables", new_kit.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["key"], "2-2");

    let (status, _) = send(&app, post_json("/checkables", new_kit)).await;
    assert_eq!(status, StatusCode::CONFLICT);

    assert_eq!(
        app.checkable_repository.saved(),
        vec![Checkable::from(ScienceKit::new("2-2", "Microscope"))]
    );
}

#[tokio::test]
async fn test_repository_failure_maps_to_internal_error() {
    let app = setup_app(Vec::new());
    app.library_repository.fail_with("connection refused");

    let (status, body) = send(&app, get("/libraries")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "REPOSITORY_ERROR");
    assert_eq!(body["message"], "Failed to access the data store");
}

#[test]
fn test_error_response_shape() {
    let body = serde_json::to_value(ErrorResponse::new("LIBRARY_NOT_FOUND", "x not found!")).unwrap();
    assert_eq!(body, json!({ "error": "LIBRARY_NOT_FOUND", "message": "x not found!" }));
}
