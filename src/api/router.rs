use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{
    AppState, create_checkable, create_library, get_checkable, get_checkable_amount,
    get_checkable_by_type, get_library, list_available_checkouts, list_checkables,
    list_libraries, list_overdue_checkouts,
};

/// Creates the API router with all inventory endpoints
///
/// Libraries:
/// - GET/POST /libraries
/// - GET /libraries/:name
/// - GET /libraries/:name/checkables/:isbn - copies held by one library
/// - GET /libraries/:name/overdue - overdue checkouts
///
/// Checkables:
/// - GET/POST /checkables
/// - GET /checkables/:isbn
/// - GET /checkables/:isbn/availability - libraries stocking the item
/// - GET /checkables/types/:type_name
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        .route("/libraries", get(list_libraries).post(create_library))
        .route("/libraries/:name", get(get_library))
        .route(
            "/libraries/:name/checkables/:isbn",
            get(get_checkable_amount),
        )
        .route("/libraries/:name/overdue", get(list_overdue_checkouts))
        .route("/checkables", get(list_checkables).post(create_checkable))
        .route("/checkables/types/:type_name", get(get_checkable_by_type))
        .route("/checkables/:isbn", get(get_checkable))
        .route(
            "/checkables/:isbn/availability",
            get(list_available_checkouts),
        )
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        // Add application state
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
