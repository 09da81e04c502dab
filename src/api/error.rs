use crate::application::inventory::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ErrorResponse;

/// API層のエラー型
///
/// アプリケーション層のエラーをラップし、HTTPレスポンスへのマッピングを提供する。
#[derive(Debug)]
pub struct ApiError(ApplicationError);

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self.0 {
            // 404 Not Found - リクエストされたリソースが存在しない
            ApplicationError::LibraryNotFound(msg) => {
                (StatusCode::NOT_FOUND, "LIBRARY_NOT_FOUND", msg)
            }
            ApplicationError::CheckableNotFound(msg) => {
                (StatusCode::NOT_FOUND, "CHECKABLE_NOT_FOUND", msg)
            }

            // 409 Conflict - 一意キーの衝突
            ApplicationError::ResourceExists(msg) => {
                (StatusCode::CONFLICT, "RESOURCE_EXISTS", msg)
            }

            // 500 Internal Server Error - システム障害
            // 内部エラーの詳細はログに記録し、クライアントには一般的なメッセージのみを返す
            ApplicationError::RepositoryError(e) => {
                tracing::error!("Repository error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "REPOSITORY_ERROR",
                    "Failed to access the data store".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse::new(error_type, message));
        (status, body).into_response()
    }
}
