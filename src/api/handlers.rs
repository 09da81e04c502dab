use crate::application::inventory::{CheckableService, LibraryService};
use crate::domain::{
    Checkable, CheckableAmount, Library, LibraryAvailableCheckouts, OverdueCheckout,
};
use crate::ports::{CheckableRepository, Clock, LibraryRepository};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;

use super::{
    error::ApiError,
    types::{CreateLibraryRequest, CreatedResponse},
};

// ============================================================================
// State
// ============================================================================

/// ハンドラー間で共有されるアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub library_service: LibraryService,
    pub checkable_service: CheckableService,
}

impl AppState {
    /// リポジトリと時刻ポートからサービスを組み立てる
    pub fn new(
        library_repository: Arc<dyn LibraryRepository>,
        checkable_repository: Arc<dyn CheckableRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let checkable_service = CheckableService::new(checkable_repository);
        let library_service =
            LibraryService::new(library_repository, checkable_service.clone(), clock);

        Self {
            library_service,
            checkable_service,
        }
    }
}

// ============================================================================
// Library handlers
// ============================================================================

/// GET /libraries - 図書館一覧
pub async fn list_libraries(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Library>>, ApiError> {
    let libraries = state.library_service.get_libraries().await?;
    Ok(Json(libraries))
}

/// GET /libraries/:name - 図書館を名前で取得
pub async fn get_library(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<Library>, ApiError> {
    let library = state.library_service.get_library_by_name(&name).await?;
    Ok(Json(library))
}

/// POST /libraries - 図書館を登録
///
/// 同名の図書館がある場合は409を返す。
pub async fn create_library(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateLibraryRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let library = req.into_library();
    let key = library.name.clone();

    state.library_service.save(library).await?;

    tracing::info!(library = %key, "library created");
    Ok((StatusCode::CREATED, Json(CreatedResponse { key })))
}

/// GET /libraries/:name/checkables/:isbn - 図書館の在庫冊数
///
/// isbnが全体に存在し、この図書館に在庫がない場合は冊数0。
pub async fn get_checkable_amount(
    State(state): State<Arc<AppState>>,
    Path((name, isbn)): Path<(String, String)>,
) -> Result<Json<CheckableAmount>, ApiError> {
    let amount = state
        .library_service
        .get_checkable_amount(&name, &isbn)
        .await?;
    Ok(Json(amount))
}

/// GET /libraries/:name/overdue - 延滞貸出の一覧
pub async fn list_overdue_checkouts(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<Vec<OverdueCheckout>>, ApiError> {
    let overdue = state.library_service.get_overdue_checkouts(&name).await?;
    Ok(Json(overdue))
}

// ============================================================================
// Checkable handlers
// ============================================================================

/// GET /checkables - 資料一覧
pub async fn list_checkables(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Checkable>>, ApiError> {
    let checkables = state.checkable_service.get_all().await?;
    Ok(Json(checkables))
}

/// GET /checkables/:isbn - 資料をisbnで取得
pub async fn get_checkable(
    State(state): State<Arc<AppState>>,
    Path(isbn): Path<String>,
) -> Result<Json<Checkable>, ApiError> {
    let checkable = state.checkable_service.get_by_isbn(&isbn).await?;
    Ok(Json(checkable))
}

/// GET /checkables/types/:type_name - 指定バリアントの資料を1件取得
pub async fn get_checkable_by_type(
    State(state): State<Arc<AppState>>,
    Path(type_name): Path<String>,
) -> Result<Json<Checkable>, ApiError> {
    let checkable = state.checkable_service.get_by_type(&type_name).await?;
    Ok(Json(checkable))
}

/// GET /checkables/:isbn/availability - 資料を在庫している図書館
pub async fn list_available_checkouts(
    State(state): State<Arc<AppState>>,
    Path(isbn): Path<String>,
) -> Result<Json<Vec<LibraryAvailableCheckouts>>, ApiError> {
    let available = state
        .library_service
        .get_libraries_with_available_checkout(&isbn)
        .await?;
    Ok(Json(available))
}

/// POST /checkables - 資料を登録
///
/// 同じisbnの資料がある場合は409を返す。
pub async fn create_checkable(
    State(state): State<Arc<AppState>>,
    Json(checkable): Json<Checkable>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let key = checkable.isbn().to_string();

    state.checkable_service.save(checkable).await?;

    tracing::info!(isbn = %key, "checkable created");
    Ok((StatusCode::CREATED, Json(CreatedResponse { key })))
}
