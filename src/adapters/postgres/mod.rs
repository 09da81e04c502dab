pub mod checkable_repository;
pub mod library_repository;

// パブリックに型を再エクスポート
pub use checkable_repository::CheckableRepository as PostgresCheckableRepository;
pub use library_repository::LibraryRepository as PostgresLibraryRepository;

use sqlx::PgPool;

/// マイグレーションを適用する
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
