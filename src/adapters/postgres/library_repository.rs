use crate::domain::Library;
use crate::ports::library_repository::{LibraryRepository as LibraryRepositoryTrait, Result};
use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};

/// Convert a `libraries` row back into the aggregate
fn map_row_to_library(row: &PgRow) -> Result<Library> {
    let document: serde_json::Value = row.get("document");
    Ok(serde_json::from_value(document)?)
}

/// PostgreSQL implementation of LibraryRepository
///
/// Each library is stored as one JSONB document (inventory and cards
/// included), keyed by name.
pub struct LibraryRepository {
    pool: PgPool,
}

impl LibraryRepository {
    /// Create a new LibraryRepository with a PostgreSQL connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LibraryRepositoryTrait for LibraryRepository {
    /// Libraries in creation order
    async fn find_all(&self) -> Result<Vec<Library>> {
        let rows = sqlx::query(
            r#"
            SELECT document
            FROM libraries
            ORDER BY created_at ASC, name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row_to_library).collect()
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Library>> {
        let row = sqlx::query(
            r#"
            SELECT document
            FROM libraries
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_row_to_library).transpose()
    }

    /// Upsert by name
    ///
    /// The primary key on `name` is what makes concurrent saves of the same
    /// library collapse into one row.
    async fn save(&self, library: Library) -> Result<()> {
        let document = serde_json::to_value(&library)?;

        sqlx::query(
            r#"
            INSERT INTO libraries (name, document)
            VALUES ($1, $2)
            ON CONFLICT (name)
            DO UPDATE SET document = EXCLUDED.document
            "#,
        )
        .bind(&library.name)
        .bind(document)
        .execute(&self.pool)
        .await?;

        tracing::debug!(library = %library.name, "library saved");
        Ok(())
    }
}
