use crate::domain::{Checkable, CheckableKind};
use crate::ports::checkable_repository::{
    CheckableRepository as CheckableRepositoryTrait, Result,
};
use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};

fn map_row_to_checkable(row: &PgRow) -> Result<Checkable> {
    let document: serde_json::Value = row.get("document");
    Ok(serde_json::from_value(document)?)
}

/// PostgreSQL implementation of CheckableRepository
///
/// Checkables are stored as tagged JSONB documents keyed by isbn. The `kind`
/// column duplicates the tag so `find_by_type` can filter without touching
/// the document.
pub struct CheckableRepository {
    pool: PgPool,
}

impl CheckableRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CheckableRepositoryTrait for CheckableRepository {
    async fn find_all(&self) -> Result<Vec<Checkable>> {
        let rows = sqlx::query(
            r#"
            SELECT document
            FROM checkables
            ORDER BY created_at ASC, isbn ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row_to_checkable).collect()
    }

    async fn find_by_isbn(&self, isbn: &str) -> Result<Option<Checkable>> {
        let row = sqlx::query(
            r#"
            SELECT document
            FROM checkables
            WHERE isbn = $1
            "#,
        )
        .bind(isbn)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_row_to_checkable).transpose()
    }

    /// Earliest-created checkable of the given kind
    async fn find_by_type(&self, kind: CheckableKind) -> Result<Option<Checkable>> {
        let row = sqlx::query(
            r#"
            SELECT document
            FROM checkables
            WHERE kind = $1
            ORDER BY created_at ASC, isbn ASC
            LIMIT 1
            "#,
        )
        .bind(kind.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_row_to_checkable).transpose()
    }

    async fn save(&self, checkable: Checkable) -> Result<()> {
        let document = serde_json::to_value(&checkable)?;

        sqlx::query(
            r#"
            INSERT INTO checkables (isbn, kind, document)
            VALUES ($1, $2, $3)
            ON CONFLICT (isbn)
            DO UPDATE SET
                kind = EXCLUDED.kind,
                document = EXCLUDED.document
            "#,
        )
        .bind(checkable.isbn())
        .bind(checkable.kind().as_str())
        .bind(document)
        .execute(&self.pool)
        .await?;

        tracing::debug!(isbn = checkable.isbn(), kind = %checkable.kind(), "checkable saved");
        Ok(())
    }
}
