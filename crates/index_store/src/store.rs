use sqlx::PgPool;
use thiserror::Error;
use tracing::debug;

use crate::migrations::run_migrations;
use crate::models::DocumentRecord;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to connect to database: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("schema migration failed: {0}")]
    Migration(String),

    #[error("query execution failed: {0}")]
    Query(#[source] sqlx::Error),
}

/// The document index: a single `documents` table read by substring match.
/// Each call checks a connection out of the pool for the duration of the
/// query and returns it on every exit path.
pub struct IndexStore {
    pool: PgPool,
}

impl IndexStore {
    /// Connects and brings the schema up to date.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPool::connect(database_url)
            .await
            .map_err(StoreError::Connect)?;

        run_migrations(database_url).await?;

        debug!("index store initialized, schema up to date");
        Ok(Self { pool })
    }

    /// Returns every record whose content contains `needle` as a
    /// case-insensitive literal substring, in the engine's default
    /// enumeration order.
    pub async fn find_by_content_substring(
        &self,
        needle: &str,
    ) -> Result<Vec<DocumentRecord>, StoreError> {
        let records = sqlx::query_as::<_, DocumentRecord>(
            "SELECT id, name, content FROM documents WHERE content ILIKE $1",
        )
        .bind(like_pattern(needle))
        .fetch_all(&self.pool)
        .await
        .map_err(StoreError::Query)?;

        debug!("substring query matched {} documents", records.len());
        Ok(records)
    }
}

/// Builds the ILIKE pattern for a literal substring match. LIKE wildcards in
/// the needle are escaped so that `50%` matches "50%" and nothing else.
pub fn like_pattern(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len() + 2);
    escaped.push('%');
    for c in needle.chars() {
        if c == '\\' || c == '%' || c == '_' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_wrap_needle_in_wildcards() {
        assert_eq!(like_pattern("fox"), "%fox%");
    }

    #[test]
    fn should_escape_like_metacharacters() {
        assert_eq!(like_pattern("50%"), "%50\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
        assert_eq!(like_pattern("back\\slash"), "%back\\\\slash%");
    }

    #[test]
    fn should_keep_plain_text_unchanged_between_wildcards() {
        assert_eq!(like_pattern("Hello World"), "%Hello World%");
    }

    #[tokio::test]
    async fn should_fail_to_connect_with_invalid_url() {
        let result = IndexStore::connect("postgresql://invalid").await;
        assert!(result.is_err());
    }
}
