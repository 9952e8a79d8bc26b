//! Database migration runner.
//!
//! Embeds the SQL migration files at compile time and executes them from
//! `SkDb::open_local_with_schema`. All statements use `IF NOT EXISTS` for
//! idempotent re-running.

use crate::SkDb;
use crate::error::DatabaseError;

/// Host content store: posts, postmeta, terms, term taxonomy, relationships.
const MIGRATION_001: &str = include_str!("../migrations/001_content_store.sql");

impl SkDb {
    /// Run all embedded migrations in sequence against the prefixed tables.
    pub(crate) async fn run_migrations(&self) -> Result<(), DatabaseError> {
        let sql = MIGRATION_001.replace("{prefix}", self.tables.prefix());
        self.conn
            .execute_batch(&sql)
            .await
            .map_err(|e| DatabaseError::Migration(format!("001_content_store: {e}")))?;
        Ok(())
    }
}
