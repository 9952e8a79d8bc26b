//! Service layer over the content store.
//!
//! `StoreService` wraps `SkDb` together with the log post type and taxonomy
//! it filters on. Repository methods live in `impl StoreService` blocks
//! under `repos/`, and the `sk-core` ports are implemented in `ports.rs`.

use sk_config::{LogsConfig, SkConfig};

use crate::SkDb;
use crate::error::DatabaseError;
use crate::tables::TableNames;

pub struct StoreService {
    db: SkDb,
    logs: LogsConfig,
}

impl StoreService {
    /// Create a new service over an existing local host store.
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the libSQL database file.
    /// * `table_prefix` - Host table prefix, e.g. `"wp_"`.
    /// * `logs` - Post type and taxonomy identifying log records.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the file is missing, lacks the content
    /// tables, or cannot be opened.
    pub async fn new_local(
        db_path: &str,
        table_prefix: &str,
        logs: LogsConfig,
    ) -> Result<Self, DatabaseError> {
        let db = SkDb::open_local(db_path, table_prefix).await?;
        Ok(Self::from_db(db, logs))
    }

    /// Like [`StoreService::new_local`], but creates the file and content
    /// tables when they are missing.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or migrated.
    pub async fn new_local_with_schema(
        db_path: &str,
        table_prefix: &str,
        logs: LogsConfig,
    ) -> Result<Self, DatabaseError> {
        let db = SkDb::open_local_with_schema(db_path, table_prefix).await?;
        Ok(Self::from_db(db, logs))
    }

    /// Open the store described by a loaded configuration.
    ///
    /// A file-backed store is opened as-is. An in-memory store starts empty,
    /// so it gets the content tables.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn open(config: &SkConfig) -> Result<Self, DatabaseError> {
        let database = &config.database;
        if database.is_in_memory() {
            Self::new_local_with_schema(&database.path, &database.table_prefix, config.logs.clone())
                .await
        } else {
            Self::new_local(&database.path, &database.table_prefix, config.logs.clone()).await
        }
    }

    /// Create from an existing `SkDb` (for testing).
    #[must_use]
    pub const fn from_db(db: SkDb, logs: LogsConfig) -> Self {
        Self { db, logs }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &SkDb {
        &self.db
    }

    #[must_use]
    pub const fn tables(&self) -> &TableNames {
        self.db.tables()
    }

    /// `post_type` marking a post as a log record.
    #[must_use]
    pub fn post_type(&self) -> &str {
        &self.logs.post_type
    }

    /// Taxonomy holding the log type terms.
    #[must_use]
    pub fn taxonomy(&self) -> &str {
        &self.logs.taxonomy
    }
}
