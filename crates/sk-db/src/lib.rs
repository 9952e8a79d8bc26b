//! # sk-db
//!
//! libSQL adapter for the host's content store.
//!
//! Reads log records (posts of the configured log post type) and log type
//! terms, deletes records together with their metadata and term
//! relationships, and recomputes term counts. Implements the
//! `LogRepository` and `TermRepository` ports from `sk-core`.
//!
//! Uses the `libsql` crate (C `SQLite` fork, v0.9.29).

pub mod error;
pub mod helpers;
mod migrations;
mod ports;
pub mod repos;
pub mod service;
pub mod tables;

#[cfg(test)]
mod test_support;

use std::collections::BTreeSet;
use std::path::Path;

use error::DatabaseError;
use libsql::Builder;
use tables::TableNames;

const IN_MEMORY: &str = ":memory:";

/// Database handle bound to one table prefix.
pub struct SkDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
    tables: TableNames,
}

impl SkDb {
    /// Open an existing host store at `path`.
    ///
    /// Never creates the file and never issues DDL. The five prefixed content
    /// tables must already exist.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::StoreNotFound` if `path` does not exist,
    /// `DatabaseError::MissingTables` if any content table is absent, and
    /// other variants if the prefix is invalid or the database cannot be
    /// opened.
    pub async fn open_local(path: &str, table_prefix: &str) -> Result<Self, DatabaseError> {
        let tables = TableNames::with_prefix(table_prefix)?;
        if path != IN_MEMORY && !Path::new(path).exists() {
            return Err(DatabaseError::StoreNotFound(path.to_string()));
        }

        let sk_db = Self::connect(path, tables).await?;
        sk_db.verify_schema().await?;
        tracing::debug!(path, prefix = table_prefix, "opened content store");
        Ok(sk_db)
    }

    /// Open a database at `path` (`:memory:` for a throwaway store), creating
    /// the file and the prefixed content tables if they are missing.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the prefix is invalid, the database cannot
    /// be opened, or migrations fail.
    pub async fn open_local_with_schema(
        path: &str,
        table_prefix: &str,
    ) -> Result<Self, DatabaseError> {
        let tables = TableNames::with_prefix(table_prefix)?;
        let sk_db = Self::connect(path, tables).await?;
        sk_db.run_migrations().await?;
        tracing::debug!(path, prefix = table_prefix, "opened content store with schema");
        Ok(sk_db)
    }

    async fn connect(path: &str, tables: TableNames) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;
        Ok(Self { db, conn, tables })
    }

    async fn verify_schema(&self) -> Result<(), DatabaseError> {
        let mut rows = self
            .conn
            .query("SELECT name FROM sqlite_master WHERE type = 'table'", ())
            .await?;

        let mut present = BTreeSet::new();
        while let Some(row) = rows.next().await? {
            present.insert(row.get::<String>(0)?);
        }

        let missing: Vec<String> = self
            .tables
            .all()
            .into_iter()
            .filter(|name| !present.contains(*name))
            .map(str::to_string)
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(DatabaseError::MissingTables(missing.join(", ")))
        }
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    #[must_use]
    pub const fn tables(&self) -> &TableNames {
        &self.tables
    }
}
