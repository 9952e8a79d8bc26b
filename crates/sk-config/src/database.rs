//! Content store location and table naming.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_path() -> String {
    "shopkeep.db".to_string()
}

fn default_table_prefix() -> String {
    "wp_".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Path to the libSQL database file. `:memory:` opens a throwaway store.
    #[serde(default = "default_path")]
    pub path: String,

    /// Prefix prepended to every host table name (`wp_posts`, `wp_postmeta`, ...).
    #[serde(default = "default_table_prefix")]
    pub table_prefix: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            table_prefix: default_table_prefix(),
        }
    }
}

impl DatabaseConfig {
    /// Whether the database lives only in memory for this process.
    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.path == ":memory:"
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.path".into(),
                reason: "must not be empty".into(),
            });
        }
        if !is_valid_prefix(&self.table_prefix) {
            return Err(ConfigError::InvalidValue {
                field: "database.table_prefix".into(),
                reason: format!(
                    "'{}' may only contain ASCII letters, digits and underscores",
                    self.table_prefix
                ),
            });
        }
        Ok(())
    }
}

/// Table prefixes are spliced into SQL, so only `[A-Za-z0-9_]+` is accepted.
#[must_use]
pub fn is_valid_prefix(prefix: &str) -> bool {
    !prefix.is_empty()
        && prefix
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}
