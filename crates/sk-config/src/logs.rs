//! Where log records and log type terms live in the content store.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_post_type() -> String {
    "edd_log".to_string()
}

fn default_taxonomy() -> String {
    "edd_log_type".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LogsConfig {
    /// `post_type` value that marks a post as a log record.
    #[serde(default = "default_post_type")]
    pub post_type: String,

    /// Taxonomy holding the log type terms (`api_request`, `sale`, ...).
    #[serde(default = "default_taxonomy")]
    pub taxonomy: String,
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            post_type: default_post_type(),
            taxonomy: default_taxonomy(),
        }
    }
}

impl LogsConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("logs.post_type", &self.post_type),
            ("logs.taxonomy", &self.taxonomy),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: field.into(),
                    reason: "must not be empty".into(),
                });
            }
        }
        Ok(())
    }
}
