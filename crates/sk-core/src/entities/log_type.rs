use serde::{Deserialize, Serialize};

/// A log type term (e.g. `api_request`) with its cached record count.
///
/// `count` is denormalized by the host. After a purge it is recomputed from
/// live relationship rows, never decremented.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogTypeCategory {
    pub term_id: i64,
    pub term_taxonomy_id: i64,
    pub name: String,
    pub slug: String,
    pub count: u64,
}
