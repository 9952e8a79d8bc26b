//! Response types returned by the purge workflow and rendered by `sk`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{PurgeAction, PurgeStatus};
use crate::ports::LogQuery;

/// Summary of one `sk logs <action>` run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PurgeReport {
    pub action: PurgeAction,
    pub log_type: String,
    /// Resolved `--before` bound, if any.
    pub before: Option<DateTime<Utc>>,
    /// Resolved `--after` bound, if any.
    pub after: Option<DateTime<Utc>>,
    pub status: PurgeStatus,
    pub matched: usize,
    pub deleted: usize,
    /// Recomputed term count; only set once a prune has finished.
    pub category_count: Option<u64>,
}

impl PurgeReport {
    #[must_use]
    pub fn new(action: PurgeAction, query: &LogQuery, status: PurgeStatus) -> Self {
        Self {
            action,
            log_type: query.log_type.slug.clone(),
            before: query.before,
            after: query.after,
            status,
            matched: 0,
            deleted: 0,
            category_count: None,
        }
    }
}
