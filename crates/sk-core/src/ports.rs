//! Storage ports consumed by the purge workflow.
//!
//! `sk-db` implements both traits on its `StoreService`; tests use in-memory
//! fakes. Implementations must return every matching id (no pagination) and
//! must delete a record's row, metadata and relationships as one unit.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{LogId, LogTypeCategory};
use crate::errors::StoreError;

/// Filter selecting log records of one type within optional date bounds.
///
/// Both bounds are exclusive: `before` keeps records created strictly before
/// the instant, `after` keeps records created strictly after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogQuery {
    pub log_type: LogTypeCategory,
    pub before: Option<DateTime<Utc>>,
    pub after: Option<DateTime<Utc>>,
}

impl LogQuery {
    /// Whether a record created at `created_at` falls inside the bounds.
    #[must_use]
    pub fn admits(&self, created_at: DateTime<Utc>) -> bool {
        self.before.is_none_or(|before| created_at < before)
            && self.after.is_none_or(|after| created_at > after)
    }
}

/// Record-query and record-deletion interface.
#[async_trait]
pub trait LogRepository: Send + Sync {
    /// Ids of every log record matching `query`, in ascending order.
    async fn query_log_ids(&self, query: &LogQuery) -> Result<Vec<LogId>, StoreError>;

    /// Delete the record, its metadata rows and its term relationships.
    async fn delete_log(&self, id: LogId) -> Result<(), StoreError>;
}

/// Log type term lookup and recount.
#[async_trait]
pub trait TermRepository: Send + Sync {
    /// Resolve a log type by slug. `None` when no such term exists.
    async fn find_log_type(&self, slug: &str) -> Result<Option<LogTypeCategory>, StoreError>;

    /// Recompute the term's cached count from live relationship rows,
    /// persist it, and return the new value.
    async fn recount_log_type(&self, log_type: &LogTypeCategory) -> Result<u64, StoreError>;
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn query(before: Option<DateTime<Utc>>, after: Option<DateTime<Utc>>) -> LogQuery {
        LogQuery {
            log_type: LogTypeCategory {
                term_id: 1,
                term_taxonomy_id: 1,
                name: "API Requests".into(),
                slug: "api_request".into(),
                count: 0,
            },
            before,
            after,
        }
    }

    #[test]
    fn bounds_are_exclusive() {
        let bound = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        let q = query(Some(bound), None);
        assert!(!q.admits(bound));
        assert!(q.admits(bound - chrono::TimeDelta::seconds(1)));

        let q = query(None, Some(bound));
        assert!(!q.admits(bound));
        assert!(q.admits(bound + chrono::TimeDelta::seconds(1)));
    }

    #[test]
    fn unbounded_query_admits_everything() {
        let q = query(None, None);
        assert!(q.admits(Utc.with_ymd_and_hms(1999, 12, 31, 23, 59, 59).unwrap()));
    }
}
