//! The log retention workflow behind `sk logs prune` and `sk logs count`.
//!
//! [`LogPurge::execute`] walks a fixed sequence:
//!
//! ```text
//! idle → validated → queried → empty
//!                            → counted
//!                            → awaiting confirmation → aborted
//!                                                    → purging → recounting → purged
//! ```
//!
//! Side effects happen only after confirmation in the prune branch. Each
//! record is deleted as one unit by the `LogRepository`; the run as a whole is
//! not transactional, so a failure mid-way leaves earlier records purged and
//! later ones intact. Re-running the same filter picks up where it stopped.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::dates::{self, Clock, SystemClock};
use crate::entities::LogId;
use crate::enums::{PurgeAction, PurgeStatus};
use crate::errors::PurgeError;
use crate::ports::{LogQuery, LogRepository, TermRepository};
use crate::responses::PurgeReport;

/// Prompt shown before a prune deletes anything.
pub const CONFIRM_PROMPT: &str = "Are you sure you want to prune these logs?";

const PROGRESS_MESSAGE: &str = "Deleting log entries";

/// Operator input for one run, as parsed from the command line.
///
/// Empty strings are treated the same as absent values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PurgeRequest {
    pub action: Option<String>,
    pub log_type: Option<String>,
    pub before: Option<String>,
    pub after: Option<String>,
    /// Skip the interactive confirmation (`--yes`).
    pub assume_yes: bool,
}

impl PurgeRequest {
    /// Check the action and log type without touching any store.
    ///
    /// Returns the parsed action and the trimmed log type slug.
    ///
    /// # Errors
    ///
    /// Returns `PurgeError::InvalidAction` or `PurgeError::MissingLogType`.
    pub fn validate(&self) -> Result<(PurgeAction, &str), PurgeError> {
        let action = PurgeAction::parse(self.action.as_deref())?;
        let slug = non_empty(self.log_type.as_deref()).ok_or(PurgeError::MissingLogType)?;
        Ok((action, slug))
    }
}

/// Messaging, confirmation and progress surface driven by the workflow.
pub trait PurgeReporter {
    fn success(&self, message: &str);

    fn line(&self, message: &str);

    fn warning(&self, message: &str);

    /// Ask the operator to affirm. Anything but an explicit yes is `false`.
    fn confirm(&self, prompt: &str) -> bool;

    fn progress_start(&self, message: &str, total: u64);

    /// Called after each record is purged with the running total.
    fn progress_tick(&self, done: u64, total: u64);

    fn progress_finish(&self);

    fn progress_abandon(&self, message: &str);
}

/// Filters, counts and prunes log records through injected storage ports.
pub struct LogPurge {
    logs: Arc<dyn LogRepository>,
    terms: Arc<dyn TermRepository>,
    clock: Arc<dyn Clock>,
}

impl LogPurge {
    #[must_use]
    pub fn new(logs: Arc<dyn LogRepository>, terms: Arc<dyn TermRepository>) -> Self {
        Self {
            logs,
            terms,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the clock used to resolve relative date expressions.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Run one count or prune.
    ///
    /// An empty match set, a count, and a declined confirmation all return
    /// `Ok` with the matching [`PurgeStatus`].
    ///
    /// # Errors
    ///
    /// Returns `PurgeError` for an invalid action, a missing or unknown log
    /// type, an unparseable date bound, or a storage failure. Validation
    /// errors are raised before any deletion is attempted.
    pub async fn execute(
        &self,
        request: &PurgeRequest,
        reporter: &dyn PurgeReporter,
    ) -> Result<PurgeReport, PurgeError> {
        let (action, slug) = request.validate()?;

        let log_type = self
            .terms
            .find_log_type(slug)
            .await?
            .ok_or_else(|| PurgeError::UnknownLogType {
                slug: slug.to_string(),
            })?;

        let query = LogQuery {
            log_type,
            before: self.resolve_bound("before", request.before.as_deref())?,
            after: self.resolve_bound("after", request.after.as_deref())?,
        };

        let ids = self.logs.query_log_ids(&query).await?;
        debug!(
            action = %action,
            log_type = %query.log_type.slug,
            matched = ids.len(),
            "queried log records"
        );

        if ids.is_empty() {
            reporter.warning("No logs found");
            return Ok(PurgeReport::new(action, &query, PurgeStatus::Empty));
        }

        reporter.success(&format!("Found {} entries", ids.len()));

        match action {
            PurgeAction::Count => {
                let mut report = PurgeReport::new(action, &query, PurgeStatus::Counted);
                report.matched = ids.len();
                Ok(report)
            }
            PurgeAction::Prune => {
                self.prune(&query, &ids, request.assume_yes, reporter)
                    .await
            }
        }
    }

    async fn prune(
        &self,
        query: &LogQuery,
        ids: &[LogId],
        assume_yes: bool,
        reporter: &dyn PurgeReporter,
    ) -> Result<PurgeReport, PurgeError> {
        let mut report = PurgeReport::new(PurgeAction::Prune, query, PurgeStatus::Aborted);
        report.matched = ids.len();

        if !assume_yes && !reporter.confirm(CONFIRM_PROMPT) {
            info!(log_type = %query.log_type.slug, matched = ids.len(), "prune declined");
            return Ok(report);
        }

        let total = ids.len() as u64;
        reporter.progress_start(PROGRESS_MESSAGE, total);

        for (done, id) in (1_u64..).zip(ids) {
            if let Err(error) = self.logs.delete_log(*id).await {
                warn!(id, deleted = report.deleted, %error, "prune stopped on storage error");
                reporter.progress_abandon(&format!("Failed to delete log {id}"));
                return Err(error.into());
            }
            report.deleted += 1;
            reporter.progress_tick(done, total);
        }

        reporter.progress_finish();
        reporter.line("Recounting terms");

        let count = self.terms.recount_log_type(&query.log_type).await?;
        report.category_count = Some(count);
        report.status = PurgeStatus::Purged;

        info!(
            log_type = %query.log_type.slug,
            deleted = report.deleted,
            category_count = count,
            "prune finished"
        );
        Ok(report)
    }

    fn resolve_bound(
        &self,
        flag: &'static str,
        raw: Option<&str>,
    ) -> Result<Option<DateTime<Utc>>, PurgeError> {
        let Some(input) = non_empty(raw) else {
            return Ok(None);
        };
        dates::normalize(input, self.clock.as_ref())
            .map(Some)
            .map_err(|source| PurgeError::InvalidDate {
                flag,
                input: input.to_string(),
                source,
            })
    }
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}
