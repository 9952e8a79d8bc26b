//! Error types raised by the purge workflow and its storage ports.
//!
//! Store-specific errors (e.g. `DatabaseError` in `sk-db`) are converted into
//! [`StoreError`] at the port boundary. A unified error is deferred to
//! `sk-cli`, which reports everything through `anyhow`.

use thiserror::Error;

use crate::dates::DateError;

/// Errors surfaced by a `LogRepository` or `TermRepository` implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A query against the backing store failed.
    #[error("Storage query failed: {0}")]
    Query(String),

    /// Catch-all for backend errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Broad classification of a [`PurgeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad operator input, rejected before touching the store.
    Validation,
    /// The requested log type does not exist.
    NotFound,
    /// The store failed mid-run.
    Storage,
}

/// Terminal failures of `LogPurge::execute`. None of them are retried.
#[derive(Debug, Error)]
pub enum PurgeError {
    #[error("Invalid action. Available actions are: {available}")]
    InvalidAction { given: String, available: String },

    #[error("Please specify a type")]
    MissingLogType,

    #[error("Invalid log type provided: {slug}")]
    UnknownLogType { slug: String },

    #[error("Invalid --{flag} value '{input}': {source}")]
    InvalidDate {
        flag: &'static str,
        input: String,
        #[source]
        source: DateError,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl PurgeError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidAction { .. } | Self::MissingLogType | Self::InvalidDate { .. } => {
                ErrorKind::Validation
            }
            Self::UnknownLogType { .. } => ErrorKind::NotFound,
            Self::Store(_) => ErrorKind::Storage,
        }
    }

    /// Extra lines printed under the error message to help the operator.
    #[must_use]
    pub const fn hint_lines(&self) -> &'static [&'static str] {
        match self {
            Self::MissingLogType => &[
                "Example: To remove api request logs",
                "sk logs prune --type=api_request",
            ],
            _ => &[],
        }
    }
}
