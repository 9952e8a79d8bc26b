//! Actions and terminal statuses of the log purge workflow.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::PurgeError;

// ---------------------------------------------------------------------------
// PurgeAction
// ---------------------------------------------------------------------------

/// What `sk logs <action>` should do with the matching records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurgeAction {
    Prune,
    Count,
}

impl PurgeAction {
    /// Every supported action, in the order they are listed to the operator.
    pub const ALL: [Self; 2] = [Self::Prune, Self::Count];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Prune => "prune",
            Self::Count => "count",
        }
    }

    /// Parse a raw action argument.
    ///
    /// # Errors
    ///
    /// Returns `PurgeError::InvalidAction` listing the available actions when
    /// `raw` is missing, empty, or not one of [`PurgeAction::ALL`].
    pub fn parse(raw: Option<&str>) -> Result<Self, PurgeError> {
        let given = raw.map(str::trim).unwrap_or_default();
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == given)
            .ok_or_else(|| PurgeError::InvalidAction {
                given: given.to_string(),
                available: Self::available(),
            })
    }

    /// Comma separated list of actions, e.g. `"prune, count"`.
    #[must_use]
    pub fn available() -> String {
        Self::ALL
            .iter()
            .map(|action| action.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for PurgeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// PurgeStatus
// ---------------------------------------------------------------------------

/// Terminal state a purge run ended in.
///
/// ```text
/// validated → queried → empty
///                     → counted
///                     → awaiting confirmation → aborted
///                                             → purging → recounting → purged
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurgeStatus {
    Empty,
    Counted,
    Aborted,
    Purged,
}

impl PurgeStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Counted => "counted",
            Self::Aborted => "aborted",
            Self::Purged => "purged",
        }
    }
}

impl fmt::Display for PurgeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("prune", PurgeAction::Prune)]
    #[case("count", PurgeAction::Count)]
    #[case(" count ", PurgeAction::Count)]
    fn parses_known_actions(#[case] raw: &str, #[case] expected: PurgeAction) {
        assert_eq!(PurgeAction::parse(Some(raw)).unwrap(), expected);
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("delete"))]
    #[case(Some("PRUNE"))]
    fn rejects_unknown_actions_with_enumerated_list(#[case] raw: Option<&str>) {
        let err = PurgeAction::parse(raw).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid action. Available actions are: prune, count"
        );
    }

    #[test]
    fn serializes_snake_case() {
        let json = serde_json::to_string(&PurgeStatus::Purged).unwrap();
        assert_eq!(json, "\"purged\"");
        let action: PurgeAction = serde_json::from_str("\"count\"").unwrap();
        assert_eq!(action, PurgeAction::Count);
    }
}
