use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Count or prune log records of one type.
    Logs(LogsArgs),
}

/// Arguments for `sk logs`.
///
/// The action is a free-form positional so an unknown value is reported with
/// the list of available actions rather than a clap usage error.
#[derive(Clone, Debug, Args)]
pub struct LogsArgs {
    /// Action to run: prune, count
    pub action: Option<String>,

    /// Log type slug, e.g. api_request
    #[arg(long = "type", value_name = "SLUG")]
    pub log_type: Option<String>,

    /// Only records created strictly before this date (e.g. 2023-01-01, "-1 year")
    #[arg(long, value_name = "DATE", allow_hyphen_values = true)]
    pub before: Option<String>,

    /// Only records created strictly after this date
    #[arg(long, value_name = "DATE", allow_hyphen_values = true)]
    pub after: Option<String>,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}
