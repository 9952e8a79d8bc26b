use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat, ProgressMode};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UiPrefs {
    /// Colorize status cells in `--format table`.
    pub table_color: bool,
    /// Colorize the `Success:` / `Warning:` prefixes on stderr.
    pub message_color: bool,
    pub progress: bool,
    /// Whether stdin can answer a confirmation prompt.
    pub interactive: bool,
    pub term_width: Option<usize>,
}

/// Terminal facts the preferences are derived from.
#[derive(Clone, Copy, Debug, Default)]
pub struct Terminal {
    pub stdin_tty: bool,
    pub stdout_tty: bool,
    pub stderr_tty: bool,
    pub no_color: bool,
    pub columns: Option<usize>,
}

impl Terminal {
    fn detect() -> Self {
        Self {
            stdin_tty: std::io::stdin().is_terminal(),
            stdout_tty: std::io::stdout().is_terminal(),
            stderr_tty: std::io::stderr().is_terminal(),
            no_color: std::env::var_os("NO_COLOR").is_some(),
            columns: std::env::var("COLUMNS")
                .ok()
                .and_then(|value| value.parse::<usize>().ok()),
        }
    }
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let _ = UI_PREFS.set(resolve(flags, Terminal::detect()));
}

#[must_use]
pub fn prefs() -> UiPrefs {
    *UI_PREFS.get().unwrap_or(&UiPrefs {
        table_color: false,
        message_color: false,
        progress: false,
        interactive: false,
        term_width: None,
    })
}

#[must_use]
pub fn resolve(flags: &GlobalFlags, term: Terminal) -> UiPrefs {
    let is_table = flags.format == OutputFormat::Table;
    let (table_color, message_color) = match flags.color {
        ColorMode::Always => (is_table, true),
        ColorMode::Never => (false, false),
        ColorMode::Auto => (
            term.stdout_tty && is_table && !flags.quiet && !term.no_color,
            term.stderr_tty && !term.no_color,
        ),
    };

    // The bar draws on stderr, so `on` may force it even with JSON on stdout.
    let progress = match flags.progress {
        ProgressMode::On => !flags.quiet,
        ProgressMode::Off => false,
        ProgressMode::Auto => {
            term.stderr_tty && !flags.quiet && flags.format != OutputFormat::Json
        }
    };

    UiPrefs {
        table_color,
        message_color,
        progress,
        interactive: term.stdin_tty,
        term_width: term.columns.filter(|width| *width >= 40),
    }
}
