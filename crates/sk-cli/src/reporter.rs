//! Terminal surface for the purge workflow: stderr messages, the dialoguer
//! confirmation prompt, and the indicatif deletion bar.

use std::cell::RefCell;

use dialoguer::{Confirm, theme::ColorfulTheme};
use sk_core::purge::PurgeReporter;

use crate::progress::Progress;
use crate::ui::UiPrefs;

pub struct TerminalReporter {
    quiet: bool,
    color: bool,
    interactive: bool,
    progress: RefCell<Option<Progress>>,
}

impl TerminalReporter {
    #[must_use]
    pub const fn new(prefs: UiPrefs, quiet: bool) -> Self {
        Self {
            quiet,
            color: prefs.message_color,
            interactive: prefs.interactive,
            progress: RefCell::new(None),
        }
    }

    fn label(&self, text: &str, code: &str) -> String {
        if self.color {
            format!("\u{1b}[{code}m{text}\u{1b}[0m")
        } else {
            text.to_string()
        }
    }
}

impl PurgeReporter for TerminalReporter {
    fn success(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {message}", self.label("Success:", "32"));
        }
    }

    fn line(&self, message: &str) {
        if !self.quiet {
            eprintln!("{message}");
        }
    }

    fn warning(&self, message: &str) {
        eprintln!("{} {message}", self.label("Warning:", "33"));
    }

    fn confirm(&self, prompt: &str) -> bool {
        if !self.interactive {
            tracing::warn!("stdin is not a terminal; prune declined (pass --yes to skip the prompt)");
            return false;
        }

        match Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(false)
            .interact()
        {
            Ok(answer) => answer,
            Err(error) => {
                tracing::warn!(%error, "confirmation prompt failed; prune declined");
                false
            }
        }
    }

    fn progress_start(&self, message: &str, total: u64) {
        self.progress.replace(Some(Progress::bar(total, message)));
    }

    fn progress_tick(&self, done: u64, _total: u64) {
        if let Some(progress) = self.progress.borrow().as_ref() {
            progress.set_position(done);
        }
    }

    fn progress_finish(&self) {
        if let Some(progress) = self.progress.take() {
            progress.finish_ok();
        }
    }

    fn progress_abandon(&self, message: &str) {
        if let Some(progress) = self.progress.take() {
            progress.finish_err(message);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn prefs(interactive: bool, color: bool) -> UiPrefs {
        UiPrefs {
            table_color: false,
            message_color: color,
            progress: false,
            interactive,
            term_width: None,
        }
    }

    #[test]
    fn non_interactive_confirmation_is_declined() {
        let reporter = TerminalReporter::new(prefs(false, false), false);
        assert!(!reporter.confirm("Are you sure you want to prune these logs?"));
    }

    #[test]
    fn labels_are_plain_without_color() {
        let reporter = TerminalReporter::new(prefs(false, false), false);
        assert_eq!(reporter.label("Success:", "32"), "Success:");
    }

    #[test]
    fn labels_carry_ansi_codes_with_color() {
        let reporter = TerminalReporter::new(prefs(false, true), false);
        assert_eq!(
            reporter.label("Warning:", "33"),
            "\u{1b}[33mWarning:\u{1b}[0m"
        );
    }

    #[test]
    fn progress_lifecycle_without_a_bar_is_harmless() {
        let reporter = TerminalReporter::new(prefs(false, false), true);
        reporter.progress_start("Deleting log entries", 2);
        reporter.progress_tick(1, 2);
        reporter.progress_tick(2, 2);
        reporter.progress_finish();
        reporter.progress_abandon("unused");
        assert!(reporter.progress.borrow().is_none());
    }
}
