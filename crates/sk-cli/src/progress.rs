use std::sync::OnceLock;

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::ui;

/// Optional progress bar; a no-op when progress is disabled.
pub struct Progress {
    bar: Option<ProgressBar>,
}

static MULTI_PROGRESS: OnceLock<MultiProgress> = OnceLock::new();

fn multi_progress() -> &'static MultiProgress {
    MULTI_PROGRESS.get_or_init(MultiProgress::new)
}

fn bar_template() -> &'static str {
    match ui::prefs().term_width {
        Some(cols) if cols >= 110 => "{msg} {bar:40.cyan/blue} {pos}/{len} ({eta})",
        Some(cols) if cols >= 80 => "{msg} {wide_bar:.cyan/blue} {pos}/{len}",
        _ => "{msg} {wide_bar:.cyan/blue} {percent}%",
    }
}

impl Progress {
    #[must_use]
    pub fn bar(total: u64, message: &str) -> Self {
        if !ui::prefs().progress {
            return Self { bar: None };
        }

        let bar = multi_progress().add(ProgressBar::new(total));
        bar.set_style(
            ProgressStyle::with_template(bar_template())
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        bar.set_message(message.to_string());
        Self { bar: Some(bar) }
    }

    pub fn set_position(&self, position: u64) {
        if let Some(bar) = &self.bar {
            bar.set_position(position);
        }
    }

    pub fn finish_ok(&self) {
        if let Some(bar) = &self.bar {
            bar.finish();
        }
    }

    pub fn finish_err(&self, message: &str) {
        if let Some(bar) = &self.bar {
            bar.abandon_with_message(message.to_string());
        }
    }
}
