// src/core/progress.rs
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::Cell;

use crate::models::Tally;

/// Observer notified while a loader consumes its input.
///
/// Implementations only observe; they never influence what gets loaded.
pub trait LoadProgress {
    /// Called once per input record with its 1-based position.
    fn advance(&self, position: u64, tally: Tally);

    /// Called once when the input is exhausted.
    fn finish(&self) {}
}

/// Progress observer that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl LoadProgress for NoProgress {
    #[inline]
    fn advance(&self, _position: u64, _tally: Tally) {}
}

/// Terminal progress bar showing records read, the running tally and an ETA.
pub struct BarProgress {
    bar: ProgressBar,
    last: Cell<Option<Tally>>,
}

impl BarProgress {
    /// The tally message is refreshed every this many records.
    const MESSAGE_EVERY: u64 = 1024;

    #[must_use]
    pub fn new(label: &str, total: u64) -> Self {
        let bar = ProgressBar::new(total);
        let template = format!("{label}: {{percent:>3}}% [{{wide_bar}}] {{pos}}/{{len}} {{msg}} {{eta}}");
        let style = ProgressStyle::with_template(&template)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> ");
        bar.set_style(style);
        Self {
            bar,
            last: Cell::new(None),
        }
    }
}

impl LoadProgress for BarProgress {
    fn advance(&self, position: u64, tally: Tally) {
        self.bar.set_position(position);
        self.last.set(Some(tally));
        if position % Self::MESSAGE_EVERY == 1 {
            self.bar.set_message(tally.to_string());
        }
    }

    fn finish(&self) {
        if let Some(tally) = self.last.get() {
            self.bar.set_message(tally.to_string());
        }
        self.bar.finish();
    }
}
