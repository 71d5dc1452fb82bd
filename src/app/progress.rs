//! Console progress spinner.
//!
//! Purely cosmetic: nothing in a run depends on it, and it draws nothing when
//! disabled or when the console is not a terminal.

use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{PROGRESS_INTERVAL, SPINNER_GLYPHS};

/// Rotating-glyph spinner with a running count every `PROGRESS_INTERVAL` records.
pub struct Progress {
    bar: ProgressBar,
}

impl Progress {
    pub fn new(enabled: bool) -> Self {
        if !enabled {
            return Self::hidden();
        }
        let bar = ProgressBar::new_spinner();
        // Trailing space is the glyph shown once the spinner finishes
        let glyphs = format!("{SPINNER_GLYPHS} ");
        let style = ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars(&glyphs);
        bar.set_style(style);
        Self { bar }
    }

    /// A spinner that never draws.
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Called once per processed record with the number processed so far.
    pub fn record_processed(&self, records_tested: usize) {
        self.bar.tick();
        if records_tested > 0 && records_tested % PROGRESS_INTERVAL == 0 {
            self.bar
                .set_message(format!("{records_tested} records tested"));
        }
    }

    /// Prints a line to stdout without tearing the spinner.
    pub fn println(&self, line: &str) {
        self.bar.suspend(|| println!("{line}"));
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
