//! Terminal progress display for a synthesis run

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} cells {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar counting collapsed cells of the current attempt
///
/// A hidden bar is used when progress is suppressed, so callers never need
/// to check whether output is enabled.
#[derive(Clone)]
pub struct SynthesisProgress {
    bar: ProgressBar,
    max_attempts: usize,
}

impl SynthesisProgress {
    /// Create a bar for a grid of `cell_count` cells
    pub fn new(cell_count: usize, max_attempts: usize, visible: bool) -> Self {
        let target = if visible {
            ProgressDrawTarget::stderr()
        } else {
            ProgressDrawTarget::hidden()
        };
        let bar = ProgressBar::with_draw_target(Some(cell_count as u64), target);
        bar.set_style(PROGRESS_STYLE.clone());
        let progress = Self { bar, max_attempts };
        progress.start_attempt(1);
        progress
    }

    /// Reset the bar for a new attempt
    pub fn start_attempt(&self, attempt: usize) {
        self.bar.set_position(0);
        self.bar
            .set_prefix(format!("attempt {attempt}/{}", self.max_attempts));
        self.bar.set_message(String::new());
    }

    /// Report how many cells are collapsed
    pub fn update(&self, collapsed: usize) {
        self.bar.set_position(collapsed as u64);
    }

    /// Note a contradiction on the current attempt
    pub fn contradiction(&self) {
        self.bar.set_message("contradiction");
    }

    /// Leave the bar showing the final state
    pub fn finish(&self, message: &'static str) {
        self.bar.finish_with_message(message);
    }

    /// Remove the bar from the terminal
    pub fn clear(&self) {
        self.bar.finish_and_clear();
    }

    /// Underlying bar, for printing around it
    pub const fn bar(&self) -> &ProgressBar {
        &self.bar
    }
}
