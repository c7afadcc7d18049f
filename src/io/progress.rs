//! Progress display for a running generation

use crate::algorithm::executor::{RunStatus, WaveRun};
use crate::io::configuration::{PROGRESS_BAR_WIDTH, PROGRESS_REFRESH_STEPS};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} cells {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Shows collapsed cells out of the grid total, plus contradiction restarts
///
/// The bar drops back whenever a contradiction resets the grid.
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    /// Create a visible progress bar for a grid of `total_cells`
    pub fn new(total_cells: usize) -> Self {
        let bar = ProgressBar::new(total_cells as u64);
        bar.set_style(PROGRESS_STYLE.clone());
        Self { bar }
    }

    /// Create a reporter that tracks progress without drawing anything
    pub fn hidden(total_cells: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(total_cells as u64);
        Self { bar }
    }

    /// Refresh from the run's current state
    ///
    /// Redraws every few steps and whenever the run is done, since counting
    /// collapsed cells walks the whole grid.
    pub fn update(&self, run: &WaveRun<'_>) {
        let stats = run.stats();
        if run.status() != RunStatus::Done && stats.steps % PROGRESS_REFRESH_STEPS != 0 {
            return;
        }
        self.bar
            .set_position(run.grid().collapsed_count() as u64);
        self.bar.set_message(format!("({} restarts)", stats.restarts));
    }

    /// Cells shown as collapsed at the last redraw
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clear the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
