//! Formatting utilities for terminal output

use crate::core::Feedback;
use crate::solver::Verdict;

/// Tiles for a verdict; `Solved` renders as five greens
#[must_use]
pub fn verdict_tiles(verdict: &Verdict) -> String {
    match verdict {
        Verdict::Feedback(feedback) => feedback.to_emoji(),
        Verdict::Solved => Feedback::solved().to_emoji(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    #[allow(clippy::cast_sign_loss)]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar for a distribution row, at least one cell for a non-zero count
#[must_use]
pub fn distribution_bar(count: usize, max_count: usize, width: usize) -> usize {
    if max_count == 0 {
        return 0;
    }
    (count * width / max_count).max(usize::from(count > 0))
}
