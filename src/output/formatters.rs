//! Formatting utilities for terminal output

use crate::core::{Code, Feedback};
use colored::Colorize;

/// Format feedback as a peg row
///
/// `●` marks an exact match, `○` a color-only match, `·` pads the row to the
/// code length so rows line up turn over turn.
#[must_use]
pub fn feedback_pegs(feedback: Feedback, code_length: usize) -> String {
    let mut result = String::with_capacity(code_length * 3);

    for _ in 0..feedback.exact() {
        result.push('●');
    }
    for _ in 0..feedback.color_only() {
        result.push('○');
    }
    for _ in feedback.total()..code_length {
        result.push('·');
    }

    result
}

/// Render a code with one terminal color per peg color
#[must_use]
pub fn colorize_code(code: &Code) -> String {
    code.pegs()
        .iter()
        .map(|peg| {
            let symbol = peg.symbol().to_string();
            let colored = match peg.symbol() {
                'A' => symbol.red(),
                'B' => symbol.green(),
                'C' => symbol.yellow(),
                'D' => symbol.blue(),
                'E' => symbol.magenta(),
                'F' => symbol.cyan(),
                _ => symbol.white(),
            };
            colored.bold().to_string()
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
