//! Formatting utilities for terminal output

use colored::Colorize;

/// Separator between the words of a ladder
pub const LADDER_SEPARATOR: &str = " → ";

/// Index of the first letter that differs between two words
#[must_use]
pub fn changed_position(previous: &str, word: &str) -> Option<usize> {
    previous
        .chars()
        .zip(word.chars())
        .position(|(a, b)| a != b)
}

/// Plain ladder, e.g. `CAT → COT → DOG`
#[must_use]
pub fn format_ladder(words: &[String]) -> String {
    words.join(LADDER_SEPARATOR)
}

/// Ladder with the letter changed at each step highlighted
#[must_use]
pub fn highlight_ladder(words: &[String]) -> String {
    let mut parts = Vec::with_capacity(words.len());
    let mut previous: Option<&str> = None;

    for word in words {
        let changed = previous.and_then(|p| changed_position(p, word));
        let part: String = word
            .chars()
            .enumerate()
            .map(|(i, c)| {
                if Some(i) == changed {
                    c.to_string().bright_yellow().bold().to_string()
                } else {
                    c.to_string()
                }
            })
            .collect();
        parts.push(part);
        previous = Some(word.as_str());
    }

    parts.join(&LADDER_SEPARATOR.bright_black().to_string())
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
