//! Formatting utilities for terminal output

/// Absolute correlation below which a series shows no trend over time
pub const TREND_THRESHOLD: f64 = 0.2;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a board as `[A] B C D E F G`
#[must_use]
pub fn format_letters(center: char, outside: &[char]) -> String {
    let mut result = format!("[{}]", center.to_ascii_uppercase());
    for letter in outside {
        result.push(' ');
        result.push(letter.to_ascii_uppercase());
    }
    result
}

/// Share of `part` in `total` as a percentage, 0 for an empty total
#[must_use]
pub fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    part as f64 / total as f64 * 100.0
}

/// Describe a correlation coefficient
#[must_use]
pub fn trend_label(correlation: f64) -> &'static str {
    match correlation.abs() {
        r if r < TREND_THRESHOLD => "no trend",
        r if r < 0.5 => "weak trend",
        _ => "strong trend",
    }
}
