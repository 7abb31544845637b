//! Output formatting for CLI commands
//!
//! Provides utilities for formatting command output in human-readable
//! or JSON formats. Supports colored output (respects NO_COLOR env var).

use crate::core::search::Facet;

/// Color scheme for CLI output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Style for labels/headers
    pub fn label(s: &str) -> ColoredString {
        s.bold()
    }

    /// Style for record IDs
    pub fn record_id(s: &str) -> ColoredString {
        s.cyan()
    }

    /// Style for catalog names and categories
    pub fn catalog(s: &str) -> ColoredString {
        s.blue()
    }

    /// Style for numbers/counts
    pub fn number(s: &str) -> ColoredString {
        s.yellow()
    }

    pub fn success(s: &str) -> ColoredString {
        s.green()
    }

    pub fn warning(s: &str) -> ColoredString {
        s.yellow()
    }

    pub fn error(s: &str) -> ColoredString {
        s.red().bold()
    }

    /// Style for dim/secondary text
    pub fn dim(s: &str) -> ColoredString {
        s.dimmed()
    }

    /// Style for search scores
    pub fn score(s: &str) -> ColoredString {
        s.magenta()
    }

    /// Style for rank numbers
    pub fn rank(s: &str) -> ColoredString {
        s.green().bold()
    }
}

/// Shorten `text` to at most `max_chars` characters, ending in "..."
///
/// Counts characters, not bytes, so umlauts never split.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("...");
    out
}

/// Format a score without trailing zeros ("3", "2.5")
pub fn format_score(score: f64) -> String {
    let formatted = format!("{score:.2}");
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Print facet counts as an aligned list
pub fn print_facet(facet: &Facet, indent: usize) {
    let width = facet.iter().map(|(v, _)| v.chars().count()).max().unwrap_or(0);
    for (value, count) in facet.iter() {
        let pad = width - value.chars().count();
        println!(
            "{:indent$}{}{:pad$}  {}",
            "",
            value,
            "",
            colors::number(&count.to_string())
        );
    }
}

pub fn print_success(message: &str) {
    println!("{}", colors::success(message));
}

pub fn print_warning(message: &str) {
    eprintln!("{}: {}", colors::warning("Warning"), message);
}

pub fn print_error(message: &str) {
    eprintln!("{}: {}", colors::error("Error"), message);
}

pub fn print_header(title: &str) {
    println!("{}", colors::label(title));
}
