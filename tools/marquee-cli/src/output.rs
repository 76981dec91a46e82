//! Terminal and JSON output for the CLI.
//!
//! In `--json` mode human-readable lines are suppressed so stdout carries
//! only the JSON document; errors still go to stderr as `{"error": ...}`.

use std::fmt::Display;

use console::{style, StyledObject};

#[derive(Clone, Copy)]
enum Stream {
    Stdout,
    Stderr,
}

/// Message sink shared by every command.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    pub fn is_json(&self) -> bool {
        self.json
    }

    fn line(&self, stream: Stream, marker: StyledObject<&str>, text: impl Display) {
        if self.json {
            return;
        }
        match stream {
            Stream::Stdout => println!("{} {}", marker, text),
            Stream::Stderr => eprintln!("{} {}", marker, text),
        }
    }

    pub fn info(&self, msg: &str) {
        self.line(Stream::Stdout, style("ℹ").blue(), msg);
    }

    /// Status lines go to stderr so rendered HTML can be piped from stdout.
    pub fn success(&self, msg: &str) {
        self.line(Stream::Stderr, style("✓").green(), msg);
    }

    pub fn warn(&self, msg: &str) {
        self.line(Stream::Stderr, style("⚠").yellow(), msg);
    }

    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        } else {
            self.line(Stream::Stderr, style("✗").red(), style(msg).red());
        }
    }

    /// Shown with `--verbose` only.
    pub fn debug(&self, msg: &str) {
        if self.verbose {
            self.line(Stream::Stderr, style("→").dim(), style(msg).dim());
        }
    }

    pub fn header(&self, title: &str) {
        if !self.json {
            println!("\n{}", style(title).bold().underlined());
        }
    }

    /// Print `value` as pretty JSON regardless of mode.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        match serde_json::to_string_pretty(value) {
            Ok(json) => println!("{}", json),
            Err(e) => self.error(&format!("Failed to encode JSON: {}", e)),
        }
    }

    pub fn kv(&self, key: &str, value: &str) {
        self.line(Stream::Stdout, style(" ").dim(), format_args!("{}: {}", style(key).dim(), value));
    }

    pub fn list_item(&self, item: &str) {
        self.line(Stream::Stdout, style("  •").dim(), item);
    }

    /// Left-aligned columns padded to `widths`.
    pub fn table_row(&self, cells: &[&str], widths: &[usize]) {
        let row = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join("  ");
        self.line(Stream::Stdout, style(" ").dim(), row);
    }
}

/// Colored label for a presence phase.
pub fn phase_badge(phase: &str) -> String {
    match phase {
        "entering" => style(phase).green().to_string(),
        "exiting" => style(phase).yellow().to_string(),
        "present" => style(phase).dim().to_string(),
        _ => phase.to_string(),
    }
}

/// Format milliseconds as `1.25s` or `300ms`.
pub fn format_millis(ms: u128) -> String {
    if ms >= 1000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        format!("{}ms", ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_millis() {
        assert_eq!(format_millis(300), "300ms");
        assert_eq!(format_millis(1250), "1.25s");
    }

    #[test]
    fn test_phase_badge_keeps_text() {
        assert!(phase_badge("exiting").contains("exiting"));
        assert_eq!(phase_badge("other"), "other");
    }
}
