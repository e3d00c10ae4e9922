//! Terminal rendering for the CLI.
//!
//! In `--json` mode every human-facing line is suppressed so stdout carries
//! exactly one JSON document; errors still go to stderr as `{"error": ...}`.

use std::time::Duration;

use console::{style, StyledObject};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

enum Stream {
    Stdout,
    Stderr,
}

impl Output {
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn is_json(&self) -> bool {
        self.json
    }

    fn line(&self, stream: Stream, marker: StyledObject<&str>, msg: impl std::fmt::Display) {
        if self.json {
            return;
        }
        match stream {
            Stream::Stdout => println!("{marker} {msg}"),
            Stream::Stderr => eprintln!("{marker} {msg}"),
        }
    }

    pub fn info(&self, msg: &str) {
        self.line(Stream::Stdout, style("ℹ").blue(), msg);
    }

    pub fn success(&self, msg: &str) {
        self.line(Stream::Stdout, style("✓").green(), msg);
    }

    pub fn warn(&self, msg: &str) {
        self.line(Stream::Stderr, style("⚠").yellow(), msg);
    }

    /// Only shown with `--verbose`.
    pub fn debug(&self, msg: &str) {
        if self.verbose {
            self.line(Stream::Stderr, style("→").dim(), style(msg).dim());
        }
    }

    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        } else {
            self.line(Stream::Stderr, style("✗").red(), style(msg).red());
        }
    }

    pub fn header(&self, title: &str) {
        if !self.json {
            println!("\n{}", style(title).bold().underlined());
        }
    }

    /// Pretty-printed JSON on stdout, regardless of mode.
    pub fn json<T: Serialize>(&self, value: &T) {
        match serde_json::to_string_pretty(value) {
            Ok(doc) => println!("{doc}"),
            Err(e) => self.error(&format!("could not encode output: {e}")),
        }
    }

    pub fn kv(&self, key: &str, value: &str) {
        if !self.json {
            println!("  {}: {value}", style(key).dim());
        }
    }

    /// Left-aligned columns padded to `widths`. Extra columns are dropped.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let row = cols
            .iter()
            .zip(widths)
            .map(|(col, &width)| format!("{col:width$}"))
            .collect::<Vec<_>>()
            .join("  ");
        println!("  {row}");
    }

    /// Spinner shown while a page is in flight; hidden in JSON mode.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let bar = ProgressBar::new_spinner().with_message(msg.to_owned());
        if let Ok(template) = ProgressStyle::with_template("{spinner:.green} {msg}") {
            bar.set_style(template);
        }
        bar.enable_steady_tick(Duration::from_millis(100));
        bar
    }
}

/// Row marker telling adverts apart from products.
pub fn entry_badge(is_advert: bool) -> String {
    if is_advert {
        style("AD").yellow().bold().to_string()
    } else {
        style("--").dim().to_string()
    }
}

/// Facet values are dimmed while unconstrained.
pub fn facet_value(value: &str) -> String {
    if value == "none" {
        style(value).dim().to_string()
    } else {
        style(value).cyan().to_string()
    }
}
