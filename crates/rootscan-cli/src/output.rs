//! Output formatting utilities.

use colored::Colorize;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

/// Prints data as a rounded table.
pub fn print_table<T: Tabled>(rows: &[T]) {
    if rows.is_empty() {
        println!("{}", "(no rows)".dimmed());
        return;
    }

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()));

    println!("{table}");
}

/// Prints a value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}

/// Prints rows as CSV with a header line.
pub fn print_csv<T: Serialize>(rows: &[T]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_writer(std::io::stdout());
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Prints a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Prints a warning message to stderr.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow().bold(), message.yellow());
}

/// Prints a section header.
pub fn print_header(title: &str) {
    println!();
    println!("{}", title.bold().underline());
    println!();
}

/// Key-value pair for summary tables.
#[derive(Tabled, Serialize)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Fixed ten-decimal rendering for roots and function values.
pub fn fmt_value(v: f64) -> String {
    format!("{v:.10}")
}

/// Scientific rendering for errors and residuals.
pub fn fmt_error(v: f64) -> String {
    format!("{v:.3e}")
}

pub fn fmt_flag(v: bool) -> String {
    if v { "yes" } else { "no" }.to_string()
}

/// Comma-separated roots, or `none`.
pub fn fmt_roots(roots: &[f64]) -> String {
    if roots.is_empty() {
        return "none".to_string();
    }
    roots
        .iter()
        .map(|r| fmt_value(*r))
        .collect::<Vec<_>>()
        .join(", ")
}

/// One value per line, as printed by the minimal format.
pub fn print_lines(values: &[f64]) {
    for v in values {
        println!("{v}");
    }
}
