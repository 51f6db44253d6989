//! Config command.

use anyhow::Result;
use serde_json::Value;

use super::Context;
use crate::cli::OutputFormat;
use crate::output::{print_csv, print_json, KeyValue};

/// Execute the config command.
pub fn execute(ctx: &Context) -> Result<()> {
    let config = ctx.service.config();

    match ctx.format {
        OutputFormat::Json => print_json(config)?,
        OutputFormat::Csv => {
            let mut rows = Vec::new();
            flatten("", &serde_json::to_value(config)?, &mut rows);
            print_csv(&rows)?;
        }
        OutputFormat::Table | OutputFormat::Minimal => {
            if !ctx.quiet && ctx.format == OutputFormat::Table {
                match &ctx.config_source {
                    Some(path) => println!("# loaded from {}", path.display()),
                    None => println!("# built-in defaults"),
                }
            }
            print!("{}", config.to_toml_string()?);
        }
    }

    Ok(())
}

/// Dotted `section.key` rows for every leaf value.
fn flatten(prefix: &str, value: &Value, rows: &mut Vec<KeyValue>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(&path, child, rows);
            }
        }
        Value::String(s) => rows.push(KeyValue::new(prefix, s.as_str())),
        other => rows.push(KeyValue::new(prefix, other.to_string())),
    }
}
