//! Functions command.

use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;

use super::Context;
use crate::cli::OutputFormat;
use crate::output::{print_csv, print_header, print_json, print_table};

#[derive(Tabled, Serialize)]
struct CatalogRow {
    #[tabled(rename = "Category")]
    category: &'static str,
    #[tabled(rename = "Entries")]
    entries: String,
}

/// Execute the functions command.
pub fn execute(ctx: &Context) -> Result<()> {
    let catalog = ctx.service.catalog();

    if ctx.format == OutputFormat::Json {
        return print_json(&catalog);
    }

    let groups = [
        ("basic", &catalog.basic),
        ("trigonometric", &catalog.trigonometric),
        ("exponential_logarithmic", &catalog.exponential_logarithmic),
        ("constants", &catalog.constants),
    ];

    match ctx.format {
        OutputFormat::Minimal => {
            for (_, names) in groups {
                for name in names {
                    println!("{name}");
                }
            }
        }
        OutputFormat::Csv => {
            let rows: Vec<CatalogRow> = groups
                .iter()
                .flat_map(|&(category, names)| {
                    names.iter().map(move |name| CatalogRow {
                        category,
                        entries: name.clone(),
                    })
                })
                .collect();
            print_csv(&rows)?;
        }
        OutputFormat::Table | OutputFormat::Json => {
            let rows: Vec<CatalogRow> = groups
                .iter()
                .map(|&(category, names)| CatalogRow {
                    category,
                    entries: names.join(", "),
                })
                .collect();
            if !ctx.quiet {
                print_header("Supported functions");
            }
            print_table(&rows);

            if !ctx.quiet {
                print_header("Examples");
                for example in &catalog.examples {
                    println!("  {example}");
                }
            }
        }
    }

    Ok(())
}
