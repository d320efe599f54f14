use std::path::Path;

use clap::Args;

use crate::catalog::store::CodeTable;
use crate::cli::{load_table, OutputFormat};
use crate::core::tag::LanguageTag;

#[derive(Args)]
pub struct NormalizeArgs {
    /// Language codes or full tags; only the primary subtag is normalized
    #[arg(required = true, num_args = 1..)]
    pub codes: Vec<String>,
}

struct Normalized<'a> {
    input: &'a str,
    canonical: String,
    name: Option<&'a str>,
}

#[allow(clippy::needless_pass_by_value)]
pub fn run(args: NormalizeArgs, format: OutputFormat, table: Option<&Path>) -> anyhow::Result<()> {
    let table = load_table(table)?;
    let rows: Vec<Normalized> = args
        .codes
        .iter()
        .map(|code| normalize_one(&table, code))
        .collect();

    match format {
        OutputFormat::Text => {
            for row in &rows {
                match row.name {
                    Some(name) => println!("{} -> {} ({name})", row.input, row.canonical),
                    None => println!("{} -> {}", row.input, row.canonical),
                }
            }
        }
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = rows
                .iter()
                .map(|row| {
                    serde_json::json!({
                        "input": row.input,
                        "canonical": row.canonical,
                        "known": row.name.is_some(),
                        "name": row.name,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("input\tcanonical\tname");
            for row in &rows {
                println!("{}\t{}\t{}", row.input, row.canonical, row.name.unwrap_or(""));
            }
        }
    }

    Ok(())
}

fn normalize_one<'a>(table: &'a CodeTable, input: &'a str) -> Normalized<'a> {
    let Some(tag) = LanguageTag::parse(input) else {
        return Normalized {
            input,
            canonical: String::new(),
            name: None,
        };
    };

    let mut subtags = tag.subtags().to_vec();
    subtags[0] = table.normalize_primary(tag.primary());

    Normalized {
        input,
        canonical: subtags.join("-"),
        name: table
            .lookup(tag.primary())
            .map(|l| l.name.as_str())
            .filter(|n| !n.is_empty()),
    }
}
