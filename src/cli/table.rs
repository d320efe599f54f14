use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};

use crate::catalog::store::LanguageCode;
use crate::cli::{load_table, OutputFormat};

#[derive(Args)]
pub struct TableArgs {
    #[command(subcommand)]
    pub command: TableCommands,
}

#[derive(Subcommand)]
pub enum TableCommands {
    /// List all languages in the code table
    List {
        /// Only show languages whose codes or name contain this text
        #[arg(long)]
        filter: Option<String>,
    },

    /// Export the code table to a JSON file
    Export {
        /// Output file path
        #[arg(required = true)]
        output: PathBuf,
    },
}

#[allow(clippy::needless_pass_by_value)]
pub fn run(args: TableArgs, format: OutputFormat, table: Option<&Path>) -> anyhow::Result<()> {
    match args.command {
        TableCommands::List { filter } => run_list(filter.as_deref(), format, table),
        TableCommands::Export { output } => run_export(&output, table),
    }
}

fn run_list(filter: Option<&str>, format: OutputFormat, table: Option<&Path>) -> anyhow::Result<()> {
    let table = load_table(table)?;

    let needle = filter.map(str::to_lowercase);
    let filtered: Vec<&LanguageCode> = table
        .languages
        .iter()
        .filter(|l| needle.as_deref().map_or(true, |n| language_contains(l, n)))
        .collect();

    match format {
        OutputFormat::Text => {
            println!("{:<6} {:<12} Name", "Code", "Aliases");
            println!("{}", "-".repeat(40));
            for language in &filtered {
                println!(
                    "{:<6} {:<12} {}",
                    language.alpha2,
                    language.alpha3.join(","),
                    language.name
                );
            }
            println!("\n{} of {} languages", filtered.len(), table.len());
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&filtered)?);
        }
        OutputFormat::Tsv => {
            println!("alpha2\talpha3\tname");
            for language in &filtered {
                println!(
                    "{}\t{}\t{}",
                    language.alpha2,
                    language.alpha3.join(","),
                    language.name
                );
            }
        }
    }

    Ok(())
}

fn run_export(output: &Path, table: Option<&Path>) -> anyhow::Result<()> {
    let table = load_table(table)?;
    let json = table.to_json()?;
    std::fs::write(output, json)?;
    println!(
        "Exported {} languages to {}",
        table.len(),
        output.display()
    );
    Ok(())
}

fn language_contains(language: &LanguageCode, needle: &str) -> bool {
    language.alpha2.contains(needle)
        || language.alpha3.iter().any(|c| c.contains(needle))
        || language.name.to_lowercase().contains(needle)
}
