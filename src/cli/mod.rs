//! Command-line interface for lang-rank.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **score**: Score one candidate tag against a preference list
//! - **rank**: Rank several candidate tags against a preference list
//! - **normalize**: Show the canonical form of primary language codes
//! - **guess**: Guess the language of external track files from their names
//! - **table**: List or export the language code table
//!
//! ## Usage
//!
//! ```text
//! # How well does a French Canadian track fit?
//! lang-rank score --prefs fr-CA,fr-FR fr-CA
//!
//! # Pick the best of several audio tracks
//! lang-rank rank --prefs jpn,en eng jpn ger
//!
//! # JSON output for scripting
//! lang-rank rank --prefs pt-BR,pt pt-PT por --format json
//!
//! # Use a custom code table
//! lang-rank --table my_codes.json normalize ger fre
//! ```

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use crate::catalog::store::CodeTable;
use crate::parsing::list::{parse_language_list, parse_language_list_file};

pub mod guess;
pub mod normalize;
pub mod rank;
pub mod score;
pub mod table;

#[derive(Parser)]
#[command(name = "lang-rank")]
#[command(version)]
#[command(about = "Score and rank language tags against a preference list")]
#[command(
    long_about = "lang-rank scores how well a track's language tag satisfies an ordered list of preferred languages.\n\nIt understands:\n- Two- and three-letter ISO 639 codes (en, eng) as the same language\n- Region, script and extension subtags (fr-CA, gsw-u-sd-chzh)\n- Preference order as a tie-breaker"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Path to custom language code table (JSON)
    #[arg(long, global = true)]
    pub table: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score one candidate tag against a preference list
    Score(score::ScoreArgs),

    /// Rank candidate tags against a preference list
    Rank(rank::RankArgs),

    /// Show the canonical form of primary language codes
    Normalize(normalize::NormalizeArgs),

    /// Guess track languages from file names
    Guess(guess::GuessArgs),

    /// Inspect the language code table
    Table(table::TableArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Where the preference list comes from, shared by `score` and `rank`
#[derive(Args)]
pub struct PreferenceArgs {
    /// Preferred languages, comma-separated, best first (e.g. "fr-CA,fr-FR,en")
    #[arg(short, long, conflicts_with = "prefs_file")]
    pub prefs: Option<String>,

    /// File with one preferred language per line, best first
    #[arg(long)]
    pub prefs_file: Option<PathBuf>,
}

impl PreferenceArgs {
    /// Load the preference list; an absent source is an empty list
    ///
    /// # Errors
    ///
    /// Returns an error if the list file cannot be read or the list is too long.
    pub fn load(&self) -> anyhow::Result<Vec<Option<String>>> {
        if let Some(path) = &self.prefs_file {
            return parse_language_list_file(path)
                .with_context(|| format!("Failed to read preferences from {}", path.display()));
        }

        match &self.prefs {
            Some(text) => Ok(parse_language_list(text)?),
            None => Ok(Vec::new()),
        }
    }
}

/// Load the custom code table if one was given, else use the embedded one
///
/// # Errors
///
/// Returns an error if the custom table cannot be read or is invalid.
pub fn load_table(path: Option<&Path>) -> anyhow::Result<Cow<'static, CodeTable>> {
    match path {
        Some(path) => {
            let table = CodeTable::load_from_file(path)
                .with_context(|| format!("Failed to load code table {}", path.display()))?;
            Ok(Cow::Owned(table))
        }
        None => Ok(Cow::Borrowed(CodeTable::global())),
    }
}

/// Text rendering of an optional tag
pub(crate) fn display_tag(tag: Option<&str>) -> &str {
    match tag {
        Some(t) if !t.is_empty() => t,
        _ => "<absent>",
    }
}
