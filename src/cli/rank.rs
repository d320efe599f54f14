//! Rank command - order candidate tags by how well they fit the preferences.

use std::path::Path;

use clap::Args;

use crate::cli::{display_tag, load_table, OutputFormat, PreferenceArgs};
use crate::matching::engine::{RankedCandidate, RankingConfig, RankingEngine, DEFAULT_MIN_SCORE};
use crate::matching::scoring::TagMatcher;

/// Arguments for the rank command
#[derive(Args)]
pub struct RankArgs {
    #[command(flatten)]
    pub preferences: PreferenceArgs,

    /// Candidate language tags, in track order
    #[arg(required = true, num_args = 1..)]
    pub candidates: Vec<String>,

    /// Maximum number of results to show
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Minimum score for a candidate to be listed (0 lists non-matches too)
    #[arg(long, default_value_t = DEFAULT_MIN_SCORE)]
    pub min_score: i32,
}

/// Execute the rank command
///
/// # Errors
///
/// Returns an error if the preference list or code table cannot be loaded.
#[allow(clippy::needless_pass_by_value)]
pub fn run(
    args: RankArgs,
    format: OutputFormat,
    verbose: bool,
    table: Option<&Path>,
) -> anyhow::Result<()> {
    let table = load_table(table)?;
    let prefs = args.preferences.load()?;

    let config = RankingConfig {
        min_score: args.min_score,
        limit: args.limit,
    };

    let engine = RankingEngine::with_matcher(
        TagMatcher::with_table(&table),
        prefs.iter().map(Option::as_deref),
    )
    .with_config(config);

    let ranked = engine.rank(args.candidates.iter().map(String::as_str));

    if verbose {
        eprintln!(
            "{} of {} candidates ranked against {} preferences",
            ranked.len(),
            args.candidates.len(),
            prefs.len()
        );
    }

    match format {
        OutputFormat::Text => print_text_results(&ranked),
        OutputFormat::Json => print_json_results(&prefs, &ranked)?,
        OutputFormat::Tsv => print_tsv_results(&ranked),
    }

    Ok(())
}

fn print_text_results(ranked: &[RankedCandidate]) {
    if ranked.is_empty() {
        println!("No candidate matches the preferences.");
        return;
    }

    println!("Ranked candidates");
    println!("{}", "=".repeat(60));

    for (rank, result) in ranked.iter().enumerate() {
        let matched = result
            .score
            .preference
            .as_deref()
            .map_or_else(String::new, |p| format!(" via {p}"));
        println!(
            "{:>3}. {:<16} #{:<3} {:>10}  {}{}",
            rank + 1,
            display_tag(result.candidate.as_deref()),
            result.index,
            result.score.value,
            result.score.class,
            matched,
        );
    }
}

fn print_json_results(prefs: &[Option<String>], ranked: &[RankedCandidate]) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "preferences": prefs,
        "ranked": ranked,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_results(ranked: &[RankedCandidate]) {
    println!("rank\tindex\tcandidate\tscore\tclass\tpreference");
    for (rank, result) in ranked.iter().enumerate() {
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}",
            rank + 1,
            result.index,
            result.candidate.as_deref().unwrap_or(""),
            result.score.value,
            result.score.class,
            result.score.preference.as_deref().unwrap_or(""),
        );
    }
}
