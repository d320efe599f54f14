//! Score command - score one candidate tag against a preference list.

use std::path::Path;

use clap::Args;

use crate::cli::{display_tag, load_table, OutputFormat, PreferenceArgs};
use crate::matching::scoring::{MatchScore, TagMatcher};

/// Arguments for the score command
#[derive(Args)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub preferences: PreferenceArgs,

    /// Candidate language tag (e.g. the track's language); "" means absent
    #[arg(required = true)]
    pub candidate: String,
}

/// Execute the score command
///
/// # Errors
///
/// Returns an error if the preference list or code table cannot be loaded.
#[allow(clippy::needless_pass_by_value)]
pub fn run(
    args: ScoreArgs,
    format: OutputFormat,
    verbose: bool,
    table: Option<&Path>,
) -> anyhow::Result<()> {
    let table = load_table(table)?;
    let prefs = args.preferences.load()?;

    if verbose {
        eprintln!(
            "Scoring against {} preferences ({} languages in code table)",
            prefs.len(),
            table.len()
        );
    }

    let matcher = TagMatcher::with_table(&table);
    let score = matcher.evaluate(
        prefs.iter().map(Option::as_deref),
        Some(args.candidate.as_str()),
    );

    match format {
        OutputFormat::Text => print_text_result(&args.candidate, &prefs, &score),
        OutputFormat::Json => print_json_result(&args.candidate, &prefs, &score)?,
        OutputFormat::Tsv => print_tsv_result(&args.candidate, &score),
    }

    Ok(())
}

fn print_text_result(candidate: &str, prefs: &[Option<String>], score: &MatchScore) {
    let listed: Vec<&str> = prefs.iter().map(|p| display_tag(p.as_deref())).collect();

    println!("Candidate: {}", display_tag(Some(candidate)));
    println!("Preferences: {}", listed.join(", "));
    println!("\n   Score: {} ({})", score.value, score.class);

    match (score.position, &score.preference) {
        (Some(position), Some(preference)) => {
            println!("   Matched preference #{position}: {preference}");
        }
        _ => println!("   No preference matched"),
    }
}

fn print_json_result(
    candidate: &str,
    prefs: &[Option<String>],
    score: &MatchScore,
) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "candidate": candidate,
        "preferences": prefs,
        "score": score,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_result(candidate: &str, score: &MatchScore) {
    println!("candidate\tscore\tclass\tposition\tpreference");
    println!(
        "{}\t{}\t{}\t{}\t{}",
        candidate,
        score.value,
        score.class,
        score.position.map_or_else(String::new, |p| p.to_string()),
        score.preference.as_deref().unwrap_or(""),
    );
}
