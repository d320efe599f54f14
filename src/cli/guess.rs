use clap::Args;

use crate::cli::OutputFormat;
use crate::parsing::filename::{guess_language_from_filename, FilenameLanguage, TrackFlags};

#[derive(Args)]
pub struct GuessArgs {
    /// External track file names (e.g. "movie.en.forced.srt")
    #[arg(required = true, num_args = 1..)]
    pub files: Vec<String>,
}

#[allow(clippy::needless_pass_by_value)]
pub fn run(args: GuessArgs, format: OutputFormat) -> anyhow::Result<()> {
    let guesses: Vec<(&str, Option<FilenameLanguage>)> = args
        .files
        .iter()
        .map(|f| (f.as_str(), guess_language_from_filename(f)))
        .collect();

    match format {
        OutputFormat::Text => {
            for (file, guess) in &guesses {
                match guess {
                    Some(g) => println!("{file}: {}{}", g.tag, describe_flags(g.flags)),
                    None => println!("{file}: no language"),
                }
            }
        }
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = guesses
                .iter()
                .map(|(file, guess)| serde_json::json!({ "file": file, "language": guess }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("file\tlanguage\tforced\tdefault\thearing_impaired");
            for (file, guess) in &guesses {
                let flags = guess.as_ref().map(|g| g.flags).unwrap_or_default();
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    file,
                    guess.as_ref().map_or("", |g| g.tag.as_str()),
                    flags.forced,
                    flags.default,
                    flags.hearing_impaired,
                );
            }
        }
    }

    Ok(())
}

fn describe_flags(flags: TrackFlags) -> String {
    let mut names = Vec::new();
    if flags.forced {
        names.push("forced");
    }
    if flags.default {
        names.push("default");
    }
    if flags.hearing_impaired {
        names.push("hearing impaired");
    }

    if names.is_empty() {
        String::new()
    } else {
        format!(" [{}]", names.join(", "))
    }
}
