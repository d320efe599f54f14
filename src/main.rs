use clap::Parser;
use tracing_subscriber::EnvFilter;

use lang_rank::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("lang_rank=debug,info")
    } else {
        EnvFilter::new("lang_rank=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let table = cli.table.as_deref();

    match cli.command {
        cli::Commands::Score(args) => {
            cli::score::run(args, cli.format, cli.verbose, table)?;
        }
        cli::Commands::Rank(args) => {
            cli::rank::run(args, cli.format, cli.verbose, table)?;
        }
        cli::Commands::Normalize(args) => {
            cli::normalize::run(args, cli.format, table)?;
        }
        cli::Commands::Guess(args) => {
            cli::guess::run(args, cli.format)?;
        }
        cli::Commands::Table(args) => {
            cli::table::run(args, cli.format, table)?;
        }
    }

    Ok(())
}
