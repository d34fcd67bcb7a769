mod corpus;
mod input;
mod parser;
mod render;

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Parser, Subcommand};

use corpus::Corpus;
use render::episodes;

#[derive(Parser)]
#[command(
    name = "vocab_guide",
    about = "Build an HTML vocabulary guide from saved model responses"
)]
struct Cli {
    /// Defaults to `build` with the default paths
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse the responses and write the HTML guide
    Build {
        /// JSON array of response strings
        #[arg(short, long, default_value = input::DEFAULT_INPUT)]
        input: PathBuf,
        /// HTML file to write (overwritten)
        #[arg(short, long, default_value = input::DEFAULT_OUTPUT)]
        output: PathBuf,
    },
    /// Per-group entry counts
    Stats {
        #[arg(short, long, default_value = input::DEFAULT_INPUT)]
        input: PathBuf,
    },
    /// Print the parsed groups as JSON
    Dump {
        #[arg(short, long, default_value = input::DEFAULT_INPUT)]
        input: PathBuf,
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let command = cli.command.unwrap_or_else(|| Commands::Build {
        input: PathBuf::from(input::DEFAULT_INPUT),
        output: PathBuf::from(input::DEFAULT_OUTPUT),
    });

    match command {
        Commands::Build { input, output } => build(&input, &output)?,
        Commands::Stats { input } => {
            let corpus = load_corpus(&input)?;
            if corpus.groups.is_empty() {
                println!("No groups found.");
                return Ok(());
            }

            println!("{:>5} | {:>7} | {:<24}", "Group", "Entries", "Episode");
            println!("{}", "-".repeat(42));
            for group in &corpus.groups {
                let episode = episodes::episode_for(group.number)
                    .map(|e| truncate(e.name, 24))
                    .unwrap_or_else(|| "-".into());
                println!(
                    "{:>5} | {:>7} | {:<24}",
                    group.number,
                    group.entries.len(),
                    episode
                );
            }
            print_totals(&corpus);
        }
        Commands::Dump { input, pretty } => {
            let corpus = load_corpus(&input)?;
            let json = if pretty {
                serde_json::to_string_pretty(&corpus)?
            } else {
                serde_json::to_string(&corpus)?
            };
            println!("{}", json);
        }
    }

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        eprintln!("\nDone in {}", format_duration(elapsed));
    }

    Ok(())
}

fn load_corpus(path: &Path) -> anyhow::Result<Corpus> {
    let responses = input::load_responses(path)?;
    Ok(Corpus::from_responses(&responses))
}

fn build(input_path: &Path, output_path: &Path) -> anyhow::Result<()> {
    let corpus = load_corpus(input_path)?;
    print_totals(&corpus);

    let html = render::render_document(&corpus);
    input::write_document(output_path, &html)?;
    println!("Generated: {}", output_path.display());
    Ok(())
}

fn print_totals(corpus: &Corpus) {
    println!("\nTotal: {} groups", corpus.groups.len());
    println!("Total words: {}", corpus.total_entries());
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}
