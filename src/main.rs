// ABOUTME: Main entry point for the pitch-deck program.
// ABOUTME: Provides the CLI, sets up logging and reports the outcome of a build.

use clap::Parser;
use env_logger::Env;
use pitch_deck::{BuildReport, Config, DeckBuilder, DeckError};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Where to write the deck (defaults to Agentic_Testing_Framework_Pitch_Deck.pptx)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();
}

fn run(cli: &Cli) -> anyhow::Result<BuildReport> {
    let mut config = Config::new();
    if let Some(path) = &cli.output {
        config.output_path = path.clone();
    }

    let report = DeckBuilder::new(&config).build()?;
    Ok(report)
}

fn success_lines(report: &BuildReport) -> Vec<String> {
    vec![
        "✅ PowerPoint presentation created successfully!".to_string(),
        format!("📄 File: {}", report.path.display()),
        format!(
            "📊 Total slides: {} (including {} architecture diagrams)",
            report.slide_count, report.diagram_count
        ),
    ]
}

/// Console lines for a failed build: a missing renderer gets its install hint.
fn failure_lines(e: &anyhow::Error) -> Vec<String> {
    match e.downcast_ref::<DeckError>() {
        Some(err @ DeckError::RendererUnavailable { .. }) => {
            let mut lines = vec![format!("❌ Error: {}", err)];
            if let Some(hint) = err.hint() {
                lines.push(format!("📦 {}", hint));
            }
            lines
        }
        _ => vec![format!("❌ Error creating presentation: {:#}", e)],
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(report) => {
            for line in success_lines(&report) {
                println!("{}", line);
            }
        }
        Err(e) => {
            for line in failure_lines(&e) {
                eprintln!("{}", line);
            }
            // One exit status for every failure kind; the message says which.
            std::process::exit(1);
        }
    }
}
