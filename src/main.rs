//! agroscore: weighted viability scoring for rural properties
//!
//! CLI wrapper around the scoring engine: parse arguments, load an attribute
//! record, evaluate once, render the result.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;

use agroscore::cli::{self, exit_codes, ScoreConfig};
use agroscore::config::input_json_schema;
use agroscore::reports::ReportFormat;

/// Build long version string with methodology info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nCategory weights:",
        "\n  logistics 35%, legal/environmental 30%, water 15%,",
        "\n  agronomy 10%, topography 10%",
        "\n\nClassification bands:",
        "\n  A >= 8.0, B >= 6.5, C >= 4.5, D below",
        "\n\nOutput formats:",
        "\n  summary, json, markdown"
    )
}

#[derive(Parser)]
#[command(name = "agroscore")]
#[command(version, long_version = build_long_version())]
#[command(about = "Weighted viability scoring for rural properties", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Evaluation succeeded
    1  Composite index below --min-index
    3  Error occurred

EXAMPLES:
    # Score a farm from a JSON attribute record
    agroscore score farm.json

    # Pipe a record through stdin, export JSON
    cat farm.json | agroscore score -o json > report.json

    # Gate a deal pipeline on a minimum index
    agroscore score farm.json --min-index 6.5 -o summary

    # Inspect the methodology (weights, bands, rationale)
    agroscore methodology")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `score` subcommand
#[derive(Parser)]
struct ScoreArgs {
    /// Path to the farm attribute record (JSON); `-` or absent reads stdin
    input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "summary")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Exit with code 1 if the composite index is below this value
    #[arg(long)]
    min_index: Option<f64>,

    /// Include the weight table in the report
    #[arg(long)]
    show_weights: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a farm attribute record
    Score(ScoreArgs),

    /// Print the scoring methodology (weights, rationale, bands)
    Methodology,

    /// Print the JSON Schema for the attribute record
    Schema,

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

fn init_tracing(verbose: bool, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let exit_code = match cli.command {
        Commands::Score(args) => cli::run_score(ScoreConfig {
            input: args.input,
            output: args.output,
            output_file: args.output_file,
            min_index: args.min_index,
            show_weights: args.show_weights,
            no_color: cli.no_color,
        })?,
        Commands::Methodology => cli::run_methodology()?,
        Commands::Schema => {
            println!("{}", input_json_schema());
            exit_codes::SUCCESS
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut io::stdout());
            exit_codes::SUCCESS
        }
    };

    if exit_code != exit_codes::SUCCESS {
        std::process::exit(exit_code);
    }
    Ok(())
}
