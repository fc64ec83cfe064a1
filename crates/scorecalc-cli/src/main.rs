//! scorecalc CLI: estimate SAT and ACT scores from raw section counts.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod render;

#[derive(Parser)]
#[command(name = "scorecalc", version, about = "SAT and ACT score estimator")]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate an ACT score
    Act {
        /// ACT variant: enhanced, legacy
        #[arg(long)]
        variant: Option<String>,

        /// English questions correct
        #[arg(long, allow_negative_numbers = true)]
        english: Option<i32>,

        /// Mathematics questions correct
        #[arg(long, allow_negative_numbers = true)]
        math: Option<i32>,

        /// Reading questions correct
        #[arg(long, allow_negative_numbers = true)]
        reading: Option<i32>,

        /// Science questions correct
        #[arg(long, allow_negative_numbers = true)]
        science: Option<i32>,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Estimate an SAT score
    Sat {
        /// SAT variant: digital, legacy (inferred from the section flags if omitted)
        #[arg(long)]
        variant: Option<String>,

        /// Reading and Writing module 1 correct (digital)
        #[arg(long, allow_negative_numbers = true)]
        rw1: Option<i32>,

        /// Reading and Writing module 2 correct (digital)
        #[arg(long, allow_negative_numbers = true)]
        rw2: Option<i32>,

        /// Math module 1 correct (digital)
        #[arg(long, allow_negative_numbers = true)]
        math1: Option<i32>,

        /// Math module 2 correct (digital)
        #[arg(long, allow_negative_numbers = true)]
        math2: Option<i32>,

        /// Reading questions correct (legacy)
        #[arg(long, allow_negative_numbers = true)]
        reading: Option<i32>,

        /// Writing questions correct (legacy)
        #[arg(long, allow_negative_numbers = true)]
        writing: Option<i32>,

        /// Math no-calculator questions correct (legacy)
        #[arg(long, allow_negative_numbers = true)]
        math_no_calc: Option<i32>,

        /// Math calculator questions correct (legacy)
        #[arg(long, allow_negative_numbers = true)]
        math_calc: Option<i32>,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// List sections and question counts for each test variant
    Sections {
        /// Restrict to one test: act, sat
        #[arg(long)]
        test: Option<String>,
    },

    /// Score every attempt in a score sheet
    Run {
        /// Path to .toml score sheet or directory
        #[arg(long)]
        sheet: PathBuf,

        /// Output directory (defaults to the configured output_dir)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Output format: json, table, markdown, all
        #[arg(long, default_value = "table")]
        format: String,

        /// Filter attempts by tags (comma-separated)
        #[arg(long)]
        filter: Option<String>,
    },

    /// Compare two estimate reports
    Compare {
        /// Baseline report JSON
        #[arg(long)]
        baseline: PathBuf,

        /// Current report JSON
        #[arg(long)]
        current: PathBuf,

        /// Minimum headline change in points (defaults to the configured decline_threshold)
        #[arg(long)]
        threshold: Option<u32>,

        /// Exit code 1 if any score declined
        #[arg(long)]
        fail_on_decline: bool,

        /// Output format: text, json, markdown
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Validate score sheet TOML files
    Validate {
        /// Path to score sheet file or directory
        #[arg(long)]
        sheet: PathBuf,
    },

    /// Create starter config and example score sheet
    Init,
}

fn main() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("scorecalc=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config_path = cli.config;

    let result = match cli.command {
        Commands::Act {
            variant,
            english,
            math,
            reading,
            science,
            format,
        } => commands::act::execute(
            config_path,
            variant,
            [english, math, reading, science],
            format,
        ),
        Commands::Sat {
            variant,
            rw1,
            rw2,
            math1,
            math2,
            reading,
            writing,
            math_no_calc,
            math_calc,
            format,
        } => commands::sat::execute(
            config_path,
            variant,
            [rw1, rw2, math1, math2],
            [reading, writing, math_no_calc, math_calc],
            format,
        ),
        Commands::Sections { test } => commands::sections::execute(test),
        Commands::Run {
            sheet,
            output,
            format,
            filter,
        } => commands::run::execute(config_path, sheet, output, format, filter),
        Commands::Compare {
            baseline,
            current,
            threshold,
            fail_on_decline,
            format,
        } => commands::compare::execute(
            config_path,
            baseline,
            current,
            threshold,
            fail_on_decline,
            format,
        ),
        Commands::Validate { sheet } => commands::validate::execute(sheet),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
