//! spine-age CLI: questionnaire, scoring and reports from the terminal.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use spine_age_core::config::ReportFormat;
use spine_age_core::estimator::{SpineAgePolicy, MAX_ACTUAL_AGE, MIN_ACTUAL_AGE};

mod commands;
mod output;
mod prompt;

#[derive(Parser)]
#[command(
    name = "spine-age",
    version,
    about = "Functional spine age self-assessment"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer the questionnaire and estimate a functional spine age
    Assess {
        /// Actual age in years (10-100)
        #[arg(long, value_parser = clap::value_parser!(u32).range(MIN_ACTUAL_AGE as i64..=MAX_ACTUAL_AGE as i64))]
        age: Option<u32>,

        /// Email address; enables progress tracking
        #[arg(long)]
        email: Option<String>,

        /// Scripted answers, one letter per question (e.g. "AABCA BBCAA C")
        #[arg(long)]
        answers: Option<String>,

        /// Estimator table: age-adjusted, classic
        #[arg(long)]
        policy: Option<SpineAgePolicy>,

        /// Write the report document(s)
        #[arg(long)]
        report: bool,

        /// Report format: pdf, html, all
        #[arg(long)]
        format: Option<ReportFormat>,

        /// Report output directory
        #[arg(long)]
        output: Option<PathBuf>,

        /// Progress log directory
        #[arg(long)]
        log_dir: Option<PathBuf>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List the questionnaire
    Questions,

    /// Show recorded progress for an email address
    History {
        /// Email address used when assessing
        #[arg(long)]
        email: String,

        /// Progress log directory
        #[arg(long)]
        log_dir: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create a starter spine-age.toml
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("spine_age=info")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Assess {
            age,
            email,
            answers,
            policy,
            report,
            format,
            output,
            log_dir,
            json,
            config,
        } => commands::assess::execute(commands::assess::AssessOptions {
            age,
            email,
            answers,
            policy,
            report,
            format,
            output,
            log_dir,
            json,
            config,
        }),
        Commands::Questions => commands::questions::execute(),
        Commands::History {
            email,
            log_dir,
            config,
        } => commands::history::execute(email, log_dir, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
