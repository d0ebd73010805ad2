use anyhow::Context;
use clap::{Parser, Subcommand};
use configuration::cli::ParameterOverrides;
use engine::Estimator;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod display;

/// The main entry point for the Zero Trust ROI calculator.
fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file, if there is one
    dotenvy::dotenv().ok();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Parse command-line arguments
    let cli = Cli::parse();

    let mut config = configuration::load_config(cli.config.as_deref())
        .context("Failed to load configuration")?;

    // Execute the appropriate command
    match cli.command {
        Commands::Report(args) => {
            args.overrides.apply(&mut config);
            let estimator = Estimator::new(config)?;
            let report = estimator.build_report()?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                display::print_report(&report);
            }
        }
        Commands::Scenarios(args) => {
            let estimator = Estimator::new(config)?;
            let outcomes = estimator.run_scenarios()?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&outcomes)?);
            } else {
                display::print_scenarios(&outcomes);
            }
        }
    }

    Ok(())
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Estimates the monthly financial value of a Zero Trust security program.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML configuration file (default: ./ztroi.toml, if present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Produce the monthly executive report with confidence intervals and scenarios.
    Report(ReportArgs),
    /// Compare the configured scenarios only.
    Scenarios(ScenarioArgs),
}

#[derive(Parser)]
struct ReportArgs {
    #[command(flatten)]
    overrides: ParameterOverrides,

    /// Print the report as JSON instead of tables.
    #[arg(long)]
    json: bool,
}

#[derive(Parser)]
struct ScenarioArgs {
    /// Print the results as JSON instead of a table.
    #[arg(long)]
    json: bool,
}
