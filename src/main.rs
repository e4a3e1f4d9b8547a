//! Wellness Engine CLI
//!
//! Reads assessment histories as JSON and prints engine results as JSON.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use wellness_engine::{
    Assessment, EngineConfig, LifestyleInputs, PatternDetector, ReportBuilder, StressPredictor,
    SystemStamper, DISCLAIMER, VERSION,
};

#[derive(Parser)]
#[command(name = "wellness-engine")]
#[command(version = VERSION)]
#[command(about = "Rule-based stress, pattern and risk analytics for daily wellness logs", long_about = None)]
struct Cli {
    /// Configuration file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict a stress level from one day's lifestyle inputs
    Predict {
        #[command(flatten)]
        inputs: InputArgs,

        /// Print the per-factor breakdown instead of the bare level
        #[arg(long)]
        explain: bool,
    },

    /// Build a full report (patterns, risk, progress) from a history file
    Analyze {
        /// JSON array of assessments
        #[arg(long, short)]
        input: PathBuf,

        /// Write the report here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Single-line JSON
        #[arg(long)]
        compact: bool,
    },

    /// Detect stress patterns in a history file
    Patterns {
        /// JSON array of assessments
        #[arg(long, short)]
        input: PathBuf,
    },

    /// Show configuration
    Config {
        /// Write the default configuration to the config file
        #[arg(long)]
        init: bool,
    },

    /// Display the usage disclaimer
    Disclaimer,
}

/// Lifestyle inputs; omitted flags fall back to the predictor defaults.
#[derive(Args)]
struct InputArgs {
    #[arg(long)]
    sleep_hours: Option<f64>,
    #[arg(long)]
    work_hours: Option<f64>,
    #[arg(long)]
    exercise_minutes: Option<u32>,
    #[arg(long)]
    social_interaction: Option<u8>,
    #[arg(long)]
    screen_time: Option<f64>,
    #[arg(long)]
    caffeine: Option<u32>,
    #[arg(long)]
    alcohol: Option<u32>,
}

impl From<InputArgs> for LifestyleInputs {
    fn from(args: InputArgs) -> Self {
        Self {
            sleep_hours: args.sleep_hours,
            work_hours: args.work_hours,
            exercise_minutes: args.exercise_minutes,
            social_interaction: args.social_interaction,
            screen_time: args.screen_time,
            caffeine: args.caffeine,
            alcohol: args.alcohol,
        }
    }
}

fn main() {
    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Predict { inputs, explain } => cmd_predict(inputs.into(), explain),
        Commands::Analyze {
            input,
            output,
            compact,
        } => cmd_analyze(config_path, &input, output.as_deref(), compact),
        Commands::Patterns { input } => cmd_patterns(config_path, &input),
        Commands::Config { init } => cmd_config(config_path, init),
        Commands::Disclaimer => {
            println!("{DISCLAIMER}");
            Ok(())
        }
    }
}

fn cmd_predict(inputs: LifestyleInputs, explain: bool) -> Result<()> {
    let predictor = StressPredictor::new();

    if explain {
        let breakdown = predictor.breakdown(&inputs);
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
    } else {
        println!("{}", predictor.predict(&inputs));
    }

    Ok(())
}

fn cmd_analyze(
    config_path: Option<&Path>,
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<()> {
    let config = load_config(config_path)?;
    let history = load_history(input)?;

    let report = ReportBuilder::new(&config).build(&history, &SystemStamper);
    tracing::info!(
        samples = report.sample_count,
        level = %report.risk.risk_level,
        score = report.risk.score,
        "Analysis complete"
    );

    let json = if compact {
        serde_json::to_string(&report)?
    } else {
        serde_json::to_string_pretty(&report)?
    };

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
            std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
            println!("Report written to {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}

fn cmd_patterns(config_path: Option<&Path>, input: &Path) -> Result<()> {
    let config = load_config(config_path)?;
    let history = load_history(input)?;

    let patterns = PatternDetector::new(config.patterns).detect(&history, &SystemStamper);
    tracing::info!(found = patterns.len(), "Pattern detection complete");

    println!("{}", serde_json::to_string_pretty(&patterns)?);
    Ok(())
}

fn cmd_config(config_path: Option<&Path>, init: bool) -> Result<()> {
    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(EngineConfig::config_path);

    if init {
        let config = EngineConfig::default();
        let saved = match config_path {
            Some(p) => config.save_to(p),
            None => config.save(),
        };
        saved.with_context(|| format!("writing config {}", path.display()))?;
        println!("Default configuration written to {}", path.display());
        return Ok(());
    }

    let config = load_config(config_path)?;

    println!("Configuration file: {}", path.display());
    if !path.exists() {
        println!("(not found, showing defaults)");
    }
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

/// Load from an explicit path, or from the user config directory.
fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    match path {
        Some(p) => EngineConfig::load_from(p)
            .with_context(|| format!("loading config {}", p.display())),
        None => EngineConfig::load().context("loading config from the default location"),
    }
}

fn load_history(path: &Path) -> Result<Vec<Assessment>> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let history: Vec<Assessment> = serde_json::from_str(&content)
        .with_context(|| format!("parsing assessments in {}", path.display()))?;
    tracing::debug!(samples = history.len(), "Loaded history");
    Ok(history)
}
