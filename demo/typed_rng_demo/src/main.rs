//! typed_rng Demo CLI
//!
//! Entry point printing a sequence of generated values.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use typed_rng_demo::prelude::*;

/// Prints typed random values drawn from a seeded or entropy-seeded engine
#[derive(Parser)]
#[command(name = "typed-rng-demo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Engine driving the generator
    #[arg(short, long, value_enum)]
    engine: Option<EngineKind>,

    /// Values printed per line
    #[arg(short = 'n', long)]
    samples: Option<usize>,

    /// Configuration file path [default: typed_rng_demo.toml, if present]
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = DemoConfig::from_cli_path(cli.config.as_deref())?.with_env_override();
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(engine) = cli.engine {
        config.engine = engine;
    }
    if let Some(samples) = cli.samples {
        config.samples = samples;
    }
    if cli.verbose {
        config.log_level = "debug".to_string();
    }
    config.validate()?;

    // Logs go to stderr so stdout carries only the generated values
    let directive = format!("typed_rng={0},typed_rng_demo={0}", config.log_level.to_lowercase());
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(directive))?)
        .init();

    debug!(?config, "Configuration loaded");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let seed = run(&config, &mut out)?;
    out.flush()?;

    info!(seed, "Done; rerun with --seed {} to reproduce", seed);
    Ok(())
}
