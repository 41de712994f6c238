// File: crates/event-viewer/src/main.rs
// Summary: Load prices, place catalog events, and show the annotated chart in a window.

mod window;

use anyhow::{Context, Result};
use clap::Parser;
use event_study::StudyConfig;
use rand::{rngs::StdRng, SeedableRng};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "event-viewer")]
#[command(about = "Plot a daily close price series annotated with key events")]
struct Cli {
    /// Price CSV (overrides `data.path` from the config)
    csv: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for marker jitter; random when neither this nor `jitter.seed` is set
    #[arg(short, long)]
    seed: Option<u64>,

    /// Render theme: light, dark or high-contrast
    #[arg(long, default_value = "light")]
    theme: String,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("event_viewer=info,event_study=info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(true).init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => StudyConfig::load(path).with_context(|| format!("loading config {}", path.display()))?,
        None => StudyConfig::default(),
    };
    if let Some(csv) = cli.csv {
        config.data.path = csv;
    }

    let seed = cli.seed.or(config.jitter.seed).unwrap_or_else(rand::random);
    info!(seed, "jitter seed (pass --seed to reproduce)");
    let mut rng = StdRng::seed_from_u64(seed);

    let study = event_study::run(&config, &mut rng)
        .with_context(|| format!("building chart from {}", config.data.path.display()))?;
    info!(rows = study.series_len, events = study.resolved.len(), "chart ready");

    let theme = chart_core::theme::find(&cli.theme);
    window::show(study.figure, theme)
}
