use anyhow::Context;
use clap::Parser;

use teachdeck::config::{ApiConfig, AppConfig};
use teachdeck::logging;
use teachdeck::ui;

/// Terminal dashboard for Teachable courses and enrollments.
#[derive(Debug, Parser)]
#[command(name = "teachdeck", version)]
struct Cli {
    /// Override the API base URL (e.g. against a local mock).
    #[arg(long)]
    base_url: Option<String>,

    /// UI tick interval in milliseconds.
    #[arg(long)]
    tick_rate_ms: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_tracing();

    // Fail fast: a missing API key aborts here, before the alternate
    // screen is entered, so the error stays readable on stderr.
    let api = ApiConfig::from_env(cli.base_url).context("startup configuration failed")?;
    let config = AppConfig::new(api, cli.tick_rate_ms);

    ui::run(config)
}
