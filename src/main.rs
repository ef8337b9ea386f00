use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use brandloom::app;
use brandloom::cli::Cli;
use brandloom::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging. WARN keeps the interactive prompts readable.
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::WARN)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let cli = Cli::parse();
    let mut config = Config::load_or_init()?;
    config.apply_env_overrides();
    app::dispatch::dispatch(cli, config).await
}
