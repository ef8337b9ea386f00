use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use sqlx::sqlite::SqlitePoolOptions;

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::generate::OpenAiGenerator;
use crate::store::{SqliteStrategyStore, StrategyStore};
use crate::strategy;
use crate::ui;
use crate::wizard::WizardSession;

pub async fn dispatch(cli: Cli, config: Config) -> Result<()> {
    match cli.command.unwrap_or(Commands::Run { db: None }) {
        Commands::Run { db } => run_wizard(config, db).await,
        Commands::Show { db } => show_latest(config, db).await,
    }
}

async fn run_wizard(config: Config, db_override: Option<PathBuf>) -> Result<()> {
    let store = open_store(&config, db_override).await?;
    let generator = OpenAiGenerator::new(
        config.api_key.as_deref(),
        &config.api_base,
        config.model.clone(),
        config.temperature,
    );
    let session = WizardSession::with_timeout(
        Arc::new(generator),
        Arc::new(store),
        config.generation_timeout(),
    );
    ui::flow::run(&session).await
}

async fn show_latest(config: Config, db_override: Option<PathBuf>) -> Result<()> {
    let store = open_store(&config, db_override).await?;
    match store.load_latest().await? {
        Some(saved) => println!("{}", strategy::markdown::render(&saved)),
        None => println!("No saved strategies yet. Run `brandloom run` first."),
    }
    Ok(())
}

// ── Pool management ──────────────────────────────────────────────────────────

async fn open_store(
    config: &Config,
    db_override: Option<PathBuf>,
) -> Result<SqliteStrategyStore> {
    let db_path = db_override.unwrap_or_else(|| config.db_path.clone());
    // A bare filename like "s.db" has an empty parent
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create data directory: {}", parent.display()))?;
    }

    let url = format!("sqlite://{}?mode=rwc", db_path.display());
    let pool = SqlitePoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .with_context(|| format!("Failed to open strategy DB: {}", db_path.display()))?;

    let store = SqliteStrategyStore::new(pool).await?;
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn open_store_creates_the_database_and_parents() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("nested").join("strategies.db");
        let config = Config {
            db_path: db_path.clone(),
            ..Config::default()
        };

        let store = open_store(&config, None).await.unwrap();
        assert!(db_path.exists());
        assert!(store.load_latest().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn db_override_wins_over_config() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("from-config.db");
        let override_path = dir.path().join("from-flag.db");
        let config = Config {
            db_path: config_path.clone(),
            ..Config::default()
        };

        let _store = open_store(&config, Some(override_path.clone())).await.unwrap();
        assert!(override_path.exists());
        assert!(!config_path.exists());
    }
}
