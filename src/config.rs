use anyhow::{Context, Result};
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

// ─── Top-level config ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to config.toml - computed from home, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,
    pub api_key: Option<String>,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Upper bound on a single generation call, in seconds.
    #[serde(default = "default_generation_timeout_secs")]
    pub generation_timeout_secs: u64,
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,
}

fn brandloom_dir() -> PathBuf {
    UserDirs::new()
        .map_or_else(|| PathBuf::from("."), |u| u.home_dir().to_path_buf())
        .join(".brandloom")
}

fn default_api_base() -> String {
    "https://api.openai.com/v1".into()
}

fn default_model() -> String {
    "gpt-4o-mini".into()
}

fn default_temperature() -> f64 {
    0.7
}

fn default_generation_timeout_secs() -> u64 {
    60
}

fn default_db_path() -> PathBuf {
    brandloom_dir().join("strategies.db")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: brandloom_dir().join("config.toml"),
            api_key: None,
            api_base: default_api_base(),
            model: default_model(),
            temperature: default_temperature(),
            generation_timeout_secs: default_generation_timeout_secs(),
            db_path: default_db_path(),
        }
    }
}

impl Config {
    pub fn load_or_init() -> Result<Self> {
        let home = UserDirs::new()
            .map(|u| u.home_dir().to_path_buf())
            .context("Could not find home directory")?;
        let brandloom_dir = home.join(".brandloom");
        let config_path = brandloom_dir.join("config.toml");

        if !brandloom_dir.exists() {
            fs::create_dir_all(&brandloom_dir)
                .context("Failed to create .brandloom directory")?;
        }

        if config_path.exists() {
            let contents =
                fs::read_to_string(&config_path).context("Failed to read config file")?;
            let mut config: Config =
                toml::from_str(&contents).context("Failed to parse config file")?;
            // Set computed path that is skipped during serialization
            config.config_path = config_path;
            Ok(config)
        } else {
            let config = Self {
                config_path,
                ..Self::default()
            };
            config.save()?;
            Ok(config)
        }
    }

    /// Apply environment variable overrides to config
    pub fn apply_env_overrides(&mut self) {
        // API key: BRANDLOOM_API_KEY or OPENAI_API_KEY
        if let Ok(key) =
            std::env::var("BRANDLOOM_API_KEY").or_else(|_| std::env::var("OPENAI_API_KEY"))
        {
            if !key.is_empty() {
                self.api_key = Some(key);
            }
        }

        // API base URL: BRANDLOOM_API_BASE
        if let Ok(base) = std::env::var("BRANDLOOM_API_BASE") {
            if !base.is_empty() {
                self.api_base = base;
            }
        }

        // Model: BRANDLOOM_MODEL
        if let Ok(model) = std::env::var("BRANDLOOM_MODEL") {
            if !model.is_empty() {
                self.model = model;
            }
        }

        // Temperature: BRANDLOOM_TEMPERATURE
        if let Ok(temp_str) = std::env::var("BRANDLOOM_TEMPERATURE") {
            if let Ok(temp) = temp_str.parse::<f64>() {
                if (0.0..=2.0).contains(&temp) {
                    self.temperature = temp;
                }
            }
        }

        // Database path: BRANDLOOM_DB
        if let Ok(db) = std::env::var("BRANDLOOM_DB") {
            if !db.is_empty() {
                self.db_path = PathBuf::from(db);
            }
        }
    }

    pub fn generation_timeout(&self) -> Duration {
        Duration::from_secs(self.generation_timeout_secs)
    }

    pub fn save(&self) -> Result<()> {
        let toml_str = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&self.config_path, toml_str).context("Failed to write config file")?;
        Ok(())
    }
}
