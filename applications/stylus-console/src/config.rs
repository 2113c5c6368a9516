/// Console configuration
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use stylus_playback::PlaybackConfig;

/// Environment variable prefix (`STYLUS_PLAYBACK__PLAY_MODE=loop`)
pub const ENV_PREFIX: &str = "STYLUS";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ConsoleConfig {
    #[serde(default)]
    pub playback: PlaybackConfig,

    #[serde(default)]
    pub log: LogSettings,

    /// JSON playlist loaded into the queue at startup
    #[serde(default)]
    pub playlist: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogSettings {
    /// `tracing_subscriber::EnvFilter` directive, overridden by `RUST_LOG`
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

impl ConsoleConfig {
    /// Load configuration from an optional file and `STYLUS_` environment variables
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_prefix(path, ENV_PREFIX)
    }

    /// Load configuration, reading environment overrides under `prefix`
    pub fn load_with_prefix(path: Option<&Path>, prefix: &str) -> Result<Self> {
        let mut settings = config::Config::builder();

        if let Some(path) = path {
            if !path.exists() {
                bail!("config file not found: {}", path.display());
            }
            settings = settings.add_source(config::File::from(path));
        }

        // Nested keys use a double underscore: STYLUS_PLAYBACK__RANDOM_SEED=7
        settings = settings.add_source(
            config::Environment::with_prefix(prefix)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .context("failed to read configuration")?;

        config
            .try_deserialize()
            .context("invalid configuration")
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.log.filter.trim().is_empty() {
            bail!("log filter must not be empty");
        }

        if let Some(playlist) = &self.playlist {
            if !playlist.is_file() {
                bail!("playlist not found at {}", playlist.display());
            }
        }

        Ok(())
    }
}

fn default_filter() -> String {
    "stylus_playback=info,stylus_console=info".to_string()
}
