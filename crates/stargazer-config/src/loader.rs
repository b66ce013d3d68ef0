use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

use crate::schema::StargazerConfig;

/// Loads the Stargazer configuration.
///
/// The loaded value is immutable for the lifetime of the module: the
/// whitelist index and synthesized triggers are built once at attach time,
/// so there is nothing a live reload could feed.
pub struct ConfigLoader {
    config: Arc<RwLock<StargazerConfig>>,
    config_path: PathBuf,
}

impl ConfigLoader {
    /// Resolve the config path: explicit path > STARGAZER_CONFIG env >
    /// ~/.stargazer/stargazer.toml
    pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
        if let Some(p) = explicit {
            return p.to_path_buf();
        }
        if let Ok(p) = std::env::var("STARGAZER_CONFIG") {
            return PathBuf::from(p);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".stargazer")
            .join("stargazer.toml")
    }

    /// Load the config from disk, falling back to defaults.
    pub fn load(path: Option<&Path>) -> stargazer_core::Result<Self> {
        let config_path = Self::resolve_path(path);
        let config = if config_path.exists() {
            info!(?config_path, "loading configuration");
            let raw = std::fs::read_to_string(&config_path)?;
            toml::from_str::<StargazerConfig>(&raw).map_err(|e| {
                stargazer_core::StargazerError::Config(format!(
                    "failed to parse {}: {}",
                    config_path.display(),
                    e
                ))
            })?
        } else {
            warn!(?config_path, "config file not found, using defaults");
            StargazerConfig::default()
        };

        let config = Self::apply_env_overrides(config);

        // Validate config — log warnings, fail on errors
        match config.validate() {
            Ok(warnings) => {
                for w in &warnings {
                    warn!("{}", w);
                }
            }
            Err(e) => {
                return Err(stargazer_core::StargazerError::Config(e));
            }
        }

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            config_path,
        })
    }

    /// Get a read snapshot of the current config.
    pub fn get(&self) -> StargazerConfig {
        self.config.read().clone()
    }

    /// Get a shared reference for subscription.
    pub fn shared(&self) -> Arc<RwLock<StargazerConfig>> {
        Arc::clone(&self.config)
    }

    /// Path the config was resolved from.
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Apply env var overrides (STARGAZER_LOG_LEVEL, STARGAZER_HELP_TRIGGER).
    fn apply_env_overrides(mut config: StargazerConfig) -> StargazerConfig {
        if let Ok(v) = std::env::var("STARGAZER_LOG_LEVEL") {
            config.logging.level = v;
        }
        if let Ok(v) = std::env::var("STARGAZER_HELP_TRIGGER") {
            config.help.trigger = v;
        }
        config
    }
}
