use super::CpfScanConfig;
use anyhow::{Context, Result, bail};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::Serialize;
use std::path::Path;

// Embed the default config at compile time
const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

/// Repository-level config file, picked up from the working directory
pub const REPO_CONFIG: &str = "cpfscan.toml";

const ENV_PREFIX: &str = "CPFSCAN_";

impl CpfScanConfig {
    /// Load the merged configuration.
    ///
    /// `custom_config` must exist when given. `cli_overrides` is merged last
    /// and should only contain the keys the user actually set.
    pub fn load<T: Serialize>(custom_config: Option<&Path>, cli_overrides: Option<T>) -> Result<Self> {
        Self::figment(custom_config, cli_overrides)?
            .extract()
            .context("Invalid configuration")
    }

    /// Build the provider chain without extracting it
    pub fn figment<T: Serialize>(custom_config: Option<&Path>, cli_overrides: Option<T>) -> Result<Figment> {
        tracing::trace!("CONFIG LOAD: Starting");

        let mut figment = Figment::new()
            .merge(Toml::string(DEFAULT_CONFIG)) // 1. Defaults (lowest)
            .merge(Toml::file(Self::user_config_path())) // 2. User config
            .merge(Toml::file(REPO_CONFIG)); // 3. Repo config

        if let Some(path) = custom_config {
            if !path.is_file() {
                bail!("Config file not found: {}", path.display());
            }
            figment = figment.merge(Toml::file(path)); // 4. Custom config
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__")); // 5. Environment

        if let Some(overrides) = cli_overrides {
            tracing::trace!("CONFIG LOAD: Applying CLI overrides");
            figment = figment.merge(Serialized::defaults(overrides)); // 6. CLI (highest)
        }

        Ok(figment)
    }

    /// Render the merged configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }

    fn user_config_path() -> String {
        match std::env::var("HOME") {
            Ok(home) => format!("{home}/.config/cpfscan/config.toml"),
            Err(_) => "~/.config/cpfscan/config.toml".to_string(),
        }
    }
}
