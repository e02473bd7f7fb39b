use std::{path::Path, time::Duration};

use serde::{Deserialize, Serialize};

/// Configuration for an interactive session.
///
/// This struct holds settings that control the cosmetic loading indicator
/// shown while a record is being added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// Whether to show the loading indicator when adding a record.
    pub loading: bool,

    /// The number of progress dots printed by the loading indicator.
    loading_steps: u64,

    /// The delay before each progress dot, in milliseconds.
    loading_step_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            loading: true,
            loading_steps: default_loading_steps(),
            loading_step_ms: default_loading_step_ms(),
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize config: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {e}"))
    }

    /// A configuration with the loading indicator switched off.
    #[must_use]
    pub fn without_loading() -> Self {
        Self {
            loading: false,
            ..Self::default()
        }
    }

    /// Returns the number of progress dots.
    #[must_use]
    pub const fn loading_steps(&self) -> u64 {
        self.loading_steps
    }

    /// Returns the delay before each progress dot.
    #[must_use]
    pub const fn loading_step(&self) -> Duration {
        Duration::from_millis(self.loading_step_ms)
    }
}

const fn default_loading() -> bool {
    true
}

const fn default_loading_steps() -> u64 {
    5
}

const fn default_loading_step_ms() -> u64 {
    300
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_loading")]
        loading: bool,

        /// The number of progress dots.
        #[serde(default = "default_loading_steps")]
        loading_steps: u64,

        /// The delay before each progress dot, in milliseconds.
        #[serde(default = "default_loading_step_ms")]
        loading_step_ms: u64,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                loading,
                loading_steps,
                loading_step_ms,
            } => Self {
                loading,
                loading_steps,
                loading_step_ms,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            loading: config.loading,
            loading_steps: config.loading_steps,
            loading_step_ms: config.loading_step_ms,
        }
    }
}
