use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub backend: BackendConfig,
}

/// Artificial latency applied by the simulated backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Delay before a full load resolves, in milliseconds (default: 4000).
    #[serde(default = "default_load_delay_ms")]
    pub load_delay_ms: u64,
    /// Delay before an update is applied, in milliseconds (default: 4000).
    #[serde(default = "default_update_delay_ms")]
    pub update_delay_ms: u64,
}

/// Contents of the in-memory backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Initial record values. Ids are assigned by position.
    #[serde(default = "default_seed")]
    pub seed: Vec<String>,
    /// Value written by the update effect.
    #[serde(default = "default_updated_value")]
    pub updated_value: String,
}

fn default_load_delay_ms() -> u64 {
    4000
}

fn default_update_delay_ms() -> u64 {
    4000
}

fn default_seed() -> Vec<String> {
    vec!["one".to_string(), "two".to_string()]
}

fn default_updated_value() -> String {
    "UPDATED".to_string()
}

impl TimingConfig {
    pub fn load_delay(&self) -> Duration {
        Duration::from_millis(self.load_delay_ms)
    }

    pub fn update_delay(&self) -> Duration {
        Duration::from_millis(self.update_delay_ms)
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            load_delay_ms: default_load_delay_ms(),
            update_delay_ms: default_update_delay_ms(),
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            updated_value: default_updated_value(),
        }
    }
}
