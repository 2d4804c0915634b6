//! Configuration loading for the demo backend and its simulated latency.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{BackendConfig, Config, TimingConfig};
