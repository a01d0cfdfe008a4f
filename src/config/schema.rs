//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML files.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct PolicyConfig {
    /// How the caller resolves keep-alive decisions.
    pub keep_alive: KeepAliveConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Caller-side keep-alive settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct KeepAliveConfig {
    /// Idle timeout in seconds used when the server states none.
    pub default_idle_secs: u64,

    /// Upper bound in seconds on any server-advertised timeout.
    pub max_idle_secs: Option<u64>,

    /// Use the server's `Keep-Alive: timeout` hint at all.
    pub honor_server_timeout: bool,
}

impl KeepAliveConfig {
    pub fn default_idle(&self) -> Duration {
        Duration::from_secs(self.default_idle_secs)
    }

    pub fn max_idle(&self) -> Option<Duration> {
        self.max_idle_secs.map(Duration::from_secs)
    }
}

impl Default for KeepAliveConfig {
    fn default() -> Self {
        Self {
            default_idle_secs: 60,
            max_idle_secs: None,
            honor_server_timeout: true,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Emit JSON log lines instead of the human-readable format.
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json: false,
        }
    }
}
