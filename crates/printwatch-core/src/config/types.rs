//! Configuration type definitions for the printwatch CLI.
//!
//! These types are serialized/deserialized from TOML config files.
//!
//! # Example Configuration
//!
//! ```toml
//! [printer]
//! url = "http://192.168.4.1/printer/status"
//!
//! [poll]
//! interval_secs = 1
//! request_timeout_secs = 5
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Main configuration loaded from TOML config files.
///
/// Loaded from `~/.printwatch/config.toml` (user) and
/// `./.printwatch/config.toml` (project); project values override user values,
/// CLI flags override both.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PrintwatchConfig {
    /// Printer endpoint settings
    #[serde(default)]
    pub printer: PrinterConfig,

    /// Polling schedule settings
    #[serde(default)]
    pub poll: PollConfig,
}

/// Printer endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PrinterConfig {
    /// Status endpoint URL.
    /// Default: `http://192.168.4.1/printer/status`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Polling schedule configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PollConfig {
    /// Seconds between ticks. 1 is the fast-refresh variant, 3 the slow one.
    /// Default: 3.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_secs: Option<u64>,

    /// Per-request timeout in seconds.
    /// Default: 5.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

impl PrintwatchConfig {
    /// Resolved status endpoint URL.
    pub fn url(&self) -> String {
        self.printer
            .url
            .clone()
            .unwrap_or_else(|| defaults::DEFAULT_STATUS_URL.to_string())
    }

    /// Resolved polling interval.
    pub fn interval(&self) -> Duration {
        Duration::from_secs(
            self.poll
                .interval_secs
                .unwrap_or(defaults::DEFAULT_INTERVAL_SECS),
        )
    }

    /// Resolved per-request timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.poll
                .request_timeout_secs
                .unwrap_or(defaults::DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_printwatch_config_serialization() {
        let config = PrintwatchConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: PrintwatchConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config.url(), parsed.url());
    }

    #[test]
    fn test_resolved_defaults() {
        let config = PrintwatchConfig::default();
        assert_eq!(config.url(), "http://192.168.4.1/printer/status");
        assert_eq!(config.interval(), Duration::from_secs(3));
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_poll_config_deserialize() {
        let toml_str = r#"
[poll]
interval_secs = 1
"#;
        let config: PrintwatchConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.interval(), Duration::from_secs(1));
        // Missing key falls back to default, not zero.
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_printer_url_deserialize() {
        let toml_str = r#"
[printer]
url = "http://octopi.local/api/v1/printers/1/status"
"#;
        let config: PrintwatchConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.url(), "http://octopi.local/api/v1/printers/1/status");
    }
}
