//! Configuration validation.

use crate::config::types::PrintwatchConfig;
use crate::errors::ConfigError;

/// Validate a fully merged configuration.
///
/// Checks the values a typo would most plausibly break: the endpoint URL
/// scheme and the non-zero timing values.
pub fn validate_config(config: &PrintwatchConfig) -> Result<(), ConfigError> {
    if let Some(url) = &config.printer.url {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::InvalidUrl {
                url: url.clone(),
                message: "expected an http:// or https:// URL".to_string(),
            });
        }
    }

    if config.poll.interval_secs == Some(0) {
        return Err(ConfigError::InvalidConfiguration {
            message: "poll.interval_secs must be at least 1".to_string(),
        });
    }

    if config.poll.request_timeout_secs == Some(0) {
        return Err(ConfigError::InvalidConfiguration {
            message: "poll.request_timeout_secs must be at least 1".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::{PollConfig, PrinterConfig};

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&PrintwatchConfig::default()).is_ok());
    }

    #[test]
    fn test_rejects_non_http_url() {
        let config = PrintwatchConfig {
            printer: PrinterConfig {
                url: Some("ftp://printer.local/status".to_string()),
            },
            ..PrintwatchConfig::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { .. }));
    }

    #[test]
    fn test_rejects_zero_interval() {
        let config = PrintwatchConfig {
            poll: PollConfig {
                interval_secs: Some(0),
                request_timeout_secs: None,
            },
            ..PrintwatchConfig::default()
        };
        assert!(matches!(
            validate_config(&config).unwrap_err(),
            ConfigError::InvalidConfiguration { .. }
        ));
    }

    #[test]
    fn test_accepts_fast_and_slow_intervals() {
        for interval in [1, 3] {
            let config = PrintwatchConfig {
                poll: PollConfig {
                    interval_secs: Some(interval),
                    request_timeout_secs: None,
                },
                ..PrintwatchConfig::default()
            };
            assert!(validate_config(&config).is_ok());
        }
    }
}
