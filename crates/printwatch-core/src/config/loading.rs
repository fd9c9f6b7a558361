//! Configuration loading and merging logic.
//!
//! Configuration is loaded in the following order (later sources override
//! earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.printwatch/config.toml`
//! 3. **Project config** - `./.printwatch/config.toml`
//! 4. **CLI arguments** - Command-line flags (highest priority, applied by
//!    the CLI layer)

use std::fs;
use std::path::PathBuf;

use crate::config::types::{PollConfig, PrinterConfig, PrintwatchConfig};
use crate::config::validation::validate_config;

/// Check if an error is a "file not found" error.
fn is_file_not_found(e: &(dyn std::error::Error + 'static)) -> bool {
    if let Some(io_err) = e.downcast_ref::<std::io::Error>() {
        return io_err.kind() == std::io::ErrorKind::NotFound;
    }

    let err_str = e.to_string();
    err_str.contains("No such file or directory") || err_str.contains("cannot find the path")
}

/// Load configuration from the hierarchy of config files.
///
/// # Errors
///
/// Returns an error if validation fails. Missing config files are not errors.
pub fn load_hierarchy() -> Result<PrintwatchConfig, Box<dyn std::error::Error>> {
    let mut config = PrintwatchConfig::default();

    // Load user config (file not found is expected, parse errors fail)
    match load_user_config() {
        Ok(user_config) => config = merge_configs(config, user_config),
        Err(e) if !is_file_not_found(e.as_ref()) => return Err(e),
        Err(_) => {} // File not found - continue with defaults
    }

    // Load project config (file not found is expected, parse errors fail)
    match load_project_config() {
        Ok(project_config) => config = merge_configs(config, project_config),
        Err(e) if !is_file_not_found(e.as_ref()) => return Err(e),
        Err(_) => {} // File not found - continue with merged config
    }

    validate_config(&config)?;

    Ok(config)
}

/// Load the user configuration from ~/.printwatch/config.toml.
fn load_user_config() -> Result<PrintwatchConfig, Box<dyn std::error::Error>> {
    let home_dir = dirs::home_dir().ok_or("Could not find home directory")?;
    let config_path = home_dir.join(".printwatch").join("config.toml");
    load_config_file(&config_path)
}

/// Load the project configuration from ./.printwatch/config.toml.
fn load_project_config() -> Result<PrintwatchConfig, Box<dyn std::error::Error>> {
    let config_path = std::env::current_dir()?
        .join(".printwatch")
        .join("config.toml");
    load_config_file(&config_path)
}

/// Load a configuration file from the given path.
pub fn load_config_file(path: &PathBuf) -> Result<PrintwatchConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;
    let config: PrintwatchConfig = toml::from_str(&content)
        .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;
    Ok(config)
}

/// Merge two configurations, with override_config taking precedence.
///
/// Optional values from the override replace base values only when present —
/// the same rule the telemetry merge uses.
pub fn merge_configs(
    base: PrintwatchConfig,
    override_config: PrintwatchConfig,
) -> PrintwatchConfig {
    PrintwatchConfig {
        printer: PrinterConfig {
            url: override_config.printer.url.or(base.printer.url),
        },
        poll: PollConfig {
            interval_secs: override_config
                .poll
                .interval_secs
                .or(base.poll.interval_secs),
            request_timeout_secs: override_config
                .poll
                .request_timeout_secs
                .or(base.poll.request_timeout_secs),
        },
    }
}
