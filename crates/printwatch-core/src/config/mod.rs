//! # Configuration System
//!
//! Hierarchical TOML configuration for the printwatch CLI.
//!
//! Configuration is loaded in the following order (later sources override
//! earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.printwatch/config.toml`
//! 3. **Project config** - `./.printwatch/config.toml`
//! 4. **CLI arguments** - Command-line flags (highest priority)
//!
//! ```toml
//! # ~/.printwatch/config.toml
//! [printer]
//! url = "http://192.168.4.1/printer/status"
//!
//! [poll]
//! interval_secs = 1
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

pub use types::{PollConfig, PrinterConfig, PrintwatchConfig};
pub use validation::validate_config;

impl PrintwatchConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, Box<dyn std::error::Error>> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }
}
