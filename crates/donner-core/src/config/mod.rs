//! # Configuration System
//!
//! YAML configuration for donner, read from `.donner.yml` in the working
//! directory.
//!
//! ## Usage Example
//!
//! ```yaml
//! strategies:
//!   run:
//!     handler: docker_compose_run
//!     service: app
//!     remove: true
//!
//! default_strategy: run
//!
//! commands:
//!   rails: run
//!   rake: run
//! ```
//!
//! ## Parsing Configuration
//!
//! ```rust
//! use donner_core::config;
//!
//! let yaml = b"strategies:\n  run:\n    handler: docker_run\ncommands:\n  build: run\n";
//! let config = config::parse(yaml).unwrap();
//! assert_eq!(config.list_commands(), vec!["build"]);
//! ```

pub mod loading;
pub mod parsing;
pub mod types;
pub mod validation;

// Public API exports
pub use loading::{CONFIG_ENV_VAR, DEFAULT_CONFIG_FILE, load, load_config_file};
pub use parsing::parse;
pub use types::{Command, Config, Strategy};
pub use validation::{validate_config, validate_strategy};

impl Config {
    /// Check that the config defines at least one strategy and one command.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }

    /// Names of every configured command, sorted.
    pub fn list_commands(&self) -> Vec<&str> {
        let mut commands: Vec<&str> = self.commands.keys().map(String::as_str).collect();
        commands.sort_unstable();
        commands
    }
}

impl Strategy {
    /// Check that this strategy's handler is a built-in one.
    ///
    /// See [`validation::validate_strategy`] for details.
    pub fn validate(&self, name: &str) -> Result<(), crate::errors::ConfigError> {
        validation::validate_strategy(name, self)
    }
}
