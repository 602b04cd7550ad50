//! Configuration validation logic.
//!
//! Validation stops at the first problem it finds; errors are never
//! aggregated.

use crate::config::types::{Config, Strategy};
use crate::errors::ConfigError;
use crate::handlers;

/// Validate the structure of a Config.
///
/// # Validation Rules
///
/// - At least one strategy must be defined
/// - At least one command must be defined
///
/// Strategies are checked first, so a document missing both reports
/// `NoStrategiesSpecified`.
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.strategies.is_empty() {
        return Err(ConfigError::NoStrategiesSpecified);
    }

    if config.commands.is_empty() {
        return Err(ConfigError::NoCommandsSpecified);
    }

    Ok(())
}

/// Validate that a strategy refers to a built-in handler.
///
/// # Errors
///
/// Returns `ConfigError::InvalidHandler` if `strategy.handler` is not in the
/// handler registry.
pub fn validate_strategy(name: &str, strategy: &Strategy) -> Result<(), ConfigError> {
    if !handlers::is_valid_handler(&strategy.handler) {
        return Err(ConfigError::InvalidHandler {
            strategy: name.to_string(),
            handler: strategy.handler.clone(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::Command;
    use std::collections::HashMap;

    fn strategy(handler: &str) -> Strategy {
        Strategy {
            handler: handler.to_string(),
            service: None,
            remove: false,
            image: None,
        }
    }

    fn config(strategies: &[(&str, &str)], commands: &[&str]) -> Config {
        Config {
            strategies: strategies
                .iter()
                .map(|(name, handler)| (name.to_string(), strategy(handler)))
                .collect(),
            default_strategy: String::new(),
            commands: commands
                .iter()
                .map(|name| (name.to_string(), Command::default()))
                .collect(),
        }
    }

    #[test]
    fn test_validate_config_ok() {
        let config = config(&[("run", "docker_run")], &["ls"]);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_config_no_strategies_wins_over_no_commands() {
        let config = config(&[], &[]);
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::NoStrategiesSpecified)
        ));
    }

    #[test]
    fn test_validate_config_no_commands() {
        let config = config(&[("run", "docker_run")], &[]);
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::NoCommandsSpecified)
        ));
    }

    #[test]
    fn test_validate_config_does_not_check_handlers() {
        let config = Config {
            strategies: HashMap::from([("run".to_string(), strategy("bogus"))]),
            default_strategy: "run".to_string(),
            commands: HashMap::from([("ls".to_string(), Command::default())]),
        };
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_strategy_all_valid_handlers() {
        for handler in handlers::valid_handler_names() {
            assert!(
                validate_strategy("s", &strategy(handler)).is_ok(),
                "Handler '{}' should be valid",
                handler
            );
        }
    }

    #[test]
    fn test_validate_strategy_unknown_handler() {
        let result = validate_strategy("app", &strategy("podman_run"));
        match result {
            Err(ConfigError::InvalidHandler { strategy, handler }) => {
                assert_eq!(strategy, "app");
                assert_eq!(handler, "podman_run");
            }
            other => panic!("expected InvalidHandler, got {:?}", other),
        }
    }
}
