//! Turn the raw bytes of a `.donner.yml` into a validated [`Config`].

use tracing::{debug, warn};

use crate::config::types::Config;
use crate::errors::ConfigError;

/// Parse and validate a configuration document.
///
/// Steps, each aborting on the first error:
/// 1. Deserialize the YAML. Syntax and type errors come back unchanged as
///    `ConfigError::ParseError`.
/// 2. Structural checks (`NoStrategiesSpecified`, `NoCommandsSpecified`).
/// 3. Handler check for each strategy, visited in name order
///    (`InvalidHandler`).
///
/// No file I/O happens here; see [`super::loading`] for that.
pub fn parse(bytes: &[u8]) -> Result<Config, ConfigError> {
    debug!(event = "core.config.parse_started", bytes = bytes.len());

    let config: Config = serde_yaml::from_slice(bytes).inspect_err(|e| {
        warn!(event = "core.config.parse_failed", error = %e);
    })?;

    config.validate()?;

    let mut names: Vec<&String> = config.strategies.keys().collect();
    names.sort();
    for name in names {
        config.strategies[name].validate(name)?;
    }

    debug!(
        event = "core.config.parse_completed",
        strategies = config.strategies.len(),
        commands = config.commands.len()
    );

    Ok(config)
}
