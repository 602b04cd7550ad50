//! Configuration file discovery and loading.
//!
//! The config file is located in the following order (first match wins):
//! 1. **CLI argument** - `--file <path>`
//! 2. **Environment** - `DONNER_CONFIG`
//! 3. **Project file** - `./.donner.yml`, or `./.donner.yaml` if only that exists

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::parsing::parse;
use crate::config::types::Config;
use crate::errors::ConfigError;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV_VAR: &str = "DONNER_CONFIG";

/// Config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = ".donner.yml";

const ALTERNATE_CONFIG_FILE: &str = ".donner.yaml";

/// Resolve the config path from the CLI override, the environment and the
/// current working directory.
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf, ConfigError> {
    let env_value = std::env::var(CONFIG_ENV_VAR).ok();
    let cwd = std::env::current_dir()?;
    Ok(resolve_config_path_in(explicit, env_value.as_deref(), &cwd))
}

/// Pure variant of [`resolve_config_path`] with every input passed in.
pub fn resolve_config_path_in(
    explicit: Option<&Path>,
    env_value: Option<&str>,
    dir: &Path,
) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    if let Some(value) = env_value
        && !value.trim().is_empty()
    {
        return PathBuf::from(value);
    }

    let default_path = dir.join(DEFAULT_CONFIG_FILE);
    let alternate_path = dir.join(ALTERNATE_CONFIG_FILE);
    if !default_path.exists() && alternate_path.exists() {
        return alternate_path;
    }
    default_path
}

/// Read and parse the config file at `path`.
///
/// # Errors
///
/// Returns `ConfigError::ConfigNotFound` if the file does not exist,
/// `ConfigError::IoError` if it cannot be read, and any error from
/// [`parse`] otherwise.
pub fn load_config_file(path: &Path) -> Result<Config, ConfigError> {
    debug!(event = "core.config.load_started", path = %path.display());

    let bytes = fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConfigError::ConfigNotFound {
                path: path.display().to_string(),
            }
        } else {
            ConfigError::IoError { source: e }
        }
    })?;

    let config = parse(&bytes)?;

    info!(
        event = "core.config.load_completed",
        path = %path.display(),
        commands = config.commands.len()
    );

    Ok(config)
}

/// Locate and load the config file.
pub fn load(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    let path = resolve_config_path(explicit)?;
    load_config_file(&path)
}
