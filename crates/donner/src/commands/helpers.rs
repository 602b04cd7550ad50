use std::path::Path;

use clap::ArgMatches;

use donner_core::config::{self, Config};
use donner_core::errors::ConfigError;

/// Load `.donner.yml` (or the `--file` override).
///
/// Errors are returned unchanged and reported once by `main`, so nothing
/// runs or prints when the config is invalid.
pub fn load_config(matches: &ArgMatches) -> Result<Config, ConfigError> {
    let explicit = matches.get_one::<String>("file").map(Path::new);
    config::load(explicit)
}
