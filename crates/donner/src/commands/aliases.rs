use clap::ArgMatches;
use tracing::info;

use donner_core::{AliasFlags, print_aliases};

use super::helpers::load_config;

pub(crate) fn handle_aliases_command(
    matches: &ArgMatches,
) -> Result<i32, Box<dyn std::error::Error>> {
    let flags = AliasFlags::new(matches.get_flag("strict"), matches.get_flag("fallback"));

    let config = load_config(matches)?;
    print_aliases(&config, flags)?;

    info!(
        event = "cli.aliases_completed",
        commands = config.commands.len()
    );
    Ok(0)
}
