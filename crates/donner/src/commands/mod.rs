use clap::ArgMatches;
use tracing::error;

use donner_core::events;

pub mod helpers;

mod aliases;
mod run;

/// Dispatch a subcommand. Returns the process exit code.
pub fn run_command(matches: &ArgMatches) -> Result<i32, Box<dyn std::error::Error>> {
    events::log_app_startup();

    match matches.subcommand() {
        Some(("run", sub_matches)) => run::handle_run_command(sub_matches),
        Some(("aliases", sub_matches)) => aliases::handle_aliases_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}
