use clap::ArgMatches;
use tracing::info;

use donner_core::{RunOptions, run_ops};

use super::helpers::load_config;

pub(crate) fn handle_run_command(matches: &ArgMatches) -> Result<i32, Box<dyn std::error::Error>> {
    let mut words = matches
        .get_many::<String>("command")
        .ok_or("Command argument is required")?
        .cloned();
    let command = words.next().ok_or("Command argument is required")?;
    let args: Vec<String> = words.collect();

    let options = RunOptions {
        strict: matches.get_flag("strict"),
        fallback: matches.get_flag("fallback"),
    };

    let config = load_config(matches)?;

    info!(
        event = "cli.run_started",
        command = %command,
        arg_count = args.len()
    );

    let code = run_ops::run_command(&config, &command, &args, options)?;

    info!(event = "cli.run_completed", command = %command, exit_code = code);
    Ok(code)
}
