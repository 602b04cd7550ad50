use tracing::{info, warn};

use crate::config::Config;

use super::errors::RunError;
use super::operations;
use super::types::{Resolution, RunOptions};

/// Resolve `command` and run it, blocking until the child exits.
///
/// Returns the child's exit code.
pub fn run_command(
    config: &Config,
    command: &str,
    args: &[String],
    options: RunOptions,
) -> Result<i32, RunError> {
    info!(
        event = "core.run.started",
        command = command,
        strict = options.strict,
        fallback = options.fallback
    );

    let invocation = operations::build_invocation(config, command, args, options).inspect_err(
        |e| warn!(event = "core.run.resolve_failed", command = command, error = %e),
    )?;

    match &invocation.resolution {
        Resolution::Strategy { strategy, handler } => info!(
            event = "core.run.resolved",
            command = command,
            strategy = %strategy,
            handler = %handler
        ),
        Resolution::Host => info!(event = "core.run.resolved_to_host", command = command),
    }

    operations::check_available(&invocation)?;
    let code = operations::execute(&invocation)?;

    info!(
        event = "core.run.completed",
        command = command,
        exit_code = code
    );
    Ok(code)
}
