use tracing::{debug, info, warn};

use crate::config::{Config, Strategy};
use crate::handlers::{self, Handler};

use super::errors::RunError;
use super::types::{Invocation, Resolution, RunOptions};

/// Pick the strategy name a command runs with.
///
/// Returns `Ok(None)` when the command should run directly on the host.
pub fn resolve_strategy_name<'a>(
    config: &'a Config,
    command: &str,
    options: RunOptions,
) -> Result<Option<&'a str>, RunError> {
    match config.commands.get(command) {
        Some(label) => Ok(Some(
            label
                .strategy()
                .unwrap_or(config.default_strategy.as_str()),
        )),
        None if options.fallback => Ok(None),
        None if options.strict => Err(RunError::CommandNotAllowed {
            command: command.to_string(),
        }),
        None => Ok(Some(config.default_strategy.as_str())),
    }
}

/// Arguments contributed by a strategy, in order: handler prefix, service,
/// image, then `--rm` when `remove` is set.
pub fn strategy_args(handler: &Handler, strategy: &Strategy) -> Vec<String> {
    let mut args: Vec<String> = handler
        .argument_prefix
        .iter()
        .map(|arg| arg.to_string())
        .collect();

    if let Some(service) = strategy.service.as_deref().filter(|s| !s.is_empty()) {
        args.push(service.to_string());
    }
    if let Some(image) = strategy.image.as_deref().filter(|s| !s.is_empty()) {
        args.push(image.to_string());
    }
    if strategy.remove {
        args.push("--rm".to_string());
    }

    args
}

/// Resolve `command` against the config and assemble the final argv.
///
/// The command name and `args` always come last, after everything the
/// strategy contributes. Nothing is executed.
pub fn build_invocation(
    config: &Config,
    command: &str,
    args: &[String],
    options: RunOptions,
) -> Result<Invocation, RunError> {
    let Some(strategy_name) = resolve_strategy_name(config, command, options)? else {
        debug!(event = "core.runner.host_fallback", command = command);
        return Ok(Invocation {
            program: command.to_string(),
            args: args.to_vec(),
            resolution: Resolution::Host,
        });
    };

    let strategy =
        config
            .strategies
            .get(strategy_name)
            .ok_or_else(|| RunError::UnknownStrategy {
                command: command.to_string(),
                strategy: strategy_name.to_string(),
            })?;

    let handler = handlers::lookup(&strategy.handler).ok_or_else(|| RunError::UnknownHandler {
        strategy: strategy_name.to_string(),
        handler: strategy.handler.clone(),
    })?;

    let mut argv = strategy_args(&handler, strategy);
    argv.push(command.to_string());
    argv.extend(args.iter().cloned());

    Ok(Invocation {
        program: handler.base_program.to_string(),
        args: argv,
        resolution: Resolution::Strategy {
            strategy: strategy_name.to_string(),
            handler: handler.handler_type,
        },
    })
}

/// Check that a strategy's handler program is on `PATH` before spawning.
///
/// Host invocations are not checked; `execute` reports those when the
/// spawn itself fails.
pub fn check_available(invocation: &Invocation) -> Result<(), RunError> {
    if let Resolution::Strategy { handler, .. } = &invocation.resolution
        && let Some(template) = handlers::lookup_by_type(*handler)
        && !template.is_available()
    {
        warn!(
            event = "core.runner.executable_missing",
            program = template.base_program,
            handler = %handler
        );
        return Err(RunError::ExecutableNotFound {
            program: template.base_program.to_string(),
        });
    }

    Ok(())
}

/// Run the invocation to completion with inherited stdio.
///
/// Returns the child's exit code; a child killed by a signal reports 1.
pub fn execute(invocation: &Invocation) -> Result<i32, RunError> {
    info!(
        event = "core.runner.execute_started",
        command_line = %invocation.command_line()
    );

    let status = std::process::Command::new(&invocation.program)
        .args(&invocation.args)
        .status()
        .map_err(|e| {
            warn!(
                event = "core.runner.execute_failed",
                program = %invocation.program,
                error = %e
            );
            if e.kind() == std::io::ErrorKind::NotFound {
                RunError::ExecutableNotFound {
                    program: invocation.program.clone(),
                }
            } else {
                RunError::SpawnFailed {
                    program: invocation.program.clone(),
                    source: e,
                }
            }
        })?;

    let code = status.code().unwrap_or(1);
    info!(
        event = "core.runner.execute_completed",
        program = %invocation.program,
        exit_code = code
    );
    Ok(code)
}
