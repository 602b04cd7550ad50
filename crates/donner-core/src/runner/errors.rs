//! Runner-specific error types.

use crate::errors::DonnerError;

/// Errors that can occur while resolving or executing a command.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("Command '{command}' is not defined in the config and --strict is set")]
    CommandNotAllowed { command: String },

    #[error("Command '{command}' refers to unknown strategy '{strategy}'")]
    UnknownStrategy { command: String, strategy: String },

    #[error("Strategy '{strategy}' refers to unknown handler '{handler}'")]
    UnknownHandler { strategy: String, handler: String },

    #[error("Executable '{program}' is not installed or not in PATH")]
    ExecutableNotFound { program: String },

    #[error("Failed to start '{program}': {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

impl DonnerError for RunError {
    fn error_code(&self) -> &'static str {
        match self {
            RunError::CommandNotAllowed { .. } => "COMMAND_NOT_ALLOWED",
            RunError::UnknownStrategy { .. } => "UNKNOWN_STRATEGY",
            RunError::UnknownHandler { .. } => "UNKNOWN_HANDLER",
            RunError::ExecutableNotFound { .. } => "EXECUTABLE_NOT_FOUND",
            RunError::SpawnFailed { .. } => "SPAWN_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        !matches!(self, RunError::SpawnFailed { .. })
    }
}
