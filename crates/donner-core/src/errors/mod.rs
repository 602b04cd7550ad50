use std::error::Error;

/// Base trait for all application errors
pub trait DonnerError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as an error or warning
    fn is_user_error(&self) -> bool {
        false
    }
}

/// Errors produced while loading, parsing or validating `.donner.yml`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found at '{path}'")]
    ConfigNotFound { path: String },

    /// Deserialization failure, surfaced unchanged from the YAML layer.
    #[error(transparent)]
    ParseError(#[from] serde_yaml::Error),

    #[error("the specified yaml file doesn't contain any strategies")]
    NoStrategiesSpecified,

    #[error("the specified yaml file doesn't contain any commands")]
    NoCommandsSpecified,

    #[error("configuration specifies unknown handler '{handler}' in strategy '{strategy}'")]
    InvalidHandler { strategy: String, handler: String },

    #[error("IO error reading config: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl DonnerError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::ConfigNotFound { .. } => "CONFIG_NOT_FOUND",
            ConfigError::ParseError(_) => "CONFIG_PARSE_ERROR",
            ConfigError::NoStrategiesSpecified => "NO_STRATEGIES_SPECIFIED",
            ConfigError::NoCommandsSpecified => "NO_COMMANDS_SPECIFIED",
            ConfigError::InvalidHandler { .. } => "INVALID_HANDLER",
            ConfigError::IoError { .. } => "CONFIG_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        !matches!(self, ConfigError::IoError { .. })
    }
}
