use crate::handlers::HandlerType;

/// Options from `donner run`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Refuse commands that are not listed in the config.
    pub strict: bool,
    /// Run unlisted commands directly on the host.
    pub fallback: bool,
}

/// How a command was resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Wrapped in a strategy's handler.
    Strategy {
        strategy: String,
        handler: HandlerType,
    },
    /// Not configured; executed as-is on the host.
    Host,
}

/// A fully assembled process invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub resolution: Resolution,
}

impl Invocation {
    /// Program and arguments joined for display and logging.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
