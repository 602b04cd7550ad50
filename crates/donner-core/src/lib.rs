//! donner-core: Core library for the donner command launcher
//!
//! Maps short command names to strategies that wrap them in `docker` or
//! `docker-compose` invocations. It is used by the `donner` CLI.
//!
//! # Main Entry Points
//!
//! - [`config`] - Parse, validate and load `.donner.yml`
//! - [`handlers`] - Built-in execution templates
//! - [`aliases`] - Render shell alias definitions
//! - [`runner`] - Resolve and execute a command

pub mod aliases;
pub mod config;
pub mod errors;
pub mod events;
pub mod handlers;
pub mod logging;
pub mod runner;

// Re-export commonly used types at crate root for convenience
pub use aliases::{AliasFlags, print_aliases, render_aliases};
pub use config::{Command, Config, Strategy};
pub use errors::{ConfigError, DonnerError};
pub use handlers::{Handler, HandlerType};
pub use runner::{Invocation, RunError, RunOptions};

// Re-export handler modules as the primary API
pub use runner::handler as run_ops;

// Re-export logging initialization
pub use logging::init_logging;
