//! Command resolution and execution.
//!
//! A command resolves to a strategy (the one its label names, or
//! `default_strategy`), the strategy to a built-in handler, and the handler
//! to a program plus argument prefix. The final argv is:
//!
//! ```text
//! <handler prefix> [service] [image] [--rm] <command> [args...]
//! ```
//!
//! Commands missing from the config run with `default_strategy`, unless
//! `--fallback` (run on the host as-is) or `--strict` (refuse) is set.
//! `--fallback` is checked first.
//!
//! Before spawning, the handler's program is looked up on `PATH`, so a
//! missing `docker-compose` fails with `ExecutableNotFound` up front.

pub mod errors;
pub mod handler;
pub mod operations;
pub mod types;

pub use errors::RunError;
pub use operations::{build_invocation, check_available, execute};
pub use types::{Invocation, Resolution, RunOptions};
