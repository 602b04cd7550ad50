//! Built-in execution handlers.
//!
//! A handler is the program donner actually starts (`docker`,
//! `docker-compose`) together with the arguments that always lead the
//! command line. The set is closed: adding a handler is a code change, not
//! a configuration change.
//!
//! # Usage
//!
//! ```rust
//! use donner_core::handlers::{is_valid_handler, lookup};
//!
//! assert!(is_valid_handler("docker_run"));
//! assert!(!is_valid_handler("podman_run"));
//!
//! let handler = lookup("docker_run").unwrap();
//! assert_eq!(handler.base_program, "docker");
//! assert_eq!(handler.argument_prefix, &["run", "-it"]);
//! ```

pub mod registry;
pub mod types;

pub use registry::{is_valid_handler, lookup, lookup_by_type, valid_handler_names};
pub use types::{Handler, HandlerType};
