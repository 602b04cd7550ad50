//! Handler type definitions and core data structures.

use serde::{Deserialize, Serialize};

/// Built-in execution handlers.
///
/// Each variant names a fixed program plus argument prefix that a strategy
/// can wrap commands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandlerType {
    DockerComposeRun,
    DockerComposeExec,
    DockerRun,
    /// Points at a program that never exists, for exercising spawn failures.
    MissingExecutable,
}

impl HandlerType {
    /// Get the canonical string name for this handler type.
    pub fn as_str(&self) -> &'static str {
        match self {
            HandlerType::DockerComposeRun => "docker_compose_run",
            HandlerType::DockerComposeExec => "docker_compose_exec",
            HandlerType::DockerRun => "docker_run",
            HandlerType::MissingExecutable => "missing_executable",
        }
    }

    /// Parse a handler type from its configuration name.
    ///
    /// Matching is exact: `Docker_Run` is not a handler.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "docker_compose_run" => Some(HandlerType::DockerComposeRun),
            "docker_compose_exec" => Some(HandlerType::DockerComposeExec),
            "docker_run" => Some(HandlerType::DockerRun),
            "missing_executable" => Some(HandlerType::MissingExecutable),
            _ => None,
        }
    }

    /// Get all supported handler types.
    pub fn all() -> &'static [HandlerType] {
        &[
            HandlerType::DockerComposeRun,
            HandlerType::DockerComposeExec,
            HandlerType::DockerRun,
            HandlerType::MissingExecutable,
        ]
    }

    fn template(&self) -> (&'static str, &'static [&'static str]) {
        match self {
            HandlerType::DockerComposeRun => ("docker-compose", &["run"]),
            HandlerType::DockerComposeExec => ("docker-compose", &["exec"]),
            HandlerType::DockerRun => ("docker", &["run", "-it"]),
            HandlerType::MissingExecutable => ("i_am_not_an_executable_in_path", &[]),
        }
    }

    /// Build the execution template for this handler type.
    pub fn handler(&self) -> Handler {
        let (base_program, argument_prefix) = self.template();
        Handler {
            handler_type: *self,
            base_program,
            argument_prefix,
        }
    }
}

impl std::fmt::Display for HandlerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An execution template: the program to start and the arguments that
/// always come first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Handler {
    pub handler_type: HandlerType,
    pub base_program: &'static str,
    pub argument_prefix: &'static [&'static str],
}

impl Handler {
    pub fn name(&self) -> &'static str {
        self.handler_type.as_str()
    }

    /// Check if the base program is installed and available in PATH.
    pub fn is_available(&self) -> bool {
        which::which(self.base_program).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_type_round_trips_through_name() {
        for handler_type in HandlerType::all() {
            assert_eq!(HandlerType::parse(handler_type.as_str()), Some(*handler_type));
        }
    }

    #[test]
    fn test_handler_type_parse_is_exact() {
        assert_eq!(HandlerType::parse("Docker_Run"), None);
        assert_eq!(HandlerType::parse("docker-run"), None);
        assert_eq!(HandlerType::parse(""), None);
    }

    #[test]
    fn test_handler_type_serde_names() {
        let parsed: HandlerType = serde_yaml::from_str("docker_compose_exec").unwrap();
        assert_eq!(parsed, HandlerType::DockerComposeExec);
    }

    #[test]
    fn test_docker_run_template() {
        let handler = HandlerType::DockerRun.handler();
        assert_eq!(handler.name(), "docker_run");
        assert_eq!(handler.base_program, "docker");
        assert_eq!(handler.argument_prefix, &["run", "-it"]);
    }

    #[test]
    fn test_missing_executable_is_never_available() {
        let handler = HandlerType::MissingExecutable.handler();
        assert_eq!(handler.base_program, "i_am_not_an_executable_in_path");
        assert!(handler.argument_prefix.is_empty());
        assert!(!handler.is_available());
    }
}
