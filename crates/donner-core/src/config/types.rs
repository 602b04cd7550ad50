//! Configuration type definitions for donner.
//!
//! These types are deserialized from the `.donner.yml` document.
//!
//! # Example Configuration
//!
//! ```yaml
//! strategies:
//!   run:
//!     handler: docker_compose_run
//!     service: app
//!     remove: true
//!   exec:
//!     handler: docker_compose_exec
//!     service: app
//!
//! default_strategy: run
//!
//! commands:
//!   npm: exec
//!   bundle: run
//!   rake: ""
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Root of the `.donner.yml` document.
///
/// Only ever handed out by [`super::parsing::parse`] after validation, so
/// holders of a `Config` can rely on non-empty maps and known handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Named strategies
    #[serde(default, deserialize_with = "null_values_as_default")]
    pub strategies: HashMap<String, Strategy>,

    /// Strategy used by commands that do not name one
    #[serde(default)]
    pub default_strategy: String,

    /// Named commands and their labels
    #[serde(default, deserialize_with = "null_as_empty")]
    pub commands: HashMap<String, Command>,
}

/// A recipe for wrapping a command in one of the built-in handlers.
///
/// A missing handler deserializes as `""` and is rejected later by
/// validation, not by the YAML layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Strategy {
    /// Name of a built-in handler, see [`crate::handlers`].
    #[serde(default)]
    pub handler: String,

    /// Compose service the command runs in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,

    /// Remove the container once the command exits.
    #[serde(default)]
    pub remove: bool,

    /// Image to start for `docker run`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Label attached to a command in the `commands` section.
///
/// A non-empty label names the strategy the command runs with. An empty
/// (or null) label defers to `default_strategy`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>")]
pub struct Command(String);

impl Command {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The strategy explicitly named by this command, if any.
    pub fn strategy(&self) -> Option<&str> {
        let label = self.0.trim();
        (!label.is_empty()).then_some(label)
    }
}

impl From<Option<String>> for Command {
    fn from(label: Option<String>) -> Self {
        Self(label.unwrap_or_default())
    }
}

impl From<&str> for Command {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Treat `key:` with no value the same as a missing key.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<HashMap<String, T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<HashMap<String, T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Like [`null_as_empty`], and also turns `name:` entries into `T::default()`.
fn null_values_as_default<'de, D, T>(deserializer: D) -> Result<HashMap<String, T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let entries: HashMap<String, Option<T>> = null_as_empty(deserializer)?;
    Ok(entries
        .into_iter()
        .map(|(name, value)| (name, value.unwrap_or_default()))
        .collect())
}
