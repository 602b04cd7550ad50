//! Shell alias generation.
//!
//! Renders one `alias` line per configured command so users can type
//! `rails` instead of `donner run rails`:
//!
//! ```text
//!
//! alias rails='donner run rails'
//! alias rake='donner run rake'
//!
//! # copy and paste the output into your terminal or run
//! #  eval $(donner aliases)
//! ```

use std::io::Write;

use tracing::debug;

use crate::config::Config;

/// Flags forwarded from `donner aliases` into every generated alias.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AliasFlags {
    pub strict: bool,
    pub fallback: bool,
}

impl AliasFlags {
    pub fn new(strict: bool, fallback: bool) -> Self {
        Self { strict, fallback }
    }

    /// Command line flags, always `--strict` before `--fallback`.
    pub fn to_args(self) -> Vec<&'static str> {
        let mut flags = Vec::with_capacity(2);
        if self.strict {
            flags.push("--strict");
        }
        if self.fallback {
            flags.push("--fallback");
        }
        flags
    }
}

/// Render the alias block for a validated config.
///
/// Commands are emitted in [`Config::list_commands`] order, so the output
/// for a given config and flags is always the same.
pub fn render_aliases(config: &Config, flags: AliasFlags) -> String {
    let flag_args = flags.to_args();
    let mut output = String::from("\n");

    for command in config.list_commands() {
        let mut words: Vec<&str> = flag_args.clone();
        words.push(command);
        output.push_str(&format!(
            "alias {}='donner run {}'\n",
            command,
            words.join(" ")
        ));
    }

    let mut alias_command: Vec<&str> = vec!["donner", "aliases"];
    alias_command.extend(&flag_args);

    output.push('\n');
    output.push_str("# copy and paste the output into your terminal or run\n");
    output.push_str(&format!("#  eval $({})\n", alias_command.join(" ")));
    output
}

/// Write the alias block to stdout.
///
/// Expects a config that already passed [`crate::config::parse`].
pub fn print_aliases(config: &Config, flags: AliasFlags) -> std::io::Result<()> {
    debug!(
        event = "core.aliases.print_started",
        commands = config.commands.len(),
        strict = flags.strict,
        fallback = flags.fallback
    );

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(render_aliases(config, flags).as_bytes())?;
    stdout.flush()
}
