//! Safety engine for claude-safety-hooks
//!
//! Routes each tool call to the file or command catalog at the configured
//! safety level.

pub mod command;
pub mod common;
pub mod file;

use tracing::debug;

use crate::config::{Config, SafetyLevel};
use crate::input::{HookInput, ToolCall};
use crate::output::Decision;
use crate::rules::allowlist::UserAllowlist;
use crate::rules::{CatalogError, Catalogs, Domain};

/// The main safety engine
#[derive(Debug)]
pub struct SafetyEngine {
    safety_level: SafetyLevel,
    catalogs: &'static Catalogs,
    user_allowlist: UserAllowlist,
}

impl SafetyEngine {
    /// Create an engine over the built-in catalogs.
    ///
    /// Fails if the catalogs do not compile; callers must not fall back to
    /// allowing everything.
    pub fn new(safety_level: SafetyLevel) -> Result<Self, CatalogError> {
        Ok(Self {
            safety_level,
            catalogs: Catalogs::global()?,
            user_allowlist: UserAllowlist::empty(),
        })
    }

    /// Create an engine with the user allowlist named in `config`
    pub fn from_config(config: &Config, safety_level: SafetyLevel) -> Result<Self, CatalogError> {
        let allowlist = UserAllowlist::load_or_empty(config.allowlist_path().as_deref());
        Ok(Self::new(safety_level)?.with_user_allowlist(allowlist))
    }

    pub fn with_user_allowlist(mut self, user_allowlist: UserAllowlist) -> Self {
        self.user_allowlist = user_allowlist;
        self
    }

    /// Main entry point: classify a tool call
    pub fn evaluate(&self, input: &HookInput) -> Decision {
        match input.tool_call() {
            ToolCall::Command { command } => match command {
                Some(command) => self.check_command(command),
                None => Decision::allow(),
            },
            ToolCall::File { path, .. } => match path {
                Some(path) => self.check_file(path),
                None => Decision::allow(),
            },
            ToolCall::Other { name } => {
                debug!(tool = name, "tool outside the command and file domains");
                Decision::allow()
            }
        }
    }

    /// Check a bash command
    pub fn check_command(&self, command: &str) -> Decision {
        self.check(Domain::CommandLine, command)
    }

    /// Check a file path
    pub fn check_file(&self, file_path: &str) -> Decision {
        self.check(Domain::FilePath, file_path)
    }

    fn check(&self, domain: Domain, input: &str) -> Decision {
        let input = input.trim();
        if input.is_empty() {
            return Decision::allow();
        }

        if let Some(reason) = self.user_allowlist.matches(domain, input) {
            debug!(%domain, reason, "allowed by user allowlist");
            return Decision::allowlisted(format!("allowlisted: {}", reason));
        }

        let decision = match domain {
            Domain::CommandLine => {
                command::check_command(&self.catalogs.command, input, self.safety_level)
            }
            Domain::FilePath => file::check_path(&self.catalogs.file, input, self.safety_level),
        };

        if let Some(rule) = decision.rule {
            debug!(%domain, rule = rule.id, level = %rule.level, "blocked");
        }
        decision
    }

    /// Get the current safety level
    pub fn safety_level(&self) -> SafetyLevel {
        self.safety_level
    }

    pub fn catalogs(&self) -> &'static Catalogs {
        self.catalogs
    }
}
