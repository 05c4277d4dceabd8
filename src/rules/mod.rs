//! Security rules for claude-safety-hooks
//!
//! Rules are static, typed tables. They are compiled and validated once per
//! process by [`catalog::Catalog::compile`].

pub mod allowlist;
pub mod catalog;
pub mod commands;
pub mod files;

use std::fmt;

use crate::config::SafetyLevel;

pub use catalog::{Catalog, CatalogError, Catalogs};

/// Which kind of input a rule or allowlist entry applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    /// A file path handed to Read/Write/Edit style tools
    FilePath,

    /// A shell command string handed to Bash
    CommandLine,
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Domain::FilePath => f.write_str("file"),
            Domain::CommandLine => f.write_str("command"),
        }
    }
}

/// A security rule definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    /// Unique identifier within its catalog
    pub id: &'static str,

    /// Safety level at which this rule becomes active
    pub level: SafetyLevel,

    /// Input kind this rule classifies
    pub domain: Domain,

    /// Regex pattern to match
    pub pattern: &'static str,

    /// Human-readable reason for blocking
    pub reason: &'static str,

    /// Inputs this rule must be the first match for
    pub examples: &'static [&'static str],

    /// Spans matching this pattern are blanked out before `pattern` is tried
    pub except: Option<&'static str>,
}

impl Rule {
    /// Create a shell command rule
    pub const fn command(
        id: &'static str,
        level: SafetyLevel,
        pattern: &'static str,
        reason: &'static str,
    ) -> Self {
        Self {
            id,
            level,
            domain: Domain::CommandLine,
            pattern,
            reason,
            examples: &[],
            except: None,
        }
    }

    /// Create a file path rule
    pub const fn file(
        id: &'static str,
        level: SafetyLevel,
        pattern: &'static str,
        reason: &'static str,
    ) -> Self {
        Self {
            id,
            level,
            domain: Domain::FilePath,
            pattern,
            reason,
            examples: &[],
            except: None,
        }
    }

    /// Attach sample inputs, checked for shadowing when the catalog is compiled
    pub const fn examples(self, examples: &'static [&'static str]) -> Self {
        Self { examples, ..self }
    }

    /// Ignore text matching `pattern`, such as a template file name inside a
    /// command that would otherwise look like a secret read
    pub const fn except(self, pattern: &'static str) -> Self {
        Self {
            except: Some(pattern),
            ..self
        }
    }
}

/// A built-in allowlist pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllowPattern {
    pub domain: Domain,
    pub pattern: &'static str,

    /// What the entry lets through
    pub note: &'static str,
}

impl AllowPattern {
    pub const fn command(pattern: &'static str, note: &'static str) -> Self {
        Self {
            domain: Domain::CommandLine,
            pattern,
            note,
        }
    }

    pub const fn file(pattern: &'static str, note: &'static str) -> Self {
        Self {
            domain: Domain::FilePath,
            pattern,
            note,
        }
    }
}
