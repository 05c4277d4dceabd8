//! Allowlist handling for bypassing security checks
//!
//! Two sources: the built-in tables below, compiled into each [`Catalog`],
//! and an optional user file of extra patterns loaded at startup.
//!
//! [`Catalog`]: crate::rules::Catalog

use regex::Regex;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

use crate::input::ToolKind;
use crate::rules::{AllowPattern, Domain};

/// Built-in file path allowlist
pub const FILE_ALLOWLIST: &[AllowPattern] = &[
    AllowPattern::file(
        r"(?:^|/)\.env\.(?:example|sample|template|dist|defaults)$",
        "env templates carry no real values",
    ),
    AllowPattern::file(
        r"(?:^|/)[^/]+\.(?:example|sample|template)(?:\.[A-Za-z0-9]+)?$",
        "example and template files",
    ),
    AllowPattern::file(r"(?:^|/)\.ssh/config$", "SSH client config holds no key material"),
    AllowPattern::file(r"\.pub$", "public keys"),
];

/// Built-in command allowlist
///
/// Anchored to the whole command line so a benign prefix cannot carry a
/// second command past the catalog.
pub const COMMAND_ALLOWLIST: &[AllowPattern] = &[
    AllowPattern::command(
        r#"^[ \t]*(?:cat|less|more|head|tail|bat|batcat)[ \t]+(?:-[\w=-]+[ \t]+(?:\d+[ \t]+)?)*["']?[\w./~-]*\.env\.(?:example|sample|template|dist|defaults)["']?[ \t]*$"#,
        "reading an env template",
    ),
    AllowPattern::command(
        r#"^[ \t]*(?:cat|less|more|head|tail|bat|batcat)[ \t]+(?:-[\w=-]+[ \t]+(?:\d+[ \t]+)?)*["']?[\w./~$-]*\.ssh/(?:config|[\w.-]+\.pub)["']?[ \t]*$"#,
        "reading SSH client config or a public key",
    ),
    AllowPattern::command(
        r#"^[ \t]*envsubst(?:[ \t]+[\w'"=$.-]+)*[ \t]*(?:<[ \t]*[\w./-]+)?[ \t]*$"#,
        "envsubst renders a template to stdout",
    ),
];

/// Errors raised while loading a user allowlist
#[derive(Debug, Error)]
pub enum AllowlistError {
    #[error("failed to read allowlist {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse allowlist: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid allowlist pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// An allowlist entry
#[derive(Debug, Clone, Deserialize)]
pub struct AllowEntry {
    /// Regex pattern to match
    pub pattern: String,

    /// Human-readable reason for allowing
    pub reason: String,

    /// Optional tool restriction (if not set, applies to all tools)
    #[serde(default)]
    pub tool: Option<String>,
}

/// The allowlist configuration file structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AllowlistConfig {
    /// List of allowed patterns
    #[serde(default)]
    pub allow: Vec<AllowEntry>,
}

/// Compiled user allowlist, split by domain
#[derive(Debug, Default)]
pub struct UserAllowlist {
    command: Vec<(Regex, String)>,
    file: Vec<(Regex, String)>,
}

impl UserAllowlist {
    /// Create an empty allowlist
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load and compile allowlist from file
    pub fn from_file(path: &Path) -> Result<Self, AllowlistError> {
        let content = std::fs::read_to_string(path).map_err(|source| AllowlistError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config: AllowlistConfig = toml::from_str(&content)?;
        Self::from_config(&config)
    }

    /// Load from `path` if it exists, otherwise return an empty list.
    ///
    /// A broken file is skipped with a warning: the built-in catalog still
    /// applies in full.
    pub fn load_or_empty(path: Option<&Path>) -> Self {
        let Some(path) = path.filter(|p| p.exists()) else {
            return Self::empty();
        };
        Self::from_file(path).unwrap_or_else(|e| {
            warn!("ignoring user allowlist: {e}");
            Self::empty()
        })
    }

    /// Compile from config
    pub fn from_config(config: &AllowlistConfig) -> Result<Self, AllowlistError> {
        let mut allowlist = Self::empty();

        for entry in &config.allow {
            let regex = Regex::new(&entry.pattern).map_err(|source| AllowlistError::Pattern {
                pattern: entry.pattern.clone(),
                source,
            })?;
            let item = (regex, entry.reason.clone());

            match entry.tool.as_deref() {
                None | Some("*") => {
                    allowlist.command.push(item.clone());
                    allowlist.file.push(item);
                }
                Some(tool) => match ToolKind::from_name(tool) {
                    ToolKind::Command => allowlist.command.push(item),
                    ToolKind::File(_) => allowlist.file.push(item),
                    ToolKind::Other => warn!("allowlist entry for unsupported tool '{tool}' ignored"),
                },
            }
        }

        Ok(allowlist)
    }

    /// Return the reason of the first entry in `domain` matching `input`
    pub fn matches(&self, domain: Domain, input: &str) -> Option<&str> {
        let entries = match domain {
            Domain::CommandLine => &self.command,
            Domain::FilePath => &self.file,
        };
        entries
            .iter()
            .find(|(regex, _)| regex.is_match(input))
            .map(|(_, reason)| reason.as_str())
    }

    /// Check if the allowlist is empty
    pub fn is_empty(&self) -> bool {
        self.command.is_empty() && self.file.is_empty()
    }
}
