//! Configuration loading for claude-safety-hooks
//!
//! The only policy knob is the safety level. Everything else here controls
//! where the audit log goes and whether a user allowlist is consulted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

/// Environment variable pointing at an explicit config file.
pub const CONFIG_PATH_ENV: &str = "CLAUDE_SAFETY_CONFIG";

/// Errors raised while loading the TOML config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Returned when a safety level string is not one of `critical`, `high`, `strict`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown safety level '{0}' (expected critical, high or strict)")]
pub struct ParseLevelError(pub String);

/// Safety level determines which rules are active.
///
/// Levels are cumulative: each one activates every rule of its own tier and
/// all tiers below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SafetyLevel {
    /// Only block catastrophic operations (rm -rf ~, disk wipes, fork bombs)
    Critical,

    /// Block critical + risky operations (force push main, secrets exposure)
    #[default]
    High,

    /// Block all above + cautionary, broader patterns
    Strict,
}

impl SafetyLevel {
    /// All levels, lowest first.
    pub const ALL: [SafetyLevel; 3] = [SafetyLevel::Critical, SafetyLevel::High, SafetyLevel::Strict];

    /// Integer rank: Critical=1, High=2, Strict=3.
    pub const fn rank(self) -> u8 {
        match self {
            SafetyLevel::Critical => 1,
            SafetyLevel::High => 2,
            SafetyLevel::Strict => 3,
        }
    }

    /// Check if a rule of `rule_level` is active when `self` is configured.
    pub fn includes(self, rule_level: SafetyLevel) -> bool {
        rule_level.rank() <= self.rank()
    }

    /// Parse a user-supplied value, falling back to `High` when it is unrecognized.
    pub fn parse_or_default(value: &str) -> Self {
        value.parse().unwrap_or_else(|err: ParseLevelError| {
            warn!("{err}; falling back to high");
            SafetyLevel::High
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SafetyLevel::Critical => "critical",
            SafetyLevel::High => "high",
            SafetyLevel::Strict => "strict",
        }
    }
}

impl FromStr for SafetyLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "critical" => Ok(SafetyLevel::Critical),
            "high" => Ok(SafetyLevel::High),
            "strict" => Ok(SafetyLevel::Strict),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

impl fmt::Display for SafetyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// General configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Safety level used when neither the CLI nor the environment sets one
    pub safety_level: SafetyLevel,

    /// Enable audit logging
    pub audit_log: bool,

    /// Directory holding the per-day audit files
    pub audit_dir: Option<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            safety_level: SafetyLevel::High,
            audit_log: true,
            audit_dir: Some("~/.claude/hooks-logs".to_string()),
        }
    }
}

/// Override configuration section
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct OverrideConfig {
    /// Path to a user allowlist file
    pub allowlist_file: Option<String>,
}

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub overrides: OverrideConfig,
}

impl Config {
    /// Load configuration from the first config file found, or use defaults.
    ///
    /// Search order: `$CLAUDE_SAFETY_CONFIG`, `~/.claude/safety-hooks/config.toml`,
    /// `/etc/claude-safety-hooks/config.toml`.
    pub fn load() -> Self {
        let config_paths = [
            std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from),
            dirs::home_dir().map(|p| p.join(".claude/safety-hooks/config.toml")),
            Some(PathBuf::from("/etc/claude-safety-hooks/config.toml")),
        ];

        for path in config_paths.into_iter().flatten() {
            if !path.exists() {
                continue;
            }
            match Self::load_from(&path) {
                Ok(config) => return config,
                Err(e) => warn!("{e}"),
            }
        }

        Config::default()
    }

    /// Load from a specific path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve the active level from an environment value and the file setting.
    ///
    /// A present but unrecognized environment value resolves to `High`, not to
    /// the file setting.
    pub fn resolve_safety_level(&self, env_value: Option<&str>) -> SafetyLevel {
        match env_value.map(str::trim) {
            Some(value) if !value.is_empty() => SafetyLevel::parse_or_default(value),
            _ => self.general.safety_level,
        }
    }

    /// Expand ~ in path strings
    pub fn expand_path(path: &str) -> PathBuf {
        if let Some(rest) = path.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest);
            }
        }
        PathBuf::from(path)
    }

    /// Get the audit directory (expanded), or `None` when auditing is off
    pub fn audit_dir(&self) -> Option<PathBuf> {
        if !self.general.audit_log {
            return None;
        }
        self.general.audit_dir.as_deref().map(Self::expand_path)
    }

    /// Get the allowlist file path (expanded)
    pub fn allowlist_path(&self) -> Option<PathBuf> {
        self.overrides.allowlist_file.as_deref().map(Self::expand_path)
    }
}
