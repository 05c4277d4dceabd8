//! JSONL audit logging for claude-safety-hooks
//!
//! Appends one record per evaluated tool call to `<dir>/<YYYY-MM-DD>.jsonl`
//! (local day). Each record is a single `write_all` on a file opened in append
//! mode, so concurrent hook processes interleave whole lines.

use chrono::{DateTime, Local, NaiveDate};
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::SafetyLevel;
use crate::input::HookInput;
use crate::output::Decision;

/// Name recorded in the `hook` field
pub const HOOK_NAME: &str = "safety-policy";

/// Log level for audit entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Allowed,
    Blocked,
}

/// An audit log entry
#[derive(Debug, Serialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Local>,

    /// BLOCKED or ALLOWED
    pub level: LogLevel,

    pub hook: &'static str,

    /// Tool that was invoked
    pub tool: String,

    /// Rule ID that matched (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    pub safety_level: SafetyLevel,

    /// Redacted, truncated description of the call
    pub summary: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cwd: Option<String>,
}

impl AuditEntry {
    /// Create a new audit entry from input and decision
    pub fn new(input: &HookInput, decision: &Decision, safety_level: SafetyLevel) -> Self {
        let level = if decision.blocked {
            LogLevel::Blocked
        } else {
            LogLevel::Allowed
        };

        Self {
            timestamp: Local::now(),
            level,
            hook: HOOK_NAME,
            tool: input.tool_name().to_string(),
            rule_id: decision.rule_id().map(String::from),
            reason: decision.reason.clone(),
            safety_level,
            summary: input.summary(),
            session_id: input.session_id.clone(),
            cwd: input.cwd.clone(),
        }
    }
}

/// Day-partitioned audit logger
#[derive(Debug, Clone, Default)]
pub struct AuditLogger {
    dir: Option<PathBuf>,
}

impl AuditLogger {
    /// Create a logger writing under `dir`; `None` disables logging
    pub fn new(dir: Option<&Path>) -> Self {
        Self {
            dir: dir.map(Path::to_path_buf),
        }
    }

    /// Create a disabled logger
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Check if logging is enabled
    pub fn is_enabled(&self) -> bool {
        self.dir.is_some()
    }

    /// File holding the records for `date`
    pub fn path_for(&self, date: NaiveDate) -> Option<PathBuf> {
        self.dir
            .as_ref()
            .map(|dir| dir.join(format!("{}.jsonl", date.format("%Y-%m-%d"))))
    }

    /// Append one entry to its day's file
    pub fn log(&self, entry: &AuditEntry) -> io::Result<()> {
        let Some(path) = self.path_for(entry.timestamp.date_naive()) else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut line = serde_json::to_vec(entry)?;
        line.push(b'\n');

        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        file.write_all(&line)
    }

    /// Log a decision; failures are dropped after a debug message
    pub fn record(&self, input: &HookInput, decision: &Decision, safety_level: SafetyLevel) {
        let entry = AuditEntry::new(input, decision, safety_level);
        if let Err(e) = self.log(&entry) {
            debug!("audit log write failed: {e}");
        }
    }
}
