//! Input parsing for Claude Code hook JSON format
//!
//! Parses the JSON record from stdin that Claude Code sends to PreToolUse
//! hooks and sorts the tool into the categories the engine knows about.

use serde::Deserialize;
use serde_json::Value;

use crate::engine::common::summarize;

/// Main input structure from Claude Code hooks
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HookInput {
    /// Name of the tool being invoked (e.g., "Bash", "Read", "Edit", "Write")
    #[serde(default)]
    pub tool_name: Option<String>,

    /// Tool-specific input parameters, kept as raw JSON
    #[serde(default)]
    pub tool_input: Value,

    #[serde(default)]
    pub session_id: Option<String>,

    #[serde(default)]
    pub cwd: Option<String>,

    #[serde(default)]
    pub permission_mode: Option<String>,

    /// Hook event name (e.g., "PreToolUse")
    #[serde(default)]
    pub hook_event_name: Option<String>,
}

/// File tools that take a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOp {
    Read,
    Write,
    Edit,
    MultiEdit,
    NotebookEdit,
}

/// Tool categories the engine classifies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    File(FileOp),
    Command,
    /// Outside the modeled domains; always allowed
    Other,
}

impl ToolKind {
    /// Categorize a tool by its exact name
    pub fn from_name(name: &str) -> Self {
        match name {
            "Read" => ToolKind::File(FileOp::Read),
            "Write" => ToolKind::File(FileOp::Write),
            "Edit" => ToolKind::File(FileOp::Edit),
            "MultiEdit" => ToolKind::File(FileOp::MultiEdit),
            "NotebookEdit" => ToolKind::File(FileOp::NotebookEdit),
            "Bash" => ToolKind::Command,
            _ => ToolKind::Other,
        }
    }
}

/// A tool call with its classification target extracted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolCall<'a> {
    File { op: FileOp, path: Option<&'a str> },
    Command { command: Option<&'a str> },
    Other { name: &'a str },
}

impl HookInput {
    /// Parse input from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn tool_name(&self) -> &str {
        self.tool_name.as_deref().unwrap_or("")
    }

    pub fn kind(&self) -> ToolKind {
        ToolKind::from_name(self.tool_name())
    }

    /// String field of `tool_input`, if present
    pub fn input_str(&self, key: &str) -> Option<&str> {
        self.tool_input.get(key).and_then(Value::as_str)
    }

    /// Sort the call and pull out the path or command to classify
    pub fn tool_call(&self) -> ToolCall<'_> {
        match self.kind() {
            ToolKind::File(op) => ToolCall::File {
                op,
                path: self
                    .input_str("file_path")
                    .or_else(|| self.input_str("notebook_path")),
            },
            ToolKind::Command => ToolCall::Command {
                command: self.input_str("command"),
            },
            ToolKind::Other => ToolCall::Other {
                name: self.tool_name(),
            },
        }
    }

    /// Get a summary of the input for logging
    pub fn summary(&self) -> String {
        match self.tool_call() {
            ToolCall::File { path, .. } => {
                format!("{}: {}", self.tool_name(), summarize(path.unwrap_or("")))
            }
            ToolCall::Command { command } => {
                format!("Bash: {}", summarize(command.unwrap_or("")))
            }
            ToolCall::Other { name } if name.is_empty() => "Unknown tool".to_string(),
            ToolCall::Other { name } => format!("Unknown tool: {}", name),
        }
    }
}
