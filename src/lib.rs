//! claude-safety-hooks - PreToolUse safety policy for Claude Code
//!
//! This library classifies proposed tool calls (shell commands and file
//! reads/writes/edits) against tiered rule catalogs and produces the hook
//! response the host expects.
//!
//! # Features
//!
//! - **Command catalog**: destructive commands, pipe-to-shell, secret exposure
//! - **File catalog**: credential and key files at any directory depth
//! - **Safety levels**: cumulative thresholds (critical, high, strict)
//! - **Allowlists**: built-in template/public-key exceptions plus a user file
//! - **Audit logging**: day-partitioned JSONL of all decisions
//!
//! # Example
//!
//! ```
//! use claude_safety_hooks::{HookInput, HookOutput, SafetyEngine, SafetyLevel};
//!
//! let engine = SafetyEngine::new(SafetyLevel::High).unwrap();
//!
//! let input = r#"{"tool_name":"Bash","tool_input":{"command":"rm -rf ~/"}}"#;
//! let hook_input = HookInput::from_json(input).unwrap();
//!
//! let decision = engine.evaluate(&hook_input);
//! assert!(decision.blocked);
//! assert_eq!(decision.rule_id(), Some("rm-home"));
//!
//! let json = HookOutput::from_decision(&decision).to_json();
//! assert!(json.contains("home directory"));
//! ```

pub mod audit;
pub mod config;
pub mod engine;
pub mod input;
pub mod output;
pub mod rules;

// Re-exports for convenience
pub use config::{Config, SafetyLevel};
pub use engine::SafetyEngine;
pub use input::{HookInput, ToolKind};
pub use output::{Decision, HookOutput};
pub use rules::{CatalogError, Rule};
