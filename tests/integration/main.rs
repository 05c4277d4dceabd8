//! Library-level integration tests for claude-safety-hooks

mod command_tests;
mod policy_tests;

use claude_safety_hooks::{Decision, HookInput, SafetyEngine, SafetyLevel};
use serde_json::json;

pub const CRITICAL: SafetyLevel = SafetyLevel::Critical;
pub const HIGH: SafetyLevel = SafetyLevel::High;
pub const STRICT: SafetyLevel = SafetyLevel::Strict;

pub fn engine(level: SafetyLevel) -> SafetyEngine {
    SafetyEngine::new(level).unwrap()
}

pub fn evaluate(level: SafetyLevel, tool: &str, tool_input: serde_json::Value) -> Decision {
    let raw = json!({ "tool_name": tool, "tool_input": tool_input }).to_string();
    let input = HookInput::from_json(&raw).unwrap();
    engine(level).evaluate(&input)
}

pub fn check_command(level: SafetyLevel, command: &str) -> Decision {
    evaluate(level, "Bash", json!({ "command": command }))
}

pub fn check_file(level: SafetyLevel, path: &str) -> Decision {
    evaluate(level, "Read", json!({ "file_path": path }))
}

/// Assert the rule reported for `command` at `level` (`None` = allowed)
#[track_caller]
pub fn assert_command(level: SafetyLevel, command: &str, expected: Option<&str>) {
    let decision = check_command(level, command);
    assert_eq!(decision.rule_id(), expected, "{command:?} at {level}");
    assert_eq!(decision.blocked, expected.is_some(), "{command:?} at {level}");
}

/// Assert `command` is allowed at every level
#[track_caller]
pub fn assert_command_allowed(command: &str) {
    for level in SafetyLevel::ALL {
        assert_command(level, command, None);
    }
}

/// Assert the rule reported for `path` at `level` (`None` = allowed)
#[track_caller]
pub fn assert_file(level: SafetyLevel, path: &str, expected: Option<&str>) {
    let decision = check_file(level, path);
    assert_eq!(decision.rule_id(), expected, "{path:?} at {level}");
    assert_eq!(decision.blocked, expected.is_some(), "{path:?} at {level}");
}

/// Assert `path` is allowed at every level
#[track_caller]
pub fn assert_file_allowed(path: &str) {
    for level in SafetyLevel::ALL {
        assert_file(level, path, None);
    }
}
