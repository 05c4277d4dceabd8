//! Output formatting for Claude Code hook responses
//!
//! Produces the JSON output format expected by PreToolUse hooks: `{}` when the
//! hook has no opinion, a `hookSpecificOutput` record when a call is blocked.

use serde::Serialize;

use crate::config::SafetyLevel;
use crate::rules::{Domain, Rule};

/// Event name reported in every blocking response
pub const HOOK_EVENT_NAME: &str = "PreToolUse";

/// Main output structure for Claude Code hooks
#[derive(Debug, Default, Serialize)]
pub struct HookOutput {
    /// Hook-specific output containing the permission decision
    #[serde(rename = "hookSpecificOutput", skip_serializing_if = "Option::is_none")]
    pub hook_specific_output: Option<HookSpecificOutput>,
}

/// Hook-specific output with permission decision
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HookSpecificOutput {
    /// Always "PreToolUse"
    pub hook_event_name: String,

    pub permission_decision: PermissionDecision,

    /// Shown to the operator verbatim
    pub permission_decision_reason: String,
}

/// How hard the host should refuse the call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionDecision {
    Deny,
    /// Unrecoverable destruction: critical command rules only
    Block,
}

/// Decision result from the safety engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub blocked: bool,

    /// Rule that blocked the call
    pub rule: Option<&'static Rule>,

    /// The rule's reason when blocked; the allowlist reason when a user entry
    /// allowed the call
    pub reason: Option<String>,
}

impl Decision {
    /// Nothing matched
    pub fn allow() -> Self {
        Decision {
            blocked: false,
            rule: None,
            reason: None,
        }
    }

    /// Allowed by a user allowlist entry
    pub fn allowlisted(reason: impl Into<String>) -> Self {
        Decision {
            blocked: false,
            rule: None,
            reason: Some(reason.into()),
        }
    }

    /// Blocked by `rule`
    pub fn block(rule: &'static Rule) -> Self {
        Decision {
            blocked: true,
            rule: Some(rule),
            reason: Some(rule.reason.to_string()),
        }
    }

    /// Get the rule ID if applicable
    pub fn rule_id(&self) -> Option<&'static str> {
        self.rule.map(|rule| rule.id)
    }
}

/// Visual marker for a rule severity
pub fn marker(level: SafetyLevel) -> &'static str {
    match level {
        SafetyLevel::Critical => "🚨",
        SafetyLevel::High => "⛔",
        SafetyLevel::Strict => "⚠️",
    }
}

impl HookOutput {
    /// Create an allow response (empty output = no opinion)
    pub fn allow() -> Self {
        HookOutput::default()
    }

    /// Create a blocking response
    pub fn deny(decision: PermissionDecision, reason: impl Into<String>) -> Self {
        HookOutput {
            hook_specific_output: Some(HookSpecificOutput {
                hook_event_name: HOOK_EVENT_NAME.to_string(),
                permission_decision: decision,
                permission_decision_reason: reason.into(),
            }),
        }
    }

    /// Create a blocking response for a matched rule
    pub fn deny_with_rule(rule: &Rule) -> Self {
        let decision = match (rule.domain, rule.level) {
            (Domain::CommandLine, SafetyLevel::Critical) => PermissionDecision::Block,
            _ => PermissionDecision::Deny,
        };
        let reason = format!("{} [{}] {}", marker(rule.level), rule.id, rule.reason);
        HookOutput::deny(decision, reason)
    }

    /// Create output from a Decision
    pub fn from_decision(decision: &Decision) -> Self {
        match (decision.blocked, decision.rule) {
            (false, _) => HookOutput::allow(),
            (true, Some(rule)) => HookOutput::deny_with_rule(rule),
            (true, None) => HookOutput::deny(
                PermissionDecision::Deny,
                decision.reason.as_deref().unwrap_or("blocked by safety policy"),
            ),
        }
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
