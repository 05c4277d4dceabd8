//! Bash command classification
//!
//! No shell grammar here: a command is matched as text, in a few normalized
//! forms, so incidental spacing and quoting do not change the verdict.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use crate::config::SafetyLevel;
use crate::output::Decision;
use crate::rules::Catalog;

static LINE_BREAKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*[\r\n]+\s*").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Normalized forms of a command: trimmed raw text, whitespace-collapsed
/// (line breaks become `; `), and shell-dequoted.
pub fn command_candidates(command: &str) -> Vec<String> {
    let raw = command.trim();
    let mut candidates = vec![raw.to_string()];

    push_unique(&mut candidates, collapse_whitespace(raw));

    if let Some(tokens) = shlex::split(raw) {
        if !tokens.is_empty() {
            push_unique(&mut candidates, tokens.join(" "));
        }
    }

    candidates
}

/// Collapse runs of whitespace to one space, turning line breaks into `; `
pub fn collapse_whitespace(command: &str) -> String {
    let joined = LINE_BREAKS.replace_all(command, "; ");
    WHITESPACE.replace_all(&joined, " ").into_owned()
}

fn push_unique(candidates: &mut Vec<String>, candidate: String) {
    if !candidate.is_empty() && !candidates.contains(&candidate) {
        candidates.push(candidate);
    }
}

/// Check a bash command against the command catalog
pub fn check_command(catalog: &Catalog, command: &str, level: SafetyLevel) -> Decision {
    let decision = catalog.classify(command, level);
    trace!(blocked = decision.blocked, rule = ?decision.rule_id(), "command classified");
    decision
}
