//! Text helpers shared by the engine and the audit log
//!
//! Audit records carry a short summary of each tool call. These helpers keep
//! credentials that appear inline in a command out of that summary.

use once_cell::sync::Lazy;
use regex::Regex;

/// Longest summary written to the audit log, in characters
pub const SUMMARY_MAX_CHARS: usize = 200;

/// Inline credential shapes, each with its replacement text
static SECRET_PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    vec![
        // NAME=value assignments where the name looks secret; the name is kept
        (
            r"(?i)\b([A-Z0-9_]*(?:SECRET|TOKEN|PASSWORD|PASSWD|API_?KEY|ACCESS_?KEY)[A-Z0-9_]*)=(?:'[^']*'|\x22[^\x22]*\x22|\S+)",
            "$1=[REDACTED]",
        ),
        (r"(?i)(password|passwd|pwd)\s*:\s*['\x22][^'\x22]+['\x22]", "$1: [REDACTED]"),
        (r"(?i)\b(bearer)\s+[A-Za-z0-9._~+/-]{16,}=*", "$1 [REDACTED]"),
        (r"AKIA[0-9A-Z]{16}", "[REDACTED]"),
        (r"gh[pousr]_[A-Za-z0-9_]{36,}", "[REDACTED]"),
        (r"github_pat_[A-Za-z0-9_]{22,}", "[REDACTED]"),
        (r"\bsk-[A-Za-z0-9_-]{20,}", "[REDACTED]"),
        (r"xox[abpors]-[A-Za-z0-9-]{10,}", "[REDACTED]"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| (Regex::new(pattern).unwrap(), replacement))
    .collect()
});

/// Redact inline credentials in text for logging
pub fn redact_secrets(text: &str) -> String {
    let mut redacted = text.to_string();

    for (pattern, replacement) in SECRET_PATTERNS.iter() {
        redacted = pattern.replace_all(&redacted, *replacement).into_owned();
    }

    redacted
}

/// Truncate to `max_chars` characters, marking the cut with `...`
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Redacted, single-line, bounded form of a command or path
pub fn summarize(text: &str) -> String {
    let single_line = text.split_whitespace().collect::<Vec<_>>().join(" ");
    truncate(&redact_secrets(&single_line), SUMMARY_MAX_CHARS)
}
