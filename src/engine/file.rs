//! File operation security checking
//!
//! Checks Read/Write/Edit targets against the file catalog. Paths are not
//! resolved on disk; only lexical forms are compared.

use std::path::Path;

use tracing::trace;

use crate::config::SafetyLevel;
use crate::output::Decision;
use crate::rules::Catalog;

/// Normalized forms of a path: trimmed raw, forward-slashed, lexically
/// cleaned, basename, and home-expanded.
pub fn path_candidates(path: &str) -> Vec<String> {
    let raw = path.trim();
    let mut candidates = vec![raw.to_string()];

    let slashed = raw.replace('\\', "/");
    push_unique(&mut candidates, slashed.clone());
    push_unique(&mut candidates, clean_path(&slashed));

    if let Some(name) = basename(&slashed) {
        push_unique(&mut candidates, name.to_string());
    }

    if let Some(expanded) = expand_home(&slashed) {
        push_unique(&mut candidates, clean_path(&expanded));
        push_unique(&mut candidates, expanded);
    }

    candidates
}

fn push_unique(candidates: &mut Vec<String>, candidate: String) {
    if !candidate.is_empty() && !candidates.contains(&candidate) {
        candidates.push(candidate);
    }
}

/// Final path component, if any
pub fn basename(path: &str) -> Option<&str> {
    path.rsplit('/').next().filter(|name| !name.is_empty())
}

/// Resolve `.` and `..` components and repeated slashes without touching disk
pub fn clean_path(path: &str) -> String {
    let absolute = path.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();

    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => match parts.last() {
                Some(&last) if last != ".." => {
                    parts.pop();
                }
                _ if absolute => {}
                _ => parts.push(".."),
            },
            other => parts.push(other),
        }
    }

    let joined = parts.join("/");
    if absolute {
        format!("/{joined}")
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}

/// Expand a leading `~` or `$HOME` using the current home directory
fn expand_home(path: &str) -> Option<String> {
    let rest = if path == "~" || path == "$HOME" {
        ""
    } else {
        path.strip_prefix("~/")
            .or_else(|| path.strip_prefix("$HOME/"))?
    };
    let home = dirs::home_dir()?;
    let expanded = if rest.is_empty() {
        home
    } else {
        home.join(Path::new(rest))
    };
    Some(expanded.to_string_lossy().into_owned())
}

/// Check a file path against the file catalog
pub fn check_path(catalog: &Catalog, file_path: &str, level: SafetyLevel) -> Decision {
    let decision = catalog.classify(file_path, level);
    trace!(blocked = decision.blocked, rule = ?decision.rule_id(), "path classified");
    decision
}
