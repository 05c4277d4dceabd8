//! Compiled rule catalogs
//!
//! A [`Catalog`] is one domain's ordered rule list plus its allowlist, with
//! every pattern compiled once. Compilation also validates the table: ids are
//! unique, reasons are non-empty, and no rule example is claimed by an earlier
//! rule at any level where both are active. A catalog that fails any of these
//! checks must not be used.

use std::borrow::Cow;
use std::collections::HashSet;

use once_cell::sync::OnceCell;
use regex::Regex;
use thiserror::Error;

use crate::config::SafetyLevel;
use crate::engine::{command, file};
use crate::output::Decision;
use crate::rules::allowlist::{COMMAND_ALLOWLIST, FILE_ALLOWLIST};
use crate::rules::commands::COMMAND_RULES;
use crate::rules::files::FILE_RULES;
use crate::rules::{AllowPattern, Domain, Rule};

static CATALOGS: OnceCell<Catalogs> = OnceCell::new();

/// Fatal problems found while compiling a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("rule '{id}' has an invalid pattern: {source}")]
    InvalidPattern {
        id: &'static str,
        #[source]
        source: regex::Error,
    },

    #[error("allowlist pattern '{pattern}' is invalid: {source}")]
    InvalidAllowPattern {
        pattern: &'static str,
        #[source]
        source: regex::Error,
    },

    #[error("duplicate rule id '{id}' in {domain} catalog")]
    DuplicateId { id: &'static str, domain: Domain },

    #[error("rule '{0}' has an empty reason")]
    EmptyReason(&'static str),

    #[error("{kind} '{id}' is tagged {actual} but listed in the {expected} catalog")]
    DomainMismatch {
        kind: &'static str,
        id: &'static str,
        actual: Domain,
        expected: Domain,
    },

    #[error("rule '{id}' does not match its own example {example:?}")]
    ExampleNotMatched {
        id: &'static str,
        example: &'static str,
    },

    #[error("example {example:?} of rule '{id}' is allowlisted")]
    ExampleAllowlisted {
        id: &'static str,
        example: &'static str,
    },

    #[error("rule '{id}' is shadowed by earlier rule '{by}' at level {level} (example {example:?})")]
    Shadowed {
        id: &'static str,
        by: &'static str,
        level: SafetyLevel,
        example: &'static str,
    },
}

#[derive(Debug)]
struct CompiledRule {
    rule: &'static Rule,
    matcher: Regex,
    except: Option<Regex>,
}

impl CompiledRule {
    fn is_match(&self, candidate: &str) -> bool {
        let text = match &self.except {
            Some(except) => except.replace_all(candidate, " "),
            None => Cow::Borrowed(candidate),
        };
        self.matcher.is_match(&text)
    }
}

/// One domain's compiled rules and allowlist
#[derive(Debug)]
pub struct Catalog {
    domain: Domain,
    rules: Vec<CompiledRule>,
    allowlist: Vec<Regex>,
}

impl Catalog {
    /// Compile and validate a rule table for `domain`
    pub fn compile(
        domain: Domain,
        rules: &'static [Rule],
        allowlist: &'static [AllowPattern],
    ) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        let mut compiled = Vec::with_capacity(rules.len());

        for rule in rules {
            if rule.domain != domain {
                return Err(CatalogError::DomainMismatch {
                    kind: "rule",
                    id: rule.id,
                    actual: rule.domain,
                    expected: domain,
                });
            }
            if !seen.insert(rule.id) {
                return Err(CatalogError::DuplicateId { id: rule.id, domain });
            }
            if rule.reason.trim().is_empty() {
                return Err(CatalogError::EmptyReason(rule.id));
            }
            let matcher = Regex::new(rule.pattern)
                .map_err(|source| CatalogError::InvalidPattern { id: rule.id, source })?;
            let except = rule
                .except
                .map(Regex::new)
                .transpose()
                .map_err(|source| CatalogError::InvalidPattern { id: rule.id, source })?;
            compiled.push(CompiledRule {
                rule,
                matcher,
                except,
            });
        }

        let allowlist = allowlist
            .iter()
            .map(|entry| {
                if entry.domain != domain {
                    return Err(CatalogError::DomainMismatch {
                        kind: "allowlist pattern",
                        id: entry.pattern,
                        actual: entry.domain,
                        expected: domain,
                    });
                }
                Regex::new(entry.pattern).map_err(|source| CatalogError::InvalidAllowPattern {
                    pattern: entry.pattern,
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let catalog = Self {
            domain,
            rules: compiled,
            allowlist,
        };
        catalog.check_examples()?;
        Ok(catalog)
    }

    /// Each example must be reported as its own rule at every level that
    /// activates that rule.
    fn check_examples(&self) -> Result<(), CatalogError> {
        for compiled in &self.rules {
            let rule = compiled.rule;
            for &example in rule.examples {
                let candidates = self.candidates(example);

                if !candidates.iter().any(|c| compiled.is_match(c)) {
                    return Err(CatalogError::ExampleNotMatched { id: rule.id, example });
                }
                if self.is_allowlisted(&candidates) {
                    return Err(CatalogError::ExampleAllowlisted { id: rule.id, example });
                }

                for level in SafetyLevel::ALL.into_iter().filter(|l| l.includes(rule.level)) {
                    if let Some(first) = self.first_match(&candidates, level) {
                        if first.id != rule.id {
                            return Err(CatalogError::Shadowed {
                                id: rule.id,
                                by: first.id,
                                level,
                                example,
                            });
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Normalized forms of `input` for this catalog's domain
    pub fn candidates(&self, input: &str) -> Vec<String> {
        match self.domain {
            Domain::CommandLine => command::command_candidates(input),
            Domain::FilePath => file::path_candidates(input),
        }
    }

    /// True when a built-in allowlist entry covers the input.
    ///
    /// A path is covered when any of its forms matches. A command is covered
    /// only when every form matches, so a line break or quote that reads
    /// differently once normalized cannot carry a second command through.
    pub fn is_allowlisted(&self, candidates: &[String]) -> bool {
        if candidates.is_empty() {
            return false;
        }
        self.allowlist.iter().any(|re| match self.domain {
            Domain::FilePath => candidates.iter().any(|c| re.is_match(c)),
            Domain::CommandLine => candidates.iter().all(|c| re.is_match(c)),
        })
    }

    /// First rule, in declared order, that is active at `level` and matches
    /// any candidate
    fn first_match(&self, candidates: &[String], level: SafetyLevel) -> Option<&'static Rule> {
        self.rules
            .iter()
            .filter(|compiled| level.includes(compiled.rule.level))
            .find(|compiled| candidates.iter().any(|c| compiled.is_match(c)))
            .map(|compiled| compiled.rule)
    }

    /// Classify `input` at the given safety level
    pub fn classify(&self, input: &str, level: SafetyLevel) -> Decision {
        let input = input.trim();
        if input.is_empty() {
            return Decision::allow();
        }

        let candidates = self.candidates(input);
        if self.is_allowlisted(&candidates) {
            return Decision::allow();
        }

        match self.first_match(&candidates, level) {
            Some(rule) => Decision::block(rule),
            None => Decision::allow(),
        }
    }

    /// Rules active at `level`, in evaluation order
    pub fn active_rules(&self, level: SafetyLevel) -> impl Iterator<Item = &'static Rule> + '_ {
        self.rules
            .iter()
            .map(|compiled| compiled.rule)
            .filter(move |rule| level.includes(rule.level))
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Both compiled catalogs
#[derive(Debug)]
pub struct Catalogs {
    pub file: Catalog,
    pub command: Catalog,
}

impl Catalogs {
    /// Compile the built-in tables
    pub fn load() -> Result<Self, CatalogError> {
        Ok(Self {
            file: Catalog::compile(Domain::FilePath, FILE_RULES, FILE_ALLOWLIST)?,
            command: Catalog::compile(Domain::CommandLine, COMMAND_RULES, COMMAND_ALLOWLIST)?,
        })
    }

    /// Process-wide catalogs, compiled on first use
    pub fn global() -> Result<&'static Catalogs, CatalogError> {
        CATALOGS.get_or_try_init(Self::load)
    }
}
