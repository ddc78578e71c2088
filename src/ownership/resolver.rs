use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{trace, warn};

use super::compiler::OwnershipRule;

/// A file with the owners assigned by the ownership rules. `owners` is `None`
/// when no rule matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OwnedFile {
    pub path: PathBuf,
    pub owners: Option<Vec<String>>,
}

impl OwnedFile {
    pub fn new(path: impl Into<PathBuf>, owners: Option<Vec<String>>) -> Self {
        Self {
            path: path.into(),
            owners,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.owners.is_some()
    }
}

/// Compiled ownership rules in declaration order. Immutable once built and
/// safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<OwnershipRule>,
}

impl RuleSet {
    pub fn new(rules: Vec<OwnershipRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[OwnershipRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The last-declared rule whose pattern matches `path`.
    pub fn matching_rule(&self, path: &Path) -> Option<&OwnershipRule> {
        let candidate = path.to_string_lossy();
        self.rules.iter().rev().find(|rule| rule.is_match(&candidate))
    }

    /// Owners for `path`, or `None` when no rule matches.
    pub fn resolve(&self, path: &Path) -> Option<&[String]> {
        match self.matching_rule(path) {
            Some(rule) => {
                trace!(
                    path = %path.display(),
                    pattern = %rule.pattern,
                    order = rule.declaration_order,
                    "ownership rule matched"
                );
                Some(&rule.owners)
            }
            None => {
                warn!(path = %path.display(), "no ownership rule matches file");
                None
            }
        }
    }

    pub fn owned_file(&self, path: &Path) -> OwnedFile {
        OwnedFile::new(path, self.resolve(path).map(<[String]>::to_vec))
    }
}
