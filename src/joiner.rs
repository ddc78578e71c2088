//! Joins located test failures with file ownership.

use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use crate::index::{SymbolIndex, SymbolLocation};
use crate::locator::Locator;
use crate::ownership::RuleSet;
use crate::results::TestFailure;
use crate::utils::path::normalize_path;

/// A test failure with whatever could be resolved about it. Each field is
/// independent: a located failure can still have no owners.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OwnedFailure {
    pub failure: TestFailure,
    pub location: Option<SymbolLocation>,
    pub owners: Option<Vec<String>>,
}

impl OwnedFailure {
    pub fn path(&self) -> Option<&str> {
        self.location.as_ref().map(|l| l.path.as_str())
    }

    pub fn line(&self) -> Option<usize> {
        self.location.as_ref().map(|l| l.line)
    }

    pub fn is_resolved(&self) -> bool {
        self.location.is_some() && self.owners.is_some()
    }
}

/// Locates each failure and resolves the owners of its defining file.
/// The output mirrors `failures` one-to-one and in order.
pub fn resolve_failure_owners<I>(
    failures: &[TestFailure],
    rules: &RuleSet,
    index: &I,
) -> Vec<OwnedFailure>
where
    I: SymbolIndex + ?Sized,
{
    let locator = Locator::new(index);

    let owned: Vec<OwnedFailure> = failures
        .iter()
        .map(|failure| resolve_failure(failure, rules, &locator))
        .collect();

    let resolved = owned.iter().filter(|f| f.is_resolved()).count();
    info!(failures = owned.len(), resolved, "joined failures with owners");
    owned
}

fn resolve_failure<I>(failure: &TestFailure, rules: &RuleSet, locator: &Locator<'_, I>) -> OwnedFailure
where
    I: SymbolIndex + ?Sized,
{
    let location = locator.locate(
        &failure.test_identifier_string,
        Some(failure.target_name.as_str()),
    );

    let Some(mut location) = location else {
        warn!(identifier = %failure.test_identifier_string, "unable to locate test");
        return OwnedFailure {
            failure: failure.clone(),
            location: None,
            owners: None,
        };
    };

    let path = normalize_path(Path::new(&location.path));
    location.path = path.to_string_lossy().into_owned();
    let owners = rules.resolve(&path).map(<[String]>::to_vec);

    OwnedFailure {
        failure: failure.clone(),
        location: Some(location),
        owners,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::{IndexSnapshot, SymbolKind, SymbolOccurrence, SymbolRole};
    use crate::ownership::compile_rules_with_probe;
    use pretty_assertions::assert_eq;

    fn failure(identifier: &str, module: &str) -> TestFailure {
        TestFailure {
            failure_text: "failed".to_string(),
            target_name: module.to_string(),
            test_identifier_string: identifier.to_string(),
            test_identifier_url: None,
            test_name: identifier.rsplit('/').next().unwrap().to_string(),
        }
    }

    fn definition(usr: &str, name: &str, path: &str, module: &str, line: usize) -> SymbolOccurrence {
        SymbolOccurrence {
            usr: usr.to_string(),
            name: name.to_string(),
            kind: SymbolKind::Function,
            roles: vec![SymbolRole::Definition],
            location: SymbolLocation {
                path: path.to_string(),
                line,
                column: 1,
                module: module.to_string(),
            },
            relations: vec![],
        }
    }

    fn rules() -> RuleSet {
        RuleSet::new(
            compile_rules_with_probe("/Tests/Owned/ @owned-team\n", Path::new("/repo"), |_| false)
                .unwrap(),
        )
    }

    #[test]
    fn test_output_mirrors_input_order_and_length() {
        let index = IndexSnapshot::new(vec![
            definition("s:a", "owned()", "/repo/Tests/Owned/A.swift", "ATests", 3),
            definition("s:b", "orphan()", "/repo/Tests/Orphan/B.swift", "ATests", 7),
        ]);
        let failures = vec![
            failure("missing()", "ATests"),
            failure("owned()", "ATests"),
            failure("orphan()", "ATests"),
            failure("owned()", "OtherTests"),
        ];

        let owned = resolve_failure_owners(&failures, &rules(), &index);
        assert_eq!(owned.len(), failures.len());

        for (result, input) in owned.iter().zip(&failures) {
            assert_eq!(&result.failure, input);
        }

        assert_eq!(owned[0].location, None);
        assert_eq!(owned[0].owners, None);

        assert_eq!(owned[1].path(), Some("/repo/Tests/Owned/A.swift"));
        assert_eq!(owned[1].line(), Some(3));
        assert_eq!(owned[1].owners, Some(vec!["@owned-team".to_string()]));
        assert!(owned[1].is_resolved());

        assert_eq!(owned[2].line(), Some(7));
        assert_eq!(owned[2].owners, None);
        assert!(!owned[2].is_resolved());

        assert_eq!(owned[3].location, None);
    }

    #[test]
    fn test_location_path_is_normalized_before_resolution() {
        let index = IndexSnapshot::new(vec![definition(
            "s:a",
            "owned()",
            "/repo/Tests/Other/../Owned/./A.swift",
            "ATests",
            3,
        )]);
        let owned = resolve_failure_owners(&[failure("owned()", "ATests")], &rules(), &index);

        assert_eq!(owned[0].path(), Some("/repo/Tests/Owned/A.swift"));
        assert_eq!(owned[0].owners, Some(vec!["@owned-team".to_string()]));
    }

    #[test]
    fn test_empty_input() {
        let index = IndexSnapshot::default();
        assert!(resolve_failure_owners(&[], &rules(), &index).is_empty());
    }
}
