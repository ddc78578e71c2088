//! Read-only view of a pre-built symbol index.
//!
//! The index itself is produced elsewhere (a compiler's index store, an
//! exported dump). Lookups only need prefix queries by symbol name and
//! definition lookups by unique symbol key.

pub mod snapshot;

use serde::{Deserialize, Serialize};

pub use snapshot::IndexSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolKind {
    Function,
    InstanceMethod,
    ClassMethod,
    StaticMethod,
    Constructor,
    Struct,
    Class,
    Enum,
    Protocol,
    Extension,
    Variable,
    Module,
    #[serde(other)]
    Unknown,
}

impl SymbolKind {
    /// Free functions and methods; the kinds a test case can be declared as.
    pub fn is_callable(self) -> bool {
        matches!(
            self,
            Self::Function | Self::InstanceMethod | Self::ClassMethod | Self::StaticMethod
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolRole {
    Declaration,
    Definition,
    Reference,
    Call,
    ChildOf,
    BaseOf,
    OverrideOf,
    ContainedBy,
    #[serde(other)]
    Other,
}

/// Where an occurrence appears. `line` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolLocation {
    pub path: String,
    pub line: usize,
    pub column: usize,
    /// The module that reported this occurrence.
    pub module: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolRelation {
    pub role: SymbolRole,
    pub usr: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolOccurrence {
    /// Unique symbol key.
    pub usr: String,
    pub name: String,
    pub kind: SymbolKind,
    pub roles: Vec<SymbolRole>,
    pub location: SymbolLocation,
    #[serde(default)]
    pub relations: Vec<SymbolRelation>,
}

impl SymbolOccurrence {
    pub fn has_role(&self, role: SymbolRole) -> bool {
        self.roles.contains(&role)
    }

    pub fn is_callable_definition(&self) -> bool {
        self.has_role(SymbolRole::Definition) && self.kind.is_callable()
    }

    /// Key of the nearest enclosing symbol, if the index recorded one.
    pub fn parent_usr(&self) -> Option<&str> {
        self.relations
            .iter()
            .find(|relation| relation.role == SymbolRole::ChildOf)
            .map(|relation| relation.usr.as_str())
    }
}

/// Read-only symbol index. Implementations must be safe for concurrent reads.
pub trait SymbolIndex: Send + Sync {
    /// Occurrences whose name starts with `prefix` (case-sensitive), in the
    /// index's own order.
    fn occurrences_with_prefix(&self, prefix: &str) -> Vec<SymbolOccurrence>;

    /// The definition occurrence of the symbol identified by `usr`.
    fn definition_of(&self, usr: &str) -> Option<SymbolOccurrence>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occurrence(kind: SymbolKind, roles: Vec<SymbolRole>) -> SymbolOccurrence {
        SymbolOccurrence {
            usr: "s:4Test3fooyyF".to_string(),
            name: "foo()".to_string(),
            kind,
            roles,
            location: SymbolLocation {
                path: "/repo/Tests/FooTests.swift".to_string(),
                line: 3,
                column: 5,
                module: "FooTests".to_string(),
            },
            relations: vec![],
        }
    }

    #[test]
    fn test_callable_kinds() {
        assert!(SymbolKind::Function.is_callable());
        assert!(SymbolKind::InstanceMethod.is_callable());
        assert!(SymbolKind::StaticMethod.is_callable());
        assert!(!SymbolKind::Struct.is_callable());
        assert!(!SymbolKind::Variable.is_callable());
        assert!(!SymbolKind::Unknown.is_callable());
    }

    #[test]
    fn test_callable_definition_requires_both() {
        assert!(occurrence(SymbolKind::InstanceMethod, vec![SymbolRole::Definition])
            .is_callable_definition());
        assert!(!occurrence(SymbolKind::InstanceMethod, vec![SymbolRole::Reference])
            .is_callable_definition());
        assert!(!occurrence(SymbolKind::Class, vec![SymbolRole::Definition])
            .is_callable_definition());
    }

    #[test]
    fn test_parent_usr_uses_child_of_relation() {
        let mut occ = occurrence(SymbolKind::InstanceMethod, vec![SymbolRole::Definition]);
        assert_eq!(occ.parent_usr(), None);

        occ.relations = vec![
            SymbolRelation {
                role: SymbolRole::Call,
                usr: "s:callee".to_string(),
            },
            SymbolRelation {
                role: SymbolRole::ChildOf,
                usr: "s:parent".to_string(),
            },
        ];
        assert_eq!(occ.parent_usr(), Some("s:parent"));
    }

    #[test]
    fn test_unknown_kind_and_role_deserialize() {
        let json = r#"{
            "usr": "s:x",
            "name": "x",
            "kind": "macro",
            "roles": ["definition", "implicit"],
            "location": {"path": "/a.swift", "line": 1, "column": 1, "module": "M"}
        }"#;
        let occ: SymbolOccurrence = serde_json::from_str(json).unwrap();
        assert_eq!(occ.kind, SymbolKind::Unknown);
        assert_eq!(occ.roles, vec![SymbolRole::Definition, SymbolRole::Other]);
        assert!(occ.relations.is_empty());
    }
}
