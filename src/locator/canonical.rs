use std::collections::HashSet;

use tracing::{trace, warn};

use crate::index::{SymbolIndex, SymbolOccurrence};

/// Builds the `/`-joined chain of enclosing-scope names for `occurrence` by
/// following `child_of` relations to each parent's definition until a symbol
/// has no parent. A parent seen twice ends the walk.
pub fn canonical_identifier<I>(index: &I, occurrence: &SymbolOccurrence) -> String
where
    I: SymbolIndex + ?Sized,
{
    let mut names = vec![occurrence.name.clone()];
    let mut visited: HashSet<String> = HashSet::from([occurrence.usr.clone()]);
    let mut current = occurrence.clone();

    while let Some(parent_usr) = current.parent_usr() {
        if !visited.insert(parent_usr.to_string()) {
            warn!(usr = %occurrence.usr, parent = %parent_usr, "cycle in child-of relations");
            break;
        }

        let Some(parent) = index.definition_of(parent_usr) else {
            trace!(parent = %parent_usr, "parent has no definition in index");
            break;
        };

        names.push(parent.name.clone());
        current = parent;
    }

    names.reverse();
    names.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::{
        IndexSnapshot, SymbolKind, SymbolLocation, SymbolRelation, SymbolRole,
    };

    fn definition(usr: &str, name: &str, kind: SymbolKind, parent: Option<&str>) -> SymbolOccurrence {
        SymbolOccurrence {
            usr: usr.to_string(),
            name: name.to_string(),
            kind,
            roles: vec![SymbolRole::Definition],
            location: SymbolLocation {
                path: "/repo/Tests/T.swift".to_string(),
                line: 1,
                column: 1,
                module: "T".to_string(),
            },
            relations: parent
                .map(|usr| {
                    vec![SymbolRelation {
                        role: SymbolRole::ChildOf,
                        usr: usr.to_string(),
                    }]
                })
                .unwrap_or_default(),
        }
    }

    #[test]
    fn test_top_level_symbol_is_its_name() {
        let foo = definition("s:foo", "topLevelTest()", SymbolKind::Function, None);
        let index = IndexSnapshot::new(vec![foo.clone()]);
        assert_eq!(canonical_identifier(&index, &foo), "topLevelTest()");
    }

    #[test]
    fn test_nested_symbol() {
        let outer = definition("s:Outer", "Outer", SymbolKind::Struct, None);
        let inner = definition("s:Inner", "Inner", SymbolKind::Class, Some("s:Outer"));
        let foo = definition("s:foo", "foo()", SymbolKind::InstanceMethod, Some("s:Inner"));
        let index = IndexSnapshot::new(vec![outer, inner, foo.clone()]);

        assert_eq!(canonical_identifier(&index, &foo), "Outer/Inner/foo()");
    }

    #[test]
    fn test_missing_parent_definition_stops_walk() {
        let foo = definition("s:foo", "foo()", SymbolKind::InstanceMethod, Some("s:Gone"));
        let index = IndexSnapshot::new(vec![foo.clone()]);
        assert_eq!(canonical_identifier(&index, &foo), "foo()");
    }

    #[test]
    fn test_cycle_terminates() {
        let a = definition("s:A", "A", SymbolKind::Struct, Some("s:B"));
        let b = definition("s:B", "B", SymbolKind::Struct, Some("s:A"));
        let foo = definition("s:foo", "foo()", SymbolKind::InstanceMethod, Some("s:A"));
        let index = IndexSnapshot::new(vec![a, b, foo.clone()]);

        assert_eq!(canonical_identifier(&index, &foo), "B/A/foo()");
    }

    #[test]
    fn test_self_parent_terminates() {
        let foo = definition("s:foo", "foo()", SymbolKind::InstanceMethod, Some("s:foo"));
        let index = IndexSnapshot::new(vec![foo.clone()]);
        assert_eq!(canonical_identifier(&index, &foo), "foo()");
    }
}
