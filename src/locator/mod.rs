//! Maps a test identifier to the source location that defines the test.
//!
//! Candidates are callable definitions whose name starts with the
//! identifier's leaf, optionally restricted to one module. A single candidate
//! wins outright. Otherwise the candidate whose canonical identifier equals
//! the test identifier wins; failing that, candidates are scored by how many
//! enclosing-scope names appear in their symbol key.

pub mod canonical;
pub mod disambiguate;
pub mod identifier;

use tracing::{debug, trace};

use crate::index::{SymbolIndex, SymbolLocation, SymbolOccurrence};

pub use canonical::canonical_identifier;
pub use identifier::TestIdentifier;

pub struct Locator<'a, I: SymbolIndex + ?Sized> {
    index: &'a I,
}

impl<'a, I: SymbolIndex + ?Sized> Locator<'a, I> {
    pub fn new(index: &'a I) -> Self {
        Self { index }
    }

    /// Location of the test named by `test_identifier`, or `None` when the
    /// index has no matching definition.
    pub fn locate(&self, test_identifier: &str, module: Option<&str>) -> Option<SymbolLocation> {
        let identifier = TestIdentifier::parse(test_identifier);
        let Some(leaf) = identifier.leaf() else {
            debug!(identifier = %test_identifier, "empty test identifier");
            return None;
        };

        let candidates = self.candidates(leaf, module);
        trace!(
            identifier = %test_identifier,
            candidates = candidates.len(),
            "collected candidate definitions"
        );

        let selected = match candidates.as_slice() {
            [] => None,
            [only] => Some(only),
            _ => disambiguate::select_exact(self.index, &candidates, identifier.as_str())
                .or_else(|| disambiguate::select_by_score(&candidates, identifier.scopes())),
        };

        match selected {
            Some(definition) => {
                debug!(
                    identifier = %test_identifier,
                    path = %definition.location.path,
                    line = definition.location.line,
                    "located test"
                );
                Some(definition.location.clone())
            }
            None => {
                debug!(identifier = %test_identifier, module = ?module, "symbol not found");
                None
            }
        }
    }

    /// Callable definitions whose name starts with `leaf`, in index order.
    pub fn candidates(&self, leaf: &str, module: Option<&str>) -> Vec<SymbolOccurrence> {
        self.index
            .occurrences_with_prefix(leaf)
            .into_iter()
            .filter(SymbolOccurrence::is_callable_definition)
            .filter(|occurrence| module.map_or(true, |m| occurrence.location.module == m))
            .collect()
    }
}
