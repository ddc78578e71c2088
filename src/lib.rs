/// xcresult-owners
///
/// Locates failing test cases in a pre-built symbol index and resolves the
/// CODEOWNERS of the files that define them.
pub mod cli;
pub mod commands;
pub mod error;
pub mod index;
pub mod joiner;
pub mod locator;
pub mod logging;
pub mod output;
pub mod ownership;
pub mod results;
pub mod utils;

pub use error::{Error, Result};
pub use index::{IndexSnapshot, SymbolIndex, SymbolLocation, SymbolOccurrence};
pub use joiner::{resolve_failure_owners, OwnedFailure};
pub use locator::Locator;
pub use ownership::{OwnedFile, OwnershipRule, RuleSet};
