//! Ownership rules: compile the CODEOWNERS text into ordered glob rules and
//! resolve files against them with last-declaration-wins semantics.

pub mod compiler;
pub mod files;
pub mod glob;
pub mod resolver;

pub use compiler::{compile_rules, compile_rules_with_probe, load_rules, OwnershipRule};
pub use files::{
    load_repository_rules, resolve_file_owners, source_files, OwnershipOptions,
    DEFAULT_CODEOWNERS_PATH, DEFAULT_IGNORE_PATTERNS, DEFAULT_SOURCE_EXTENSIONS,
};
pub use glob::{Glob, MatchMode};
pub use resolver::{OwnedFile, RuleSet};
