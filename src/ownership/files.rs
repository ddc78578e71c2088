use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::WalkDir;

use super::compiler::load_rules;
use super::glob::{matches_any, Glob, MatchMode};
use super::resolver::{OwnedFile, RuleSet};
use crate::error::{CompilationError, IoError, Result};

pub const DEFAULT_CODEOWNERS_PATH: &str = ".github/CODEOWNERS";

pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &["*/build/*", "*/Build/*", "*/.build/*"];

pub const DEFAULT_SOURCE_EXTENSIONS: &[&str] = &["swift", "h", "m", "mm"];

/// Where the ownership rules live and which repository files take part in
/// ownership resolution.
#[derive(Debug, Clone)]
pub struct OwnershipOptions {
    /// Rule file location, relative to the repository root.
    pub codeowners_path: PathBuf,
    /// fnmatch patterns matched against absolute file paths.
    pub ignored_patterns: Vec<String>,
    pub source_extensions: Vec<String>,
}

impl Default for OwnershipOptions {
    fn default() -> Self {
        Self {
            codeowners_path: PathBuf::from(DEFAULT_CODEOWNERS_PATH),
            ignored_patterns: DEFAULT_IGNORE_PATTERNS
                .iter()
                .map(|p| p.to_string())
                .collect(),
            source_extensions: DEFAULT_SOURCE_EXTENSIONS
                .iter()
                .map(|e| e.to_string())
                .collect(),
        }
    }
}

impl OwnershipOptions {
    pub fn codeowners_file(&self, repository_root: &Path) -> PathBuf {
        repository_root.join(&self.codeowners_path)
    }

    pub fn ignore_globs(&self) -> std::result::Result<Vec<Glob>, CompilationError> {
        self.ignored_patterns
            .iter()
            .enumerate()
            .map(|(i, pattern)| {
                Glob::new(pattern, MatchMode::Exact)
                    .map_err(|e| CompilationError::invalid_pattern(pattern, i + 1, e.to_string()))
            })
            .collect()
    }

    pub fn has_source_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.source_extensions.iter().any(|e| e == ext))
    }
}

/// Loads the rule set named by `options` for the repository at `repository_root`.
pub fn load_repository_rules(
    repository_root: &Path,
    options: &OwnershipOptions,
) -> std::result::Result<RuleSet, CompilationError> {
    load_rules(&options.codeowners_file(repository_root), repository_root)
}

/// Walks the repository and resolves owners for every source file that is
/// not ignored. Files come back in walk order, sorted by name per directory.
pub fn resolve_file_owners(
    repository_root: &Path,
    options: &OwnershipOptions,
) -> Result<Vec<OwnedFile>> {
    if !repository_root.is_dir() {
        return Err(IoError::directory_not_found(repository_root).into());
    }

    let rules = load_repository_rules(repository_root, options)?;
    let files = source_files(repository_root, options)?;
    info!(files = files.len(), rules = rules.len(), "resolving file owners");

    Ok(files.iter().map(|path| rules.owned_file(path)).collect())
}

/// Source files under `repository_root` that survive the extension allowlist
/// and the ignore patterns.
pub fn source_files(repository_root: &Path, options: &OwnershipOptions) -> Result<Vec<PathBuf>> {
    let ignore = options.ignore_globs()?;
    let mut files = Vec::new();

    for entry in WalkDir::new(repository_root).sort_by_file_name() {
        let entry =
            entry.map_err(|e| IoError::directory_scan_error(repository_root, e))?;

        if !entry.file_type().is_file() || !options.has_source_extension(entry.path()) {
            continue;
        }

        let path = entry.path();
        if matches_any(&ignore, &path.to_string_lossy()) {
            debug!(path = %path.display(), "ignoring file");
            continue;
        }

        files.push(path.to_path_buf());
    }

    Ok(files)
}
