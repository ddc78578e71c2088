use std::fs;
use std::path::Path;

use tracing::{debug, trace};

use super::glob::{Glob, MatchMode};
use super::resolver::RuleSet;
use crate::error::CompilationError;

/// One declaration from the ownership rule source, resolved against the
/// repository root.
#[derive(Debug, Clone)]
pub struct OwnershipRule {
    /// Absolute glob, e.g. `/repo/Sources/ModuleA/*`.
    pub pattern: String,
    /// Owner tokens in declaration order, duplicates kept.
    pub owners: Vec<String>,
    /// Position among the compiled rules; later declarations override earlier ones.
    pub declaration_order: usize,
    glob: Glob,
}

impl OwnershipRule {
    pub fn is_match(&self, path: &str) -> bool {
        self.glob.is_match(path)
    }
}

/// Reads and compiles the rule file at `rules_path`.
pub fn load_rules(rules_path: &Path, repository_root: &Path) -> Result<RuleSet, CompilationError> {
    trace!(path = %rules_path.display(), "loading ownership rules");

    let text = fs::read_to_string(rules_path)
        .map_err(|e| CompilationError::rules_file_read_error(rules_path, e))?;

    let rules = compile_rules(&text, repository_root)?;
    debug!(count = rules.len(), path = %rules_path.display(), "compiled ownership rules");
    Ok(RuleSet::new(rules))
}

/// Compiles rule text, probing the filesystem to recognise directories.
pub fn compile_rules(
    text: &str,
    repository_root: &Path,
) -> Result<Vec<OwnershipRule>, CompilationError> {
    compile_rules_with_probe(text, repository_root, |path| path.is_dir())
}

/// Compiles rule text with a caller-supplied directory probe.
pub fn compile_rules_with_probe<F>(
    text: &str,
    repository_root: &Path,
    is_dir: F,
) -> Result<Vec<OwnershipRule>, CompilationError>
where
    F: Fn(&Path) -> bool,
{
    let mut rules = Vec::new();

    for (index, raw_line) in text.lines().enumerate() {
        let line_number = index + 1;
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 2 {
            trace!(line = line_number, "skipping ownership line without owners");
            continue;
        }

        let pattern = absolute_pattern(tokens[0], repository_root, &is_dir);
        let owners: Vec<String> = tokens[1..]
            .iter()
            .filter(|token| token.starts_with('@'))
            .map(|token| token.to_string())
            .collect();

        let glob = Glob::new(&pattern, MatchMode::LeadingDir)
            .map_err(|e| CompilationError::invalid_pattern(&pattern, line_number, e.to_string()))?;

        trace!(line = line_number, pattern = %pattern, owners = ?owners, "compiled ownership rule");

        rules.push(OwnershipRule {
            pattern,
            owners,
            declaration_order: rules.len(),
            glob,
        });
    }

    Ok(rules)
}

fn absolute_pattern<F>(raw: &str, repository_root: &Path, is_dir: &F) -> String
where
    F: Fn(&Path) -> bool,
{
    // Every separator is trimmed so that `join` never sees an absolute path.
    let relative = raw.trim_matches('/');

    let resolved = if relative.is_empty() {
        repository_root.to_path_buf()
    } else {
        repository_root.join(relative)
    };
    let resolved_str = resolved.to_string_lossy().into_owned();

    if is_directory_shaped(raw, relative, &resolved, is_dir) {
        format!("{}/*", resolved_str.trim_end_matches('/'))
    } else {
        resolved_str
    }
}

// Heuristic order: explicit trailing slash, filesystem probe, then "no extension".
// The last step misreads extension-less files such as `Makefile` as directories.
fn is_directory_shaped<F>(raw: &str, relative: &str, resolved: &Path, is_dir: &F) -> bool
where
    F: Fn(&Path) -> bool,
{
    if relative.ends_with('*') {
        return false;
    }
    if raw.ends_with('/') || is_dir(resolved) {
        return true;
    }
    let last_segment = relative.rsplit('/').next().unwrap_or(relative);
    !last_segment.contains('.')
}
