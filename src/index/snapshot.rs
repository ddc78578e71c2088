use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::{SymbolIndex, SymbolOccurrence, SymbolRole};
use crate::error::IndexError;

#[derive(Debug, Serialize, Deserialize)]
struct SnapshotFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    version: Option<String>,
    occurrences: Vec<SymbolOccurrence>,
}

/// An in-memory symbol index built from an exported list of occurrences.
///
/// Prefix queries walk a name-ordered map and hand results back in the order
/// the occurrences were exported, so tie-breaks downstream stay stable.
#[derive(Debug, Clone, Default)]
pub struct IndexSnapshot {
    occurrences: Vec<SymbolOccurrence>,
    by_name: BTreeMap<String, Vec<usize>>,
    definitions: HashMap<String, usize>,
}

impl IndexSnapshot {
    pub fn new(occurrences: Vec<SymbolOccurrence>) -> Self {
        let mut by_name: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        let mut definitions = HashMap::new();

        for (position, occurrence) in occurrences.iter().enumerate() {
            by_name
                .entry(occurrence.name.clone())
                .or_default()
                .push(position);

            if occurrence.has_role(SymbolRole::Definition) {
                definitions
                    .entry(occurrence.usr.clone())
                    .or_insert(position);
            }
        }

        Self {
            occurrences,
            by_name,
            definitions,
        }
    }

    /// Loads a snapshot from a `.json`, `.yaml` or `.yml` file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, IndexError> {
        let path = path.as_ref();
        trace!(path = %path.display(), "loading symbol index");

        let content =
            fs::read_to_string(path).map_err(|e| IndexError::read_error(path, e.to_string()))?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let file: SnapshotFile = match extension {
            "json" => serde_json::from_str(&content)
                .map_err(|e| IndexError::parse_error(path, e.to_string()))?,
            "yaml" | "yml" => serde_yaml::from_str(&content)
                .map_err(|e| IndexError::parse_error(path, e.to_string()))?,
            _ => return Err(IndexError::unsupported_format(extension)),
        };

        let snapshot = Self::new(file.occurrences);
        debug!(
            occurrences = snapshot.len(),
            definitions = snapshot.definitions.len(),
            "loaded symbol index"
        );
        Ok(snapshot)
    }

    pub fn occurrences(&self) -> &[SymbolOccurrence] {
        &self.occurrences
    }

    pub fn len(&self) -> usize {
        self.occurrences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occurrences.is_empty()
    }
}

impl SymbolIndex for IndexSnapshot {
    fn occurrences_with_prefix(&self, prefix: &str) -> Vec<SymbolOccurrence> {
        let mut positions: Vec<usize> = self
            .by_name
            .range(prefix.to_string()..)
            .take_while(|(name, _)| name.starts_with(prefix))
            .flat_map(|(_, positions)| positions.iter().copied())
            .collect();
        positions.sort_unstable();

        positions
            .into_iter()
            .map(|position| self.occurrences[position].clone())
            .collect()
    }

    fn definition_of(&self, usr: &str) -> Option<SymbolOccurrence> {
        self.definitions
            .get(usr)
            .map(|&position| self.occurrences[position].clone())
    }
}
