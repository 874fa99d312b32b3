//! Derives display names for the geography subdirectories of a results root.

use crate::core::errors::{ExplorerError, Result};
use crate::core::ResolvedGeography;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Dataset prefixes stripped from directory names, checked in this order.
/// Only the first occurrence of the first matching prefix is removed.
const DATASET_PREFIXES: [&str; 3] = ["LocalDataset_", "GISAID_", "GenBank_"];

/// Turn a raw directory name into a display name: strip the dataset prefix,
/// then rewrite the remaining underscores as spaces.
pub fn clean_name(raw: &str) -> String {
    let mut name = raw.to_string();
    for prefix in DATASET_PREFIXES {
        if let Some(pos) = name.find(prefix) {
            name.replace_range(pos..pos + prefix.len(), "");
            break;
        }
    }
    name.replace('_', " ")
}

/// List the immediate subdirectories of `root` and pair each with its clean
/// geography name. Non-directory entries are ignored. Fails when the root
/// has no subdirectories or when two directories clean to the same name.
pub fn resolve_geographies(root: &Path) -> Result<Vec<ResolvedGeography>> {
    let mut entries: Vec<_> = fs::read_dir(root)
        .map_err(|e| ExplorerError::search(root, e.to_string()))?
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| ExplorerError::search(root, e.to_string()))?
        .into_iter()
        .filter(|entry| entry.path().is_dir())
        .map(|entry| entry.path())
        .collect();
    // read_dir order is platform-dependent; sorting keeps runs reproducible
    entries.sort();

    let mut seen: HashMap<String, std::path::PathBuf> = HashMap::new();
    let mut resolved = Vec::with_capacity(entries.len());
    for dir in entries {
        let raw = dir
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .ok_or_else(|| {
                ExplorerError::search(&dir, "directory name is not valid UTF-8")
            })?;
        let geography = clean_name(&raw);
        if let Some(first) = seen.get(&geography) {
            return Err(ExplorerError::GeographyCollision {
                first: first.clone(),
                second: dir,
                clean: geography,
            });
        }
        seen.insert(geography.clone(), dir.clone());
        resolved.push(ResolvedGeography {
            raw_dir: dir,
            geography,
        });
    }

    if resolved.is_empty() {
        return Err(ExplorerError::EmptyResults {
            root: root.to_path_buf(),
        });
    }
    Ok(resolved)
}
