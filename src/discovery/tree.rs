//! Builds the per-geography search tree of candidate artifacts.

use crate::core::errors::{ExplorerError, Result};
use crate::core::{ResolvedGeography, SearchBranch, SearchTree};
use glob::glob;
use std::path::{Path, PathBuf};

const DOUBLE_SUFFIX: &str = "*double_candidates";
const ANACHRON_SUFFIX: &str = "*metadata_candidates";
const HIGHDIST_SUFFIX: &str = "*high_distance_clusters";
const EARLY_STATS_SUFFIX: &str = "*early_stats.tsv";
const LATE_STATS_SUFFIX: &str = "*late_stats.tsv";

/// Glob `dir` for entries ending in `suffix` and return the lexically first
/// match, or `None` when nothing matches. Sorting keeps repeated runs over
/// the same tree deterministic.
fn first_match(dir: &Path, suffix: &str) -> Result<Option<PathBuf>> {
    let pattern = dir.join(suffix);
    let pattern = pattern.to_str().ok_or_else(|| {
        ExplorerError::search(dir, "directory path is not valid UTF-8")
    })?;

    let mut matches = Vec::new();
    for entry in glob(pattern)? {
        let path = entry
            .map_err(|e| ExplorerError::search(dir, e.to_string()))?;
        matches.push(path);
    }
    matches.sort();
    Ok(matches.into_iter().next())
}

/// Run the five artifact searches for one geography directory.
pub fn build_branch(resolved: &ResolvedGeography) -> Result<SearchBranch> {
    let dir = &resolved.raw_dir;
    Ok(SearchBranch {
        parent_dir: dir.clone(),
        geography: resolved.geography.clone(),
        double: first_match(dir, DOUBLE_SUFFIX)?,
        anachron: first_match(dir, ANACHRON_SUFFIX)?,
        highdist: first_match(dir, HIGHDIST_SUFFIX)?,
        early_stats: first_match(dir, EARLY_STATS_SUFFIX)?,
        late_stats: first_match(dir, LATE_STATS_SUFFIX)?,
    })
}

/// Build the full search tree, one branch per resolved geography, preserving
/// the resolver's ordering.
pub fn build_search_tree(geographies: &[ResolvedGeography]) -> Result<SearchTree> {
    let mut branches = Vec::with_capacity(geographies.len());
    for resolved in geographies {
        branches.push(build_branch(resolved)?);
    }
    Ok(SearchTree::new(branches))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn resolved(dir: &Path) -> ResolvedGeography {
        ResolvedGeography {
            raw_dir: dir.to_path_buf(),
            geography: "Test".to_string(),
        }
    }

    #[test]
    fn missing_artifacts_become_none() {
        let dir = TempDir::new().unwrap();
        let branch = build_branch(&resolved(dir.path())).unwrap();
        assert_eq!(branch.double, None);
        assert_eq!(branch.anachron, None);
        assert_eq!(branch.highdist, None);
        assert_eq!(branch.early_stats, None);
        assert_eq!(branch.late_stats, None);
    }

    #[test]
    fn finds_each_artifact_kind() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("run1_double_candidates")).unwrap();
        fs::create_dir(dir.path().join("run1_metadata_candidates")).unwrap();
        fs::create_dir(dir.path().join("run1_high_distance_clusters")).unwrap();
        fs::write(dir.path().join("run1_early_stats.tsv"), "num_seqs\n0\n").unwrap();
        fs::write(dir.path().join("run1_late_stats.tsv"), "num_seqs\n0\n").unwrap();

        let branch = build_branch(&resolved(dir.path())).unwrap();
        assert!(branch.double.is_some());
        assert!(branch.anachron.is_some());
        assert!(branch.highdist.is_some());
        assert!(branch.early_stats.is_some());
        assert!(branch.late_stats.is_some());
    }

    #[test]
    fn multiple_matches_pick_the_lexically_first() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("b_double_candidates")).unwrap();
        fs::create_dir(dir.path().join("a_double_candidates")).unwrap();
        let branch = build_branch(&resolved(dir.path())).unwrap();
        assert_eq!(
            branch.double,
            Some(dir.path().join("a_double_candidates"))
        );
    }

    #[test]
    fn tree_preserves_input_order() {
        let dir_a = TempDir::new().unwrap();
        let dir_b = TempDir::new().unwrap();
        let geographies = vec![
            ResolvedGeography {
                raw_dir: dir_b.path().to_path_buf(),
                geography: "Second First".to_string(),
            },
            ResolvedGeography {
                raw_dir: dir_a.path().to_path_buf(),
                geography: "First Second".to_string(),
            },
        ];
        let tree = build_search_tree(&geographies).unwrap();
        let order: Vec<&str> = tree.iter().map(|b| b.geography.as_str()).collect();
        assert_eq!(order, vec!["Second First", "First Second"]);
    }
}
