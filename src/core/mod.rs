pub mod errors;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use errors::{ExplorerError, Result};

/// A geography subdirectory paired with its display name.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolvedGeography {
    /// Directory under the results root, as found on disk
    pub raw_dir: PathBuf,
    /// Human-readable name after prefix stripping and underscore rewriting
    pub geography: String,
}

/// Discovered artifact paths for a single geography.
///
/// Each slot is `None` when the corresponding search produced no match;
/// absence is meaningful downstream and is never conflated with a zero count.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchBranch {
    pub parent_dir: PathBuf,
    pub geography: String,
    pub double: Option<PathBuf>,
    pub anachron: Option<PathBuf>,
    pub highdist: Option<PathBuf>,
    pub early_stats: Option<PathBuf>,
    pub late_stats: Option<PathBuf>,
}

/// The full discovery result: one branch per geography, in listing order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchTree {
    branches: Vec<SearchBranch>,
}

impl SearchTree {
    pub fn new(branches: Vec<SearchBranch>) -> Self {
        Self { branches }
    }

    pub fn iter(&self) -> impl Iterator<Item = &SearchBranch> {
        self.branches.iter()
    }

    pub fn len(&self) -> usize {
        self.branches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }
}

impl<'a> IntoIterator for &'a SearchTree {
    type Item = &'a SearchBranch;
    type IntoIter = std::slice::Iter<'a, SearchBranch>;

    fn into_iter(self) -> Self::IntoIter {
        self.branches.iter()
    }
}

/// One row of the run-statistics table.
///
/// Counts are `None` when the underlying source was absent or unreadable.
/// Rate columns are preformatted strings ("1 in N") because the zero-
/// prevalence sentinel is not a number.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StatsRow {
    pub geography: String,
    pub input_sequences: Option<i64>,
    pub double_count: Option<i64>,
    pub double_prevalence: Option<f64>,
    pub double_rate: Option<String>,
    pub anachron_count: Option<i64>,
    pub anachron_prevalence: Option<f64>,
    pub anachron_rate: Option<String>,
    pub highdist_count: Option<i64>,
    pub highdist_prevalence: Option<f64>,
    pub highdist_rate: Option<String>,
}

/// The three candidate-metadata categories that get consolidated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MetadataCategory {
    Anachronistic,
    HighDistance,
    Double,
}

impl MetadataCategory {
    pub const ALL: [MetadataCategory; 3] = [
        MetadataCategory::Anachronistic,
        MetadataCategory::HighDistance,
        MetadataCategory::Double,
    ];

    /// Directory slot in a `SearchBranch` that holds this category's candidates
    pub fn branch_dir(self, branch: &SearchBranch) -> Option<&PathBuf> {
        match self {
            MetadataCategory::Anachronistic => branch.anachron.as_ref(),
            MetadataCategory::HighDistance => branch.highdist.as_ref(),
            MetadataCategory::Double => branch.double.as_ref(),
        }
    }

    /// Fixed metadata filename expected inside a matched directory
    pub fn source_filename(self) -> &'static str {
        match self {
            MetadataCategory::Anachronistic => "anachronistic_metadata_only_candidates.tsv",
            MetadataCategory::HighDistance => "high_distance_candidates.tsv",
            MetadataCategory::Double => "double_candidate_metadata.tsv",
        }
    }

    /// Name of the consolidated artifact written to the output directory
    pub fn artifact_name(self) -> &'static str {
        match self {
            MetadataCategory::Anachronistic => "anachronistics-meta.arrow",
            MetadataCategory::HighDistance => "highdist-meta.arrow",
            MetadataCategory::Double => "double-meta.arrow",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MetadataCategory::Anachronistic => "anachronistic",
            MetadataCategory::HighDistance => "high distance",
            MetadataCategory::Double => "double candidate",
        }
    }
}

/// Paths of the consolidated metadata artifacts, one slot per category.
///
/// A `None` slot means the category had no contributing geographies and no
/// artifact was written.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompiledMetadata {
    pub anachron: Option<PathBuf>,
    pub highdist: Option<PathBuf>,
    pub double: Option<PathBuf>,
}

impl CompiledMetadata {
    pub fn slot_mut(&mut self, category: MetadataCategory) -> &mut Option<PathBuf> {
        match category {
            MetadataCategory::Anachronistic => &mut self.anachron,
            MetadataCategory::HighDistance => &mut self.highdist,
            MetadataCategory::Double => &mut self.double,
        }
    }

    pub fn slot(&self, category: MetadataCategory) -> Option<&PathBuf> {
        match category {
            MetadataCategory::Anachronistic => self.anachron.as_ref(),
            MetadataCategory::HighDistance => self.highdist.as_ref(),
            MetadataCategory::Double => self.double.as_ref(),
        }
    }
}
