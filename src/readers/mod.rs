//! Readers for the per-geography source files.
//!
//! Every reader takes the optional path from a `SearchBranch` slot and
//! returns `Ok(None)` when the slot is empty. A missing source is not a
//! count of zero; the distinction survives into the statistics table.

use crate::core::errors::{ExplorerError, Result};
use csv::ReaderBuilder;
use std::path::Path;

fn tsv_reader(path: &Path) -> Result<csv::Reader<std::fs::File>> {
    Ok(ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .from_path(path)?)
}

/// Read the `num_seqs` value from the first data row of a seqkit stats TSV.
fn read_num_seqs(path: &Path) -> Result<i64> {
    let mut reader = tsv_reader(path)?;
    let headers = reader.headers()?.clone();
    let column = headers
        .iter()
        .position(|h| h == "num_seqs")
        .ok_or_else(|| ExplorerError::malformed_stats(path, "no 'num_seqs' column"))?;

    let mut records = reader.records();
    let record = records
        .next()
        .ok_or_else(|| ExplorerError::malformed_stats(path, "no data rows"))??;
    let field = record
        .get(column)
        .ok_or_else(|| ExplorerError::malformed_stats(path, "first row is short"))?;
    // seqkit writes counts with thousands separators when not told otherwise
    let cleaned: String = field.chars().filter(|c| *c != ',').collect();
    cleaned.trim().parse::<i64>().map_err(|_| {
        ExplorerError::malformed_stats(path, format!("'{field}' is not an integer count"))
    })
}

/// Count the data rows of the fixed-name metadata file inside `dir`.
fn count_metadata_rows(dir: &Path, filename: &str) -> Result<i64> {
    let path = dir.join(filename);
    if !path.is_file() {
        return Err(ExplorerError::MissingMetadataFile {
            dir: dir.to_path_buf(),
            filename: filename.to_string(),
        });
    }
    let mut reader = tsv_reader(&path)?;
    let mut count: i64 = 0;
    for record in reader.records() {
        record?;
        count += 1;
    }
    Ok(count)
}

/// Sequence count entering the run, from the early stats TSV.
pub fn read_early_count(path: Option<&Path>) -> Result<Option<i64>> {
    path.map(read_num_seqs).transpose()
}

/// Sequence count surviving the run, from the late stats TSV.
pub fn read_late_count(path: Option<&Path>) -> Result<Option<i64>> {
    path.map(read_num_seqs).transpose()
}

/// Number of anachronistic candidates flagged for a geography.
pub fn read_anachronistic_count(dir: Option<&Path>) -> Result<Option<i64>> {
    dir.map(|d| count_metadata_rows(d, "anachronistic_metadata_only_candidates.tsv"))
        .transpose()
}

/// Number of high-distance candidates flagged for a geography.
pub fn read_high_distance_count(dir: Option<&Path>) -> Result<Option<i64>> {
    dir.map(|d| count_metadata_rows(d, "high_distance_candidates.tsv"))
        .transpose()
}
