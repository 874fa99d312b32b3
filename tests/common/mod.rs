// Test utility module for alpine-explorer integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Create a geography subdirectory under the results root.
pub fn add_geography(root: &Path, dir_name: &str) -> PathBuf {
    let dir = root.join(dir_name);
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Write a seqkit-style early stats TSV reporting `num_seqs` input sequences.
pub fn write_early_stats(geography_dir: &Path, num_seqs: i64) {
    fs::write(
        geography_dir.join("run_early_stats.tsv"),
        format!("file\tformat\ttype\tnum_seqs\nall.fasta\tFASTA\tDNA\t{num_seqs}\n"),
    )
    .unwrap();
}

/// Write a late stats TSV reporting `num_seqs` double candidates.
pub fn write_late_stats(geography_dir: &Path, num_seqs: i64) {
    fs::write(
        geography_dir.join("run_late_stats.tsv"),
        format!("file\tformat\ttype\tnum_seqs\ndoubles.fasta\tFASTA\tDNA\t{num_seqs}\n"),
    )
    .unwrap();
}

fn write_candidate_dir(
    geography_dir: &Path,
    dir_suffix: &str,
    filename: &str,
    header: &str,
    rows: &[&str],
) -> PathBuf {
    let dir = geography_dir.join(format!("run_{dir_suffix}"));
    fs::create_dir_all(&dir).unwrap();
    let mut content = String::from(header);
    content.push('\n');
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    fs::write(dir.join(filename), content).unwrap();
    dir
}

/// Populate an anachronistic candidates directory with the given TSV rows.
pub fn write_anachronistic(geography_dir: &Path, header: &str, rows: &[&str]) -> PathBuf {
    write_candidate_dir(
        geography_dir,
        "metadata_candidates",
        "anachronistic_metadata_only_candidates.tsv",
        header,
        rows,
    )
}

/// Populate a high-distance candidates directory with the given TSV rows.
pub fn write_high_distance(geography_dir: &Path, header: &str, rows: &[&str]) -> PathBuf {
    write_candidate_dir(
        geography_dir,
        "high_distance_clusters",
        "high_distance_candidates.tsv",
        header,
        rows,
    )
}

/// Populate a double candidates directory with the given TSV rows.
pub fn write_double(geography_dir: &Path, header: &str, rows: &[&str]) -> PathBuf {
    write_candidate_dir(
        geography_dir,
        "double_candidates",
        "double_candidate_metadata.tsv",
        header,
        rows,
    )
}

/// Point artifact output at `output_dir` via the root's config file.
pub fn write_config(root: &Path, output_dir: &Path) {
    fs::write(
        root.join("alpine-explorer.toml"),
        format!("output_dir = \"{}\"\n", output_dir.display()),
    )
    .unwrap();
}
