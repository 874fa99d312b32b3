//! Consolidates per-geography candidate metadata into columnar artifacts.
//!
//! Each category is processed independently: a header-union pass over the
//! contributing files, a staging pass that streams every row (tagged with
//! its geography) into one temporary TSV, and a materialization pass that
//! turns the staging file into a compressed Arrow IPC artifact.

use crate::config::ExplorerConfig;
use crate::core::errors::Result;
use crate::core::{CompiledMetadata, MetadataCategory, SearchTree};
use crate::io::writers::arrow;
use csv::{ReaderBuilder, WriterBuilder};
use std::fs::File;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

struct Contributor {
    geography: String,
    source: PathBuf,
    headers: Vec<String>,
}

fn tsv_reader(path: &Path) -> Result<csv::Reader<File>> {
    Ok(ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .from_path(path)?)
}

/// Find the geographies contributing to `category` and capture their
/// headers. Sources whose header cannot be read are skipped with a warning
/// so one bad file never sinks the whole category.
fn collect_contributors(tree: &SearchTree, category: MetadataCategory) -> Vec<Contributor> {
    let mut contributors = Vec::new();
    for branch in tree {
        let Some(dir) = category.branch_dir(branch) else {
            continue;
        };
        let source = dir.join(category.source_filename());
        if !source.is_file() {
            continue;
        }
        let headers = match tsv_reader(&source).and_then(|mut r| {
            let h = r.headers()?.clone();
            Ok(h.iter().map(str::to_string).collect::<Vec<_>>())
        }) {
            Ok(headers) => headers,
            Err(e) => {
                log::warn!(
                    "skipping {} metadata for '{}': {e}",
                    category.label(),
                    branch.geography
                );
                continue;
            }
        };
        contributors.push(Contributor {
            geography: branch.geography.clone(),
            source,
            headers,
        });
    }
    contributors
}

/// Union of contributor columns: `Geography` first, then each contributor's
/// columns in encounter order.
fn union_columns(contributors: &[Contributor]) -> Vec<String> {
    let mut union: Vec<String> = vec!["Geography".to_string()];
    for contributor in contributors {
        for column in &contributor.headers {
            if !union.iter().any(|existing| existing == column) {
                union.push(column.clone());
            }
        }
    }
    union
}

/// Stream every contributor into one staging TSV in union column order.
/// The geography tag occupies the `Geography` column, overriding any
/// same-named source column; columns a source lacks are left empty.
fn stage_category(
    contributors: &[Contributor],
    union: &[String],
    staging: &Path,
    category: MetadataCategory,
) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .delimiter(b'\t')
        .from_path(staging)?;
    writer.write_record(union)?;

    for contributor in contributors {
        // source column position per union column; None fills empty
        let mapping: Vec<Option<usize>> = union
            .iter()
            .skip(1)
            .map(|column| {
                contributor
                    .headers
                    .iter()
                    .position(|header| header == column)
            })
            .collect();

        let mut reader = match tsv_reader(&contributor.source) {
            Ok(reader) => reader,
            Err(e) => {
                log::warn!(
                    "skipping {} metadata for '{}': {e}",
                    category.label(),
                    contributor.geography
                );
                continue;
            }
        };

        let mut staged = 0usize;
        for record in reader.records() {
            let record = match record {
                Ok(record) => record,
                Err(e) => {
                    log::warn!(
                        "truncating {} metadata for '{}' after {staged} rows: {e}",
                        category.label(),
                        contributor.geography
                    );
                    break;
                }
            };
            let mut row: Vec<&str> = Vec::with_capacity(union.len());
            row.push(contributor.geography.as_str());
            for slot in &mapping {
                row.push(slot.and_then(|index| record.get(index)).unwrap_or(""));
            }
            writer.write_record(&row)?;
            staged += 1;
        }
        log::debug!(
            "staged {staged} {} rows from '{}'",
            category.label(),
            contributor.geography
        );
    }

    writer.flush()?;
    Ok(())
}

fn compile_category(
    tree: &SearchTree,
    category: MetadataCategory,
    config: &ExplorerConfig,
) -> Result<Option<PathBuf>> {
    let contributors = collect_contributors(tree, category);
    if contributors.is_empty() {
        log::info!("no {} metadata found in any geography", category.label());
        return Ok(None);
    }

    let union = union_columns(&contributors);
    let scratch = TempDir::new()?;
    let staging = scratch.path().join("staging.tsv");
    stage_category(&contributors, &union, &staging, category)?;

    let output = config.output_dir.join(category.artifact_name());
    arrow::materialize(&staging, &output, config.infer_schema_rows)?;
    log::info!(
        "consolidated {} metadata from {} geographies into '{}'",
        category.label(),
        contributors.len(),
        output.display()
    );
    Ok(Some(output))
}

/// Consolidate all three metadata categories. A category with zero
/// contributors produces no artifact; that slot stays `None`.
pub fn compile_metadata(tree: &SearchTree, config: &ExplorerConfig) -> Result<CompiledMetadata> {
    let mut compiled = CompiledMetadata::default();
    for category in MetadataCategory::ALL {
        *compiled.slot_mut(category) = compile_category(tree, category, config)?;
    }
    Ok(compiled)
}
