use crate::aggregation::{compile_metadata, compile_statistics, stats};
use crate::config::ExplorerConfig;
use crate::core::MetadataCategory;
use crate::discovery::{build_search_tree, resolve_geographies};
use crate::io::writers::spreadsheet;
use anyhow::{bail, Context, Result};
use chrono::Utc;
use std::fs;
use std::path::PathBuf;

/// Filename of the statistics workbook, written into the output directory
pub const STATS_WORKBOOK: &str = "alpine_run_statistics.xlsx";

pub struct SummarizeOptions {
    pub results_dir: PathBuf,
}

pub fn run(opts: SummarizeOptions) -> Result<()> {
    let root = &opts.results_dir;
    if !root.is_dir() {
        bail!(
            "provided path '{}' does not exist or is not a directory",
            root.display()
        );
    }

    log::info!(
        "summarizing results in '{}' ({})",
        root.display(),
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    );

    let config = ExplorerConfig::load(root).context("unable to load run configuration")?;
    fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "unable to create output directory '{}'",
            config.output_dir.display()
        )
    })?;

    let geographies =
        resolve_geographies(root).context("error originated while constructing file paths")?;
    log::info!("resolved {} geographies", geographies.len());

    let tree = build_search_tree(&geographies)
        .context("unable to search through provided results directories")?;

    let rows = compile_statistics(&tree).context("compiling statistics failed")?;
    for row in &rows {
        log::debug!("{}", stats::describe_row(row));
    }

    let workbook = config.output_dir.join(STATS_WORKBOOK);
    spreadsheet::write_statistics(&rows, &workbook)
        .context("writing the statistics workbook failed")?;
    log::info!("wrote statistics workbook to '{}'", workbook.display());

    let compiled = compile_metadata(&tree, &config)
        .context("error encountered while compiling metadata for candidates")?;

    let produced: Vec<&str> = MetadataCategory::ALL
        .iter()
        .filter(|category| compiled.slot(**category).is_some())
        .map(|category| category.label())
        .collect();
    if produced.is_empty() {
        log::info!("run complete: {} geographies, no metadata artifacts", rows.len());
    } else {
        log::info!(
            "run complete: {} geographies, metadata artifacts for {}",
            rows.len(),
            produced.join(", ")
        );
    }

    Ok(())
}
