//! End-to-end tests for the summarize command over synthetic results trees.

mod common;

use alpine_explorer::commands::{run, SummarizeOptions};
use alpine_explorer::{
    build_search_tree, compile_statistics, resolve_geographies,
};
use tempfile::TempDir;

#[test]
fn summarize_writes_workbook_and_metadata_artifacts() {
    let root = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    common::write_config(root.path(), out.path());

    let switzerland = common::add_geography(root.path(), "GISAID_Switzerland");
    common::write_early_stats(&switzerland, 1000);
    common::write_late_stats(&switzerland, 5);
    common::write_anachronistic(&switzerland, "Accession\tDate", &["EPI_1\t2021-01-02"]);
    common::write_high_distance(&switzerland, "Accession\tDistance", &[]);
    common::write_double(
        &switzerland,
        "Accession\tDate",
        &["EPI_2\t2021-02-03", "EPI_3\t2021-02-04"],
    );

    common::add_geography(root.path(), "GenBank_Upper_Austria");

    run(SummarizeOptions {
        results_dir: root.path().to_path_buf(),
    })
    .unwrap();

    assert!(out.path().join("alpine_run_statistics.xlsx").is_file());
    assert!(out.path().join("anachronistics-meta.arrow").is_file());
    assert!(out.path().join("double-meta.arrow").is_file());
    // header-only high-distance source still counts as a contributor
    assert!(out.path().join("highdist-meta.arrow").is_file());
}

#[test]
fn statistics_rows_follow_the_derivation_rules() {
    let root = TempDir::new().unwrap();

    let switzerland = common::add_geography(root.path(), "GISAID_Switzerland");
    common::write_early_stats(&switzerland, 1000);
    common::write_late_stats(&switzerland, 5);
    common::write_anachronistic(&switzerland, "Accession", &["EPI_1"]);
    common::write_high_distance(&switzerland, "Accession", &[]);

    // Austria has a directory but no recognizable artifacts
    common::add_geography(root.path(), "GenBank_Upper_Austria");

    let geographies = resolve_geographies(root.path()).unwrap();
    let tree = build_search_tree(&geographies).unwrap();
    let rows = compile_statistics(&tree).unwrap();
    assert_eq!(rows.len(), 2);

    let ch = rows
        .iter()
        .find(|r| r.geography == "Switzerland")
        .unwrap();
    assert_eq!(ch.input_sequences, Some(1000));
    assert_eq!(ch.double_count, Some(5));
    assert_eq!(ch.double_prevalence, Some(0.5));
    assert_eq!(ch.double_rate.as_deref(), Some("1 in 200"));
    assert_eq!(ch.anachron_count, Some(1));
    assert_eq!(ch.anachron_rate.as_deref(), Some("1 in 1000"));
    assert_eq!(ch.highdist_count, Some(0));
    assert_eq!(ch.highdist_prevalence, Some(0.0));
    assert_eq!(ch.highdist_rate.as_deref(), Some("1 in ∞"));

    let at = rows
        .iter()
        .find(|r| r.geography == "Upper Austria")
        .unwrap();
    assert_eq!(at.input_sequences, None);
    assert_eq!(at.double_count, None);
    assert_eq!(at.double_prevalence, None);
    assert_eq!(at.double_rate, None);
    assert_eq!(at.anachron_count, None);
    assert_eq!(at.highdist_count, None);
}

#[test]
fn summarize_fails_on_an_empty_results_root() {
    let root = TempDir::new().unwrap();
    let err = run(SummarizeOptions {
        results_dir: root.path().to_path_buf(),
    })
    .unwrap_err();
    let rendered = format!("{err:#}");
    assert!(rendered.contains("constructing file paths"), "{rendered}");
    assert!(rendered.contains("no result subdirectories"), "{rendered}");
}

#[test]
fn summarize_fails_on_a_missing_root() {
    let err = run(SummarizeOptions {
        results_dir: std::path::PathBuf::from("/definitely/not/a/real/path"),
    })
    .unwrap_err();
    assert!(err
        .to_string()
        .contains("does not exist or is not a directory"));
}
