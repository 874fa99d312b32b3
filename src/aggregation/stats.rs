//! Compiles the per-geography run-statistics table.

use crate::core::errors::{ExplorerError, Result};
use crate::core::{SearchBranch, SearchTree, StatsRow};
use crate::readers;

/// Rendered when a category was searched but produced zero candidates;
/// the "1 in N" form has no finite N for a prevalence of exactly zero.
pub const ZERO_RATE_SENTINEL: &str = "1 in ∞";

/// Percentage of `input` sequences flagged as `count`. `None` when either
/// side is unknown or the denominator is zero.
fn prevalence(count: Option<i64>, input: Option<i64>) -> Option<f64> {
    match (count, input) {
        (Some(count), Some(input)) if input > 0 => {
            Some(100.0 * count as f64 / input as f64)
        }
        _ => None,
    }
}

/// Format a prevalence as a "1 in N" odds string.
fn rate(prevalence: Option<f64>) -> Option<String> {
    let p = prevalence?;
    if p == 0.0 {
        return Some(ZERO_RATE_SENTINEL.to_string());
    }
    // The epsilon keeps e.g. 0.1% from flooring to 999 when the quotient
    // lands one ulp under 1000.
    let n = ((100.0 / p) + 1e-9).floor() as i64;
    Some(format!("1 in {n}"))
}

/// Unwrap a reader result, degrading failure to `None` with a warning.
/// Per-geography source problems never abort the whole run.
fn field_or_null(
    result: Result<Option<i64>>,
    geography: &str,
    what: &str,
) -> Option<i64> {
    match result {
        Ok(value) => value,
        Err(e) => {
            log::warn!("skipping {what} for '{geography}': {e}");
            None
        }
    }
}

fn compile_row(branch: &SearchBranch) -> StatsRow {
    let geography = branch.geography.as_str();

    let input_sequences = field_or_null(
        readers::read_early_count(branch.early_stats.as_deref()),
        geography,
        "input sequence count",
    );
    let double_count = field_or_null(
        readers::read_late_count(branch.late_stats.as_deref()),
        geography,
        "double candidate count",
    );
    let anachron_count = field_or_null(
        readers::read_anachronistic_count(branch.anachron.as_deref()),
        geography,
        "anachronistic count",
    );
    let highdist_count = field_or_null(
        readers::read_high_distance_count(branch.highdist.as_deref()),
        geography,
        "high distance count",
    );

    let double_prevalence = prevalence(double_count, input_sequences);
    let anachron_prevalence = prevalence(anachron_count, input_sequences);
    let highdist_prevalence = prevalence(highdist_count, input_sequences);

    StatsRow {
        geography: branch.geography.clone(),
        input_sequences,
        double_count,
        double_prevalence,
        double_rate: rate(double_prevalence),
        anachron_count,
        anachron_prevalence,
        anachron_rate: rate(anachron_prevalence),
        highdist_count,
        highdist_prevalence,
        highdist_rate: rate(highdist_prevalence),
    }
}

/// Build one `StatsRow` per geography, in tree order.
pub fn compile_statistics(tree: &SearchTree) -> Result<Vec<StatsRow>> {
    let rows: Vec<StatsRow> = tree.iter().map(compile_row).collect();
    if rows.is_empty() {
        return Err(ExplorerError::EmptyAggregation);
    }
    Ok(rows)
}

/// Convenience used by tests and the orchestrator for log lines.
pub fn describe_row(row: &StatsRow) -> String {
    format!(
        "{}: input={} double={} anachronistic={} high-distance={}",
        row.geography,
        fmt_count(row.input_sequences),
        fmt_count(row.double_count),
        fmt_count(row.anachron_count),
        fmt_count(row.highdist_count),
    )
}

fn fmt_count(count: Option<i64>) -> String {
    count.map_or_else(|| "?".to_string(), |c| c.to_string())
}
