//! Writes the run-statistics table as an xlsx workbook.

use crate::core::errors::Result;
use crate::core::StatsRow;
use rust_xlsxwriter::Workbook;
use std::path::Path;

/// Column headers, in the order downstream consumers expect
pub const STATS_COLUMNS: [&str; 11] = [
    "Geography",
    "Input Sequence Count",
    "Double Candidate Count",
    "Double Candidate Prevalence (%)",
    "Double Candidate Rate",
    "Anachronistic Count",
    "Anachronistic Prevalence (%)",
    "Anachronistic Rate",
    "High Distance Count",
    "High Distance Prevalence (%)",
    "High Distance Rate",
];

/// Write `rows` to a single worksheet at `path`. Unknown values stay blank
/// rather than rendering as zero.
pub fn write_statistics(rows: &[StatsRow], path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in STATS_COLUMNS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }

    for (index, stats) in rows.iter().enumerate() {
        let row = (index + 1) as u32;
        worksheet.write_string(row, 0, &stats.geography)?;
        write_count(worksheet, row, 1, stats.input_sequences)?;
        write_count(worksheet, row, 2, stats.double_count)?;
        write_prevalence(worksheet, row, 3, stats.double_prevalence)?;
        write_rate(worksheet, row, 4, stats.double_rate.as_deref())?;
        write_count(worksheet, row, 5, stats.anachron_count)?;
        write_prevalence(worksheet, row, 6, stats.anachron_prevalence)?;
        write_rate(worksheet, row, 7, stats.anachron_rate.as_deref())?;
        write_count(worksheet, row, 8, stats.highdist_count)?;
        write_prevalence(worksheet, row, 9, stats.highdist_prevalence)?;
        write_rate(worksheet, row, 10, stats.highdist_rate.as_deref())?;
    }

    worksheet.autofit();
    workbook.save(path)?;
    Ok(())
}

fn write_count(
    worksheet: &mut rust_xlsxwriter::Worksheet,
    row: u32,
    col: u16,
    value: Option<i64>,
) -> Result<()> {
    if let Some(value) = value {
        worksheet.write_number(row, col, value as f64)?;
    }
    Ok(())
}

fn write_prevalence(
    worksheet: &mut rust_xlsxwriter::Worksheet,
    row: u32,
    col: u16,
    value: Option<f64>,
) -> Result<()> {
    if let Some(value) = value {
        worksheet.write_number(row, col, value)?;
    }
    Ok(())
}

fn write_rate(
    worksheet: &mut rust_xlsxwriter::Worksheet,
    row: u32,
    col: u16,
    value: Option<&str>,
) -> Result<()> {
    if let Some(value) = value {
        worksheet.write_string(row, col, value)?;
    }
    Ok(())
}
