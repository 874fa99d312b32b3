//! Materializes a staged TSV as a zstd-compressed Arrow IPC file.
//!
//! Column types are inferred from a bounded row lookahead rather than the
//! whole file, so materialization streams in constant memory regardless of
//! how many rows the staging pass accumulated.

use crate::core::errors::Result;
use arrow::array::{ArrayRef, Float64Builder, Int64Builder, StringBuilder};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::ipc::writer::{FileWriter, IpcWriteOptions};
use arrow::ipc::CompressionType;
use arrow::record_batch::RecordBatch;
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;
use std::sync::Arc;

/// Rows per IPC record batch
const BATCH_ROWS: usize = 1024;

/// Narrowest-to-widest column classification used during inference
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ColumnKind {
    Int,
    Float,
    Utf8,
}

impl ColumnKind {
    fn of(field: &str) -> ColumnKind {
        if field.parse::<i64>().is_ok() {
            ColumnKind::Int
        } else if field.parse::<f64>().is_ok() {
            ColumnKind::Float
        } else {
            ColumnKind::Utf8
        }
    }

    fn widen(self, other: ColumnKind) -> ColumnKind {
        use ColumnKind::*;
        match (self, other) {
            (Int, Int) => Int,
            (Utf8, _) | (_, Utf8) => Utf8,
            _ => Float,
        }
    }

    fn data_type(self) -> DataType {
        match self {
            ColumnKind::Int => DataType::Int64,
            ColumnKind::Float => DataType::Float64,
            ColumnKind::Utf8 => DataType::Utf8,
        }
    }
}

enum ColumnBuilder {
    Int(Int64Builder),
    Float(Float64Builder),
    Utf8(StringBuilder),
}

impl ColumnBuilder {
    fn new(kind: ColumnKind) -> ColumnBuilder {
        match kind {
            ColumnKind::Int => ColumnBuilder::Int(Int64Builder::new()),
            ColumnKind::Float => ColumnBuilder::Float(Float64Builder::new()),
            ColumnKind::Utf8 => ColumnBuilder::Utf8(StringBuilder::new()),
        }
    }

    /// Append one raw TSV field. Empty fields are nulls; fields that stop
    /// parsing after the inference window degrade to null instead of
    /// aborting the run.
    fn append(&mut self, field: &str) {
        match self {
            ColumnBuilder::Int(b) => match field.parse::<i64>() {
                Ok(v) if !field.is_empty() => b.append_value(v),
                _ => b.append_null(),
            },
            ColumnBuilder::Float(b) => match field.parse::<f64>() {
                Ok(v) if !field.is_empty() => b.append_value(v),
                _ => b.append_null(),
            },
            ColumnBuilder::Utf8(b) => {
                if field.is_empty() {
                    b.append_null();
                } else {
                    b.append_value(field);
                }
            }
        }
    }

    fn finish(&mut self) -> ArrayRef {
        match self {
            ColumnBuilder::Int(b) => Arc::new(b.finish()),
            ColumnBuilder::Float(b) => Arc::new(b.finish()),
            ColumnBuilder::Utf8(b) => Arc::new(b.finish()),
        }
    }
}

fn tsv_reader(path: &Path) -> Result<csv::Reader<File>> {
    Ok(ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .from_path(path)?)
}

/// Scan up to `lookahead` data rows and classify every column. Columns that
/// never show a non-empty value within the window fall back to `Utf8`.
fn infer_column_kinds(path: &Path, columns: usize, lookahead: usize) -> Result<Vec<ColumnKind>> {
    let mut reader = tsv_reader(path)?;
    let mut kinds: Vec<Option<ColumnKind>> = vec![None; columns];

    for record in reader.records().take(lookahead) {
        let record = record?;
        for (index, kind) in kinds.iter_mut().enumerate() {
            let field = record.get(index).unwrap_or("");
            if field.is_empty() {
                continue;
            }
            let observed = ColumnKind::of(field);
            *kind = Some(match kind {
                Some(existing) => existing.widen(observed),
                None => observed,
            });
        }
    }

    Ok(kinds
        .into_iter()
        .map(|k| k.unwrap_or(ColumnKind::Utf8))
        .collect())
}

/// Stream `staging` (a headered TSV) into a zstd-compressed Arrow IPC file
/// at `output`, inferring the schema from the first `lookahead` rows.
pub fn materialize(staging: &Path, output: &Path, lookahead: usize) -> Result<()> {
    let header = tsv_reader(staging)?.headers()?.clone();
    let names: Vec<String> = header.iter().map(str::to_string).collect();
    let kinds = infer_column_kinds(staging, names.len(), lookahead)?;

    let fields: Vec<Field> = names
        .iter()
        .zip(kinds.iter())
        .map(|(name, kind)| Field::new(name, kind.data_type(), true))
        .collect();
    let schema = Arc::new(Schema::new(fields));

    let options =
        IpcWriteOptions::default().try_with_compression(Some(CompressionType::ZSTD))?;
    let sink = File::create(output)?;
    let mut writer = FileWriter::try_new_with_options(sink, &schema, options)?;

    let mut reader = tsv_reader(staging)?;
    let mut builders: Vec<ColumnBuilder> =
        kinds.iter().map(|kind| ColumnBuilder::new(*kind)).collect();
    let mut pending = 0usize;

    for record in reader.records() {
        let record = record?;
        for (index, builder) in builders.iter_mut().enumerate() {
            builder.append(record.get(index).unwrap_or(""));
        }
        pending += 1;
        if pending == BATCH_ROWS {
            flush_batch(&mut writer, &schema, &mut builders)?;
            pending = 0;
        }
    }
    if pending > 0 {
        flush_batch(&mut writer, &schema, &mut builders)?;
    }

    writer.finish()?;
    Ok(())
}

fn flush_batch(
    writer: &mut FileWriter<File>,
    schema: &Arc<Schema>,
    builders: &mut [ColumnBuilder],
) -> Result<()> {
    let arrays: Vec<ArrayRef> = builders.iter_mut().map(|b| b.finish()).collect();
    let batch = RecordBatch::try_new(schema.clone(), arrays)?;
    writer.write(&batch)?;
    Ok(())
}
