//! Rendering of per-key deltas as report lines.
//!
//! Two renderers share the `DeltaRecord` input: a space-separated plain
//! listing for single-feed reports and a headered CSV for dual-feed reports.

use std::io::Write;

use csv::{QuoteStyle, WriterBuilder};

use crate::{DeltaError, DeltaResult};

/// CSV column headers for dual-feed reports, in output order.
pub const CSV_HEADERS: &[&str] = &["function", "type", "size", "delta"];

/// One reportable delta, derived from a key present in both competitors.
///
/// The delta is pre-rendered to a two-decimal fraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeltaRecord {
    pub function: String,
    pub variant_type: String,
    pub size: String,
    pub delta: String,
}

/// Write space-separated report lines, one per record, no header.
pub fn render_plain<W: Write>(records: &[DeltaRecord], mut writer: W) -> DeltaResult<()> {
    for record in records {
        writeln!(
            writer,
            "{} {} {} {}",
            record.function, record.variant_type, record.size, record.delta
        )
        .map_err(|e| DeltaError::Message(format!("failed to write report line: {e}")))?;
    }
    Ok(())
}

/// Write the CSV report: header row, then one comma-separated line per record.
///
/// Quoting is disabled; a field containing the delimiter yields a malformed
/// line rather than an escaped one.
pub fn render_csv<W: Write>(records: &[DeltaRecord], writer: W) -> DeltaResult<()> {
    let mut csv_writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .from_writer(writer);

    csv_writer
        .write_record(CSV_HEADERS)
        .map_err(|e| DeltaError::Message(format!("failed to write CSV header: {e}")))?;

    for record in records {
        csv_writer
            .write_record([
                record.function.as_str(),
                record.variant_type.as_str(),
                record.size.as_str(),
                record.delta.as_str(),
            ])
            .map_err(|e| DeltaError::Message(format!("failed to write CSV row: {e}")))?;
    }

    csv_writer
        .flush()
        .map_err(|e| DeltaError::Message(format!("failed to flush CSV writer: {e}")))?;

    Ok(())
}
