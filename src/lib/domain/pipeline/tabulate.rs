use crate::domain::models::Table;
use crate::domain::pipeline::summary::{TabulateSummary, format_number, log_preview};
use crate::inbound::file::{Reader, Text};
use crate::outbound::file::Writer;
use std::path::Path;
use std::time::Instant;
use tracing::info;

const PREVIEW_ROWS: usize = 5;

/// Parses a delimited text dump and writes its valid records to a spreadsheet.
/// With `dry_run` the output file is not written.
pub fn run_tabulate(input: &Path, output: &Path, dry_run: bool) -> anyhow::Result<TabulateSummary> {
    let start = Instant::now();
    info!("Reading records from {}", input.display());
    let ingest = Reader::read_text_records(input)?;
    info!(
        "Parsed {} valid records from {} lines",
        format_number(ingest.records.len()),
        format_number(ingest.lines_read)
    );

    let table = Table::from_records(&ingest.records);
    log_preview("Records", &table, PREVIEW_ROWS);

    if dry_run {
        info!("Dry run: not writing {}", output.display());
    } else {
        Writer::write_table(output, &table)?;
    }

    Ok(TabulateSummary {
        lines_read: ingest.lines_read,
        blank_lines: ingest.blank_lines,
        records_written: table.len(),
        rejected_lines: ingest.rejected.len(),
        runtime_secs: start.elapsed().as_secs_f64(),
    })
}
