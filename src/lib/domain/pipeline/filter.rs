use crate::domain::filter::{EMAIL_COLUMN, RowFilter};
use crate::domain::pipeline::summary::{FilterSummary, log_preview};
use crate::inbound::file::Reader;
use crate::outbound::file::Writer;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

const PREVIEW_ROWS: usize = 5;

/// Loads a spreadsheet, keeps rows in the target countries with business
/// emails, and writes them out. With `dry_run` the output file is not written.
pub fn run_filter(
    input: &Path,
    output: &Path,
    row_filter: &RowFilter,
    dry_run: bool,
) -> anyhow::Result<FilterSummary> {
    let start = Instant::now();
    info!("Loading spreadsheet from {}", input.display());
    let mut table = Reader::read_table(input)?;
    info!("Columns in the spreadsheet: [{}]", table.headers().join(", "));
    table.normalize_headers();
    info!("Normalized column names: [{}]", table.headers().join(", "));
    log_preview("Loaded rows", &table, PREVIEW_ROWS);

    info!(
        "Filtering for countries {:?} and business emails",
        row_filter.countries.targets()
    );
    let stats = row_filter.apply(&mut table)?;
    log_preview("Filtered rows", &table, PREVIEW_ROWS);

    let email_idx = table.column_index(EMAIL_COLUMN)?;
    for email in table.column_values(email_idx) {
        debug!("business email: {}", email);
    }

    if dry_run {
        info!("Dry run: not writing {}", output.display());
    } else {
        Writer::write_table(output, &table)?;
    }

    Ok(FilterSummary {
        rows_loaded: stats.rows_in,
        country_matched: stats.country_matched,
        business_emails: stats.business_emails,
        runtime_secs: start.elapsed().as_secs_f64(),
    })
}
