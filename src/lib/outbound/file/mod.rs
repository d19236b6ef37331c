pub mod csv;
pub mod xlsx;

pub use self::csv::CsvWriter;
pub use xlsx::Xlsx;

use crate::domain::models::Table;
use crate::inbound::file::{extension_of, file_name_of};
use std::path::Path;
use tracing::info;

pub struct Writer;

impl Writer {
    /// Writes `table` to `path`, choosing the format from the file extension.
    pub fn write_table(path: &Path, table: &Table) -> anyhow::Result<()> {
        let ext = extension_of(path);
        match ext.as_str() {
            "xlsx" => <Writer as Xlsx>::write_xlsx_table(path, table)?,
            "csv" => <Writer as CsvWriter>::write_csv_table(path, table)?,
            _ => anyhow::bail!(
                "unsupported output file type '{}': {}",
                ext,
                file_name_of(path)
            ),
        }
        info!("Saved {} rows to {}", table.len(), path.display());
        Ok(())
    }
}
