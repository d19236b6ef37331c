use crate::domain::models::Table;
use crate::inbound::file::file_name_of;
use crate::outbound::file::Writer;
use anyhow::Context;
use std::path::Path;

pub trait CsvWriter {
    fn write_csv_table(path: &Path, table: &Table) -> anyhow::Result<()>;
}

impl CsvWriter for Writer {
    fn write_csv_table(path: &Path, table: &Table) -> anyhow::Result<()> {
        let file_name = file_name_of(path);
        let mut wtr = csv::Writer::from_path(path)
            .with_context(|| format!("failed to create csv file: {}", file_name))?;
        wtr.write_record(table.headers())
            .with_context(|| format!("failed to write header row of csv file: {}", file_name))?;
        for (idx, row) in table.rows().iter().enumerate() {
            wtr.write_record(row.iter().map(|cell| cell.to_string()))
                .with_context(|| format!("failed to write row {} of csv file: {}", idx + 1, file_name))?;
        }
        wtr.flush()
            .with_context(|| format!("failed to flush csv file: {}", file_name))?;
        Ok(())
    }
}
