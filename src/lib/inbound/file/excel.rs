use crate::domain::models::{Cell, Table};
use crate::inbound::file::{Reader, file_name_of};
use anyhow::Context;
use calamine::{Data, Reader as CalamineReader, open_workbook_auto};
use std::path::Path;
use tracing::debug;

pub trait Excel {
    fn read_excel_table(path: &Path) -> anyhow::Result<Table>;
}

fn data_to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::from_loaded_text(s),
        Data::Int(i) => Cell::Int(*i),
        Data::Float(f) => Cell::Float(*f),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(dt) => Cell::Text(dt.to_string()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Error(e) => Cell::Text(format!("{:?}", e)),
    }
}

impl Excel for Reader {
    fn read_excel_table(path: &Path) -> anyhow::Result<Table> {
        let file_name = file_name_of(path);
        let mut workbook = open_workbook_auto(path)
            .with_context(|| format!("failed to open excel file: {}", file_name))?;
        let sheet_names = workbook.sheet_names().to_owned();
        let first_sheet_name = sheet_names
            .first()
            .ok_or_else(|| anyhow::anyhow!("excel file '{}' has no worksheets", file_name))?
            .clone();
        let range = workbook
            .worksheet_range(&first_sheet_name)
            .with_context(|| {
                format!(
                    "failed to read worksheet '{}' from excel file: {}",
                    first_sheet_name, file_name
                )
            })?;
        let mut rows_iter = range.rows();
        let headers: Vec<String> = match rows_iter.next() {
            Some(header_row) => header_row.iter().map(|cell| cell.to_string()).collect(),
            None => {
                return Err(anyhow::anyhow!(
                    "first worksheet '{}' of excel file '{}' has no header row",
                    first_sheet_name,
                    file_name
                ));
            }
        };
        let rows: Vec<Vec<Cell>> = rows_iter
            .map(|row| row.iter().map(data_to_cell).collect())
            .collect();
        debug!(
            "loaded {} rows from worksheet '{}' of '{}'",
            rows.len(),
            first_sheet_name,
            file_name
        );
        Ok(Table::new(headers, rows))
    }
}
