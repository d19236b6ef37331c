use crate::domain::models::{Cell, Table};
use crate::inbound::file::file_name_of;
use crate::outbound::file::Writer;
use anyhow::Context;
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;

// Largest magnitude an f64 spreadsheet number holds without rounding.
const MAX_EXACT_INT: u64 = 1 << 53;

pub trait Xlsx {
    fn write_xlsx_table(path: &Path, table: &Table) -> anyhow::Result<()>;
}

fn write_cell(sheet: &mut Worksheet, row: u32, col: u16, cell: &Cell) -> anyhow::Result<()> {
    match cell {
        Cell::Empty => {}
        Cell::Text(s) if s.is_empty() => {}
        Cell::Text(s) => {
            sheet.write_string(row, col, s)?;
        }
        Cell::Int(i) if i.unsigned_abs() > MAX_EXACT_INT => {
            sheet.write_string(row, col, i.to_string())?;
        }
        Cell::Int(i) => {
            sheet.write_number(row, col, *i as f64)?;
        }
        Cell::Float(f) => {
            sheet.write_number(row, col, *f)?;
        }
        Cell::Bool(b) => {
            sheet.write_boolean(row, col, *b)?;
        }
    }
    Ok(())
}

impl Xlsx for Writer {
    fn write_xlsx_table(path: &Path, table: &Table) -> anyhow::Result<()> {
        let file_name = file_name_of(path);
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        let header_format = Format::new().set_bold();
        for (col, header) in table.headers().iter().enumerate() {
            let col = u16::try_from(col).context("too many columns for a worksheet")?;
            sheet.write_string_with_format(0, col, header, &header_format)?;
        }
        for (idx, row) in table.rows().iter().enumerate() {
            let row_num = u32::try_from(idx + 1).context("too many rows for a worksheet")?;
            for (col, cell) in row.iter().enumerate() {
                let col = u16::try_from(col).context("too many columns for a worksheet")?;
                write_cell(sheet, row_num, col, cell).with_context(|| {
                    format!("failed to write row {} of excel file: {}", idx + 1, file_name)
                })?;
            }
        }
        workbook
            .save(path)
            .with_context(|| format!("failed to save excel file: {}", file_name))?;
        Ok(())
    }
}
