use crate::domain::models::{Cell, Table};
use crate::inbound::file::{Reader, file_name_of};
use anyhow::Context;
use csv::ReaderBuilder;
use std::path::Path;

pub trait Csv {
    fn read_csv_table(path: &Path) -> anyhow::Result<Table>;
}

impl Csv for Reader {
    fn read_csv_table(path: &Path) -> anyhow::Result<Table> {
        let file_name = file_name_of(path);
        let file = std::fs::File::open(path)
            .with_context(|| format!("failed to open csv file: {}", file_name))?;
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);
        let headers: Vec<String> = rdr
            .headers()
            .with_context(|| format!("failed to read header row of csv file: {}", file_name))?
            .iter()
            .map(str::to_string)
            .collect();
        let mut rows = Vec::new();
        for (idx, result) in rdr.records().enumerate() {
            let record = result.with_context(|| {
                format!("failed to read row {} in csv file: {}", idx + 1, file_name)
            })?;
            rows.push(
                record
                    .iter()
                    .map(Cell::from_loaded_text)
                    .collect(),
            );
        }
        Ok(Table::new(headers, rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_headers_and_ragged_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.csv");
        std::fs::write(&path, "Country,Email,id\n'usa',a@initech.com,1\nfrance\n").unwrap();
        let table = Reader::read_csv_table(&path).unwrap();
        assert_eq!(table.headers(), ["Country", "Email", "id"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0][0], Cell::from("'usa'"));
        assert_eq!(table.rows()[1], vec![Cell::from("france"), Cell::Empty, Cell::Empty]);
    }

    #[test]
    fn empty_fields_are_empty_cells() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.csv");
        std::fs::write(&path, "country,email\nusa,\nusa,N/A\nusa,null\n").unwrap();
        let table = Reader::read_csv_table(&path).unwrap();
        assert!(table.column_values(1).all(Cell::is_empty));
    }
}
