pub mod csv;
pub mod excel;
pub mod text;

pub use self::csv::Csv;
pub use excel::Excel;
pub use text::{RejectedLine, Text, TextIngest, ingest_lines};

use crate::domain::models::Table;
use std::ffi::OsStr;
use std::path::Path;

pub struct Reader;

const EXCEL_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

impl Reader {
    /// Loads the first worksheet of a spreadsheet, or a CSV file, into a table.
    pub fn read_table(path: &Path) -> anyhow::Result<Table> {
        let ext = extension_of(path);
        if ext == "csv" {
            <Reader as Csv>::read_csv_table(path)
        } else if EXCEL_EXTENSIONS.contains(&ext.as_str()) {
            <Reader as Excel>::read_excel_table(path)
        } else {
            anyhow::bail!(
                "unsupported input file type '{}': {}",
                ext,
                file_name_of(path)
            )
        }
    }
}

pub fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(OsStr::to_str)
        .map(str::to_lowercase)
        .unwrap_or_default()
}

pub fn file_name_of(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown file")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_extension_is_rejected() {
        let err = Reader::read_table(Path::new("contacts.json"))
            .unwrap_err()
            .to_string();
        assert!(err.contains("unsupported input file type 'json'"), "{}", err);
    }

    #[test]
    fn extension_is_case_insensitive() {
        assert_eq!(extension_of(Path::new("a/B.XLSX")), "xlsx");
        assert_eq!(extension_of(Path::new("noext")), "");
    }
}
