use crate::domain::models::record::{RECORD_HEADERS, Record};
use std::borrow::Cow;
use std::fmt;

static EMPTY_CELL: Cell = Cell::Empty;

/// Text values a spreadsheet load treats as missing, matched exactly.
pub const MISSING_VALUE_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Cell {
    /// Text view of the cell, `None` when the cell holds no value.
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Cell::Empty => None,
            Cell::Text(s) => Some(Cow::Borrowed(s.as_str())),
            other => Some(Cow::Owned(other.to_string())),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Cell for a text value read from a file; missing-value tokens become `Empty`.
    pub fn from_loaded_text(value: &str) -> Self {
        if MISSING_VALUE_TOKENS.contains(&value) {
            Cell::Empty
        } else {
            Cell::Text(value.to_string())
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Text(s) => f.write_str(s),
            Cell::Int(i) => write!(f, "{}", i),
            Cell::Float(v) => write!(f, "{}", v),
            Cell::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Builds a table, padding short rows with empty cells to the header width.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                while row.len() < width {
                    row.push(Cell::Empty);
                }
                row
            })
            .collect();
        Self { headers, rows }
    }

    pub fn from_records(records: &[Record]) -> Self {
        let headers = RECORD_HEADERS.iter().map(|h| h.to_string()).collect();
        let rows = records
            .iter()
            .map(|record| {
                record
                    .fields()
                    .iter()
                    .map(|field| Cell::Text(field.clone()))
                    .collect()
            })
            .collect();
        Self::new(headers, rows)
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Strips and lowercases every header.
    pub fn normalize_headers(&mut self) {
        for header in self.headers.iter_mut() {
            *header = normalize_column_name(header);
        }
    }

    /// Index of the column whose normalized name equals `name`.
    pub fn column_index(&self, name: &str) -> anyhow::Result<usize> {
        let wanted = normalize_column_name(name);
        self.headers
            .iter()
            .position(|h| normalize_column_name(h) == wanted)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "missing column '{}'. Available columns: [{}]",
                    wanted,
                    self.headers.join(", ")
                )
            })
    }

    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &Cell> {
        self.rows
            .iter()
            .map(move |row| row.get(index).unwrap_or(&EMPTY_CELL))
    }

    pub fn retain_rows<F>(&mut self, mut keep: F)
    where
        F: FnMut(&[Cell]) -> bool,
    {
        self.rows.retain(|row| keep(row));
    }
}

pub fn normalize_column_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Table {
        Table::new(
            vec![" Country ".to_string(), "EMAIL".to_string(), "id".to_string()],
            vec![
                vec![Cell::from("usa"), Cell::from("a@b.com"), Cell::Int(1)],
                vec![Cell::from("fr")],
            ],
        )
    }

    #[test]
    fn short_rows_are_padded() {
        let table = table();
        assert_eq!(table.rows()[1], vec![Cell::from("fr"), Cell::Empty, Cell::Empty]);
    }

    #[test]
    fn headers_normalize_to_trimmed_lowercase() {
        let mut table = table();
        table.normalize_headers();
        assert_eq!(table.headers(), ["country", "email", "id"]);
    }

    #[test]
    fn column_lookup_ignores_case_and_whitespace() {
        let table = table();
        assert_eq!(table.column_index("country").unwrap(), 0);
        assert_eq!(table.column_index(" Email").unwrap(), 1);
        let err = table.column_index("phone").unwrap_err().to_string();
        assert!(err.contains("missing column 'phone'"), "{}", err);
    }

    #[test]
    fn retain_preserves_order() {
        let mut table = Table::new(
            vec!["n".to_string()],
            (0..6).map(|i| vec![Cell::Int(i)]).collect(),
        );
        table.retain_rows(|row| matches!(row[0], Cell::Int(i) if i % 2 == 0));
        let kept: Vec<&Cell> = table.column_values(0).collect();
        assert_eq!(kept, vec![&Cell::Int(0), &Cell::Int(2), &Cell::Int(4)]);
    }

    #[test]
    fn cell_text_view() {
        assert_eq!(Cell::Empty.as_text(), None);
        assert_eq!(Cell::Int(42).as_text().as_deref(), Some("42"));
        assert_eq!(Cell::Float(1.5).as_text().as_deref(), Some("1.5"));
        assert_eq!(Cell::from("x").as_text().as_deref(), Some("x"));
    }

    #[test]
    fn loaded_missing_tokens_are_empty() {
        for token in ["", "N/A", "NA", "#N/A", "null", "None", "nan", "NULL"] {
            assert_eq!(Cell::from_loaded_text(token), Cell::Empty, "{:?}", token);
        }
        assert_eq!(Cell::from_loaded_text("n.a."), Cell::from("n.a."));
        assert_eq!(Cell::from_loaded_text(" N/A"), Cell::from(" N/A"));
        assert_eq!(Cell::from_loaded_text("usa"), Cell::from("usa"));
    }

    #[test]
    fn records_become_text_rows_under_fixed_header() {
        let record = Record::new(["1", "a@b.com", "h", "J", "D", "", "usa", "1.1.1.1"].map(String::from));
        let table = Table::from_records(&[record]);
        assert_eq!(table.headers().len(), 8);
        assert_eq!(table.headers()[7], "IP Address");
        assert_eq!(table.rows()[0][5], Cell::from(""));
    }
}
