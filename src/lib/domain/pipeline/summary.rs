use crate::domain::models::Table;
use tracing::{info, warn};

pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();
    for (i, &ch) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i).is_multiple_of(3) {
            result.push(',');
        }
        result.push(ch);
    }
    result
}

#[derive(Debug, Clone, PartialEq)]
pub struct TabulateSummary {
    pub lines_read: usize,
    pub blank_lines: usize,
    pub records_written: usize,
    pub rejected_lines: usize,
    pub runtime_secs: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterSummary {
    pub rows_loaded: usize,
    pub country_matched: usize,
    pub business_emails: usize,
    pub runtime_secs: f64,
}

impl TabulateSummary {
    pub fn log(&self) {
        info!("=== Tabulate Summary ===");
        info!("Lines read: {}", format_number(self.lines_read));
        info!("Blank lines: {}", format_number(self.blank_lines));
        info!("Records written: {}", format_number(self.records_written));
        if self.rejected_lines > 0 {
            warn!("Invalid rows skipped: {}", format_number(self.rejected_lines));
        }
        info!("Total runtime: {:.2}s", self.runtime_secs);
    }
}

impl FilterSummary {
    pub fn log(&self) {
        info!("=== Filter Summary ===");
        info!("Rows loaded: {}", format_number(self.rows_loaded));
        info!("Rows in target countries: {}", format_number(self.country_matched));
        info!("Rows with business emails: {}", format_number(self.business_emails));
        info!("Total runtime: {:.2}s", self.runtime_secs);
    }
}

/// Logs the header and the first `limit` rows of `table`.
pub fn log_preview(label: &str, table: &Table, limit: usize) {
    info!("{} ({} rows): [{}]", label, table.len(), table.headers().join(", "));
    for (idx, row) in table.rows().iter().take(limit).enumerate() {
        let cells: Vec<String> = row.iter().map(|c| c.to_string()).collect();
        info!("  {}: [{}]", idx, cells.join(", "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_are_separated() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
    }
}
