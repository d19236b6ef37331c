pub const RECORD_WIDTH: usize = 8;

pub const RECORD_HEADERS: [&str; RECORD_WIDTH] = [
    "ID",
    "Email",
    "Hash",
    "First Name",
    "Last Name",
    "Blank",
    "Country",
    "IP Address",
];

pub const FIELD_DELIMITER: &str = ", ";
const TRAILING_SEPARATOR: char = ',';

/// One validated line of a contact dump, fields kept in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record([String; RECORD_WIDTH]);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Blank,
    Valid(Record),
    Rejected { field_count: usize },
}

impl Record {
    pub fn new(fields: [String; RECORD_WIDTH]) -> Self {
        Self(fields)
    }

    /// Trims the line and any separator left at its ends, then splits on
    /// `", "`. Only lines yielding exactly eight fields become records.
    pub fn parse_line(line: &str) -> LineOutcome {
        let cleaned = line.trim().trim_matches(TRAILING_SEPARATOR);
        if cleaned.is_empty() {
            return LineOutcome::Blank;
        }
        let parts: Vec<&str> = cleaned.split(FIELD_DELIMITER).collect();
        match <[&str; RECORD_WIDTH]>::try_from(parts.as_slice()) {
            Ok(fields) => LineOutcome::Valid(Self(fields.map(str::to_string))),
            Err(_) => LineOutcome::Rejected {
                field_count: parts.len(),
            },
        }
    }

    pub fn fields(&self) -> &[String] {
        &self.0
    }

    pub fn id(&self) -> &str {
        &self.0[0]
    }

    pub fn email(&self) -> &str {
        &self.0[1]
    }

    pub fn country(&self) -> &str {
        &self.0[6]
    }

    pub fn ip_address(&self) -> &str {
        &self.0[7]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid(line: &str) -> Record {
        match Record::parse_line(line) {
            LineOutcome::Valid(record) => record,
            other => panic!("expected a record for {:?}, got {:?}", line, other),
        }
    }

    #[test]
    fn parses_line_with_trailing_separator() {
        let record = valid("123, a@biz.com, h1, Jane, Doe, , usa, 1.2.3.4,");
        assert_eq!(
            record.fields(),
            ["123", "a@biz.com", "h1", "Jane", "Doe", "", "usa", "1.2.3.4"]
        );
        assert_eq!(record.id(), "123");
        assert_eq!(record.email(), "a@biz.com");
        assert_eq!(record.country(), "usa");
        assert_eq!(record.ip_address(), "1.2.3.4");
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let record = valid("   7, x@y.org, h, A, B, , uk, 10.0.0.1,  \r\n");
        assert_eq!(record.id(), "7");
        assert_eq!(record.ip_address(), "10.0.0.1");
    }

    #[test]
    fn blank_lines_are_skipped() {
        assert_eq!(Record::parse_line(""), LineOutcome::Blank);
        assert_eq!(Record::parse_line("   \t"), LineOutcome::Blank);
        assert_eq!(Record::parse_line(" ,, "), LineOutcome::Blank);
    }

    #[test]
    fn wrong_field_count_is_rejected() {
        assert_eq!(
            Record::parse_line("1, a@b.com, h, Jane, Doe, , usa"),
            LineOutcome::Rejected { field_count: 7 }
        );
        assert_eq!(
            Record::parse_line("1, a@b.com, h, Jane, Doe, , usa, 1.2.3.4, extra"),
            LineOutcome::Rejected { field_count: 9 }
        );
    }

    #[test]
    fn comma_without_space_is_not_a_delimiter() {
        assert_eq!(
            Record::parse_line("1,a@b.com,h,Jane,Doe,,usa,1.2.3.4"),
            LineOutcome::Rejected { field_count: 1 }
        );
    }

    #[test]
    fn fields_are_not_trimmed() {
        let record = valid("1, a@b.com, h, Jane , Doe, , usa, 1.2.3.4");
        assert_eq!(record.fields()[3], "Jane ");
    }
}
