use crate::domain::models::{LineOutcome, Record};
use crate::inbound::file::{Reader, file_name_of};
use anyhow::Context;
use std::path::Path;
use tracing::{debug, warn};

pub trait Text {
    fn read_text_records(path: &Path) -> anyhow::Result<TextIngest>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedLine {
    pub line_number: usize,
    pub line: String,
    pub field_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextIngest {
    pub lines_read: usize,
    pub blank_lines: usize,
    pub records: Vec<Record>,
    pub rejected: Vec<RejectedLine>,
}

/// Runs every line of `content` through the record validator.
pub fn ingest_lines(content: &str) -> TextIngest {
    let mut ingest = TextIngest::default();
    for (idx, line) in content.lines().enumerate() {
        ingest.lines_read += 1;
        match Record::parse_line(line) {
            LineOutcome::Blank => ingest.blank_lines += 1,
            LineOutcome::Valid(record) => {
                debug!("line {}: {:?}", idx + 1, record.fields());
                ingest.records.push(record);
            }
            LineOutcome::Rejected { field_count } => {
                let trimmed = line.trim().trim_matches(',');
                warn!(
                    "Skipping invalid row at line {} ({} fields): {}",
                    idx + 1,
                    field_count,
                    trimmed
                );
                ingest.rejected.push(RejectedLine {
                    line_number: idx + 1,
                    line: trimmed.to_string(),
                    field_count,
                });
            }
        }
    }
    ingest
}

impl Text for Reader {
    fn read_text_records(path: &Path) -> anyhow::Result<TextIngest> {
        let file_name = file_name_of(path);
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read text file: {}", file_name))?;
        Ok(ingest_lines(&content))
    }
}
