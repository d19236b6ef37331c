pub mod record;
pub mod table;

pub use record::{LineOutcome, RECORD_HEADERS, Record};
pub use table::{Cell, Table};
