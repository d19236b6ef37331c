pub mod filter;
pub mod setup;
pub mod summary;
pub mod tabulate;

pub use filter::run_filter;
pub use setup::setup_logging;
pub use summary::{FilterSummary, TabulateSummary, format_number, log_preview};
pub use tabulate::run_tabulate;
