pub mod batch;
pub mod evaluation;

pub use batch::{collect_archives, run_batch, BatchSummary, ReportRow};
pub use evaluation::Evaluator;
