//! Batch orchestration: fetch, extract, request insights, merge into the table.

pub mod progress;
pub mod runner;
pub mod sources;

pub use progress::{ProgressEvent, ProgressSink, RecordingSink};
pub use runner::{run_batch, BatchOptions, BatchReport, PREVIEW_CHARS};
pub use sources::{InsightSource, PageSource};
