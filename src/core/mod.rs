use std::path::Path;

use tracing::info;

pub mod batch;
pub mod error;
pub mod event;
pub mod formatter;
pub mod job;
pub mod operation;
pub mod runner;
pub mod summary;

use error::BatchError;
use event::EventSink;
use runner::{BatchRunner, Delay};
use summary::RunSummary;

/// Loads `path` and runs every job in it. Nothing runs if the load fails.
pub fn run<D: Delay, S: EventSink>(
    path: &Path,
    delay: D,
    sink: S,
) -> Result<RunSummary, BatchError> {
    let mut report = batch::load_jobs(path)?;
    info!(
        "Loaded {} processes from {} ({} lines skipped)",
        report.store.len(),
        path.display(),
        report.rejected.len()
    );

    let mut runner = BatchRunner::new(delay, sink);
    let summary = runner.run(&mut report.store);
    info!(
        "Finished {} processes in {} batches ({} failed)",
        runner.completed(),
        summary.batches,
        summary.failed
    );
    Ok(summary)
}
