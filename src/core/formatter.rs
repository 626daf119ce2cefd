use std::time::Duration;

use crate::core::job::JobStatus;
use crate::core::summary::RunSummary;

pub fn format_batch_header(number: usize, total: usize) -> String {
    let pending = total.saturating_sub(number);
    format!("Current Batch: {number}/{total} (pending: {pending})")
}

pub fn format_job_started(id: i64, operation: &str, operand1: f64, operand2: f64) -> String {
    format!("ID: {id}, Operation: {operation}, Data1: {operand1}, Data2: {operand2}")
}

pub fn format_job_finished(
    id: i64,
    operation: &str,
    result: f64,
    status: JobStatus,
    elapsed: Duration,
) -> String {
    let marker = match status {
        JobStatus::Failed => " (failed)",
        _ => "",
    };
    format!(
        "ID: {id}, Operation: {operation}, Result: {result}{marker} [{:.2}s]",
        elapsed.as_secs_f64()
    )
}

pub fn format_summary_line(summary: &RunSummary) -> String {
    format!("Total Processes Executed: {}", summary.executed)
}

pub fn format_timing_line(summary: &RunSummary) -> String {
    format!(
        "Succeeded: {}, Failed: {}, Batches: {}, Estimated: {}, Elapsed: {}",
        summary.succeeded(),
        summary.failed,
        summary.batches,
        format_duration(summary.estimated),
        format_duration(summary.elapsed)
    )
}

pub fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}
