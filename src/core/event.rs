use std::time::Duration;

use crate::core::job::JobStatus;

#[derive(Debug, Clone, PartialEq)]
pub enum BatchEvent {
    BatchStarted {
        /// 1-based batch number.
        number: usize,
        total: usize,
        size: usize,
    },
    JobStarted {
        id: i64,
        operation: String,
        operand1: f64,
        operand2: f64,
    },
    JobFinished {
        id: i64,
        operation: String,
        result: f64,
        status: JobStatus,
        elapsed: Duration,
    },
    BatchFinished,
}

/// Receives progress from the runner, in execution order.
pub trait EventSink {
    fn handle(&mut self, event: BatchEvent);
}

impl EventSink for Vec<BatchEvent> {
    fn handle(&mut self, event: BatchEvent) {
        self.push(event);
    }
}
