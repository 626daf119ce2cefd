use std::io::{self, Write};

use crate::core::event::{BatchEvent, EventSink};
use crate::core::formatter::{
    format_batch_header, format_job_finished, format_job_started, format_summary_line,
    format_timing_line,
};
use crate::core::summary::RunSummary;

/// Writes progress as plain lines, one per event.
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn summary(&mut self, summary: &RunSummary) {
        let _ = writeln!(self.out, "{}", format_summary_line(summary));
        let _ = writeln!(self.out, "{}", format_timing_line(summary));
        let _ = self.out.flush();
    }
}

impl<W: Write> EventSink for ConsoleReporter<W> {
    fn handle(&mut self, event: BatchEvent) {
        let _ = match event {
            BatchEvent::BatchStarted {
                number,
                total,
                size,
            } => writeln!(
                self.out,
                "{}\nProcesses Executing: {size}",
                format_batch_header(number, total)
            ),
            BatchEvent::JobStarted {
                id,
                operation,
                operand1,
                operand2,
            } => writeln!(
                self.out,
                "{}",
                format_job_started(id, &operation, operand1, operand2)
            ),
            BatchEvent::JobFinished {
                id,
                operation,
                result,
                status,
                elapsed,
            } => writeln!(
                self.out,
                "{}",
                format_job_finished(id, &operation, result, status, elapsed)
            ),
            BatchEvent::BatchFinished => writeln!(self.out),
        };
        // Lines must appear before the next simulated delay starts.
        let _ = self.out.flush();
    }
}

impl<W: Write> EventSink for &mut ConsoleReporter<W> {
    fn handle(&mut self, event: BatchEvent) {
        (**self).handle(event);
    }
}
