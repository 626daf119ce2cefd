use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::core::event::{BatchEvent, EventSink};
use crate::core::job::{JobStatus, JobStore};
use crate::core::operation::dispatch;
use crate::core::summary::RunSummary;

/// Stands in for a job's execution time.
pub trait Delay {
    fn hold(&mut self, duration: Duration);
}

/// Blocks the calling thread for the full duration.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadSleep;

impl Delay for ThreadSleep {
    fn hold(&mut self, duration: Duration) {
        if !duration.is_zero() {
            thread::sleep(duration);
        }
    }
}

/// Runs jobs one at a time in store order, grouped into batches for reporting.
pub struct BatchRunner<D, S> {
    delay: D,
    sink: S,
    completed: usize,
    failed: usize,
}

impl<D: Delay, S: EventSink> BatchRunner<D, S> {
    pub fn new(delay: D, sink: S) -> Self {
        Self {
            delay,
            sink,
            completed: 0,
            failed: 0,
        }
    }

    pub fn completed(&self) -> usize {
        self.completed
    }

    pub fn run(&mut self, store: &mut JobStore) -> RunSummary {
        let started = Instant::now();
        let total = store.batch_count();
        let estimated = store.total_estimated();

        for (index, batch) in store.batches_mut().enumerate() {
            let number = index + 1;
            debug!("starting batch {number}/{total} with {} jobs", batch.len());
            self.sink.handle(BatchEvent::BatchStarted {
                number,
                total,
                size: batch.len(),
            });

            for job in batch.iter_mut() {
                debug!(
                    "process {} from line {} (owner {:?})",
                    job.id, job.line, job.owner
                );
                self.sink.handle(BatchEvent::JobStarted {
                    id: job.id,
                    operation: job.operation.clone(),
                    operand1: job.operand1,
                    operand2: job.operand2,
                });

                job.start();
                self.delay.hold(job.simulated_delay());

                let outcome = dispatch(&job.operation, job.operand1, job.operand2);
                let (result, status) = match outcome {
                    Ok(value) => (value, JobStatus::Finished),
                    Err(err) => {
                        warn!("Error in process {}: {err}", job.id);
                        self.failed += 1;
                        (0.0, JobStatus::Failed)
                    }
                };
                job.finish(result, status);
                self.completed += 1;

                self.sink.handle(BatchEvent::JobFinished {
                    id: job.id,
                    operation: job.operation.clone(),
                    result,
                    status,
                    elapsed: job.elapsed().unwrap_or_default(),
                });
            }

            self.sink.handle(BatchEvent::BatchFinished);
        }

        RunSummary {
            executed: self.completed,
            failed: self.failed,
            batches: total,
            estimated,
            elapsed: started.elapsed(),
        }
    }

    #[cfg(test)]
    pub fn into_sink(self) -> S {
        self.sink
    }
}
