use std::time::{Duration, Instant};

pub const BATCH_SIZE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    Pending,
    Running,
    Finished,
    Failed,
}

#[derive(Debug, Clone)]
pub struct Job {
    pub id: i64,
    pub owner: String,
    pub operation: String,
    pub operand1: f64,
    pub operand2: f64,
    pub estimated_duration: f64,
    /// Source line the job was parsed from (1-based).
    pub line: usize,
    pub result: Option<f64>,
    pub status: JobStatus,
    pub started_at: Option<Instant>,
    pub ended_at: Option<Instant>,
}

impl Job {
    pub fn new(
        id: i64,
        owner: impl Into<String>,
        operation: impl Into<String>,
        operand1: f64,
        operand2: f64,
        estimated_duration: f64,
    ) -> Self {
        Self {
            id,
            owner: owner.into(),
            operation: operation.into(),
            operand1,
            operand2,
            estimated_duration,
            line: 0,
            result: None,
            status: JobStatus::Pending,
            started_at: None,
            ended_at: None,
        }
    }

    /// Simulated execution time. Negative and NaN estimates hold for zero;
    /// estimates past `Duration::MAX` saturate.
    pub fn simulated_delay(&self) -> Duration {
        if self.estimated_duration.is_nan() || self.estimated_duration <= 0.0 {
            return Duration::ZERO;
        }
        Duration::try_from_secs_f64(self.estimated_duration).unwrap_or(Duration::MAX)
    }

    pub fn elapsed(&self) -> Option<Duration> {
        match (self.started_at, self.ended_at) {
            (Some(start), Some(end)) => Some(end.saturating_duration_since(start)),
            _ => None,
        }
    }

    pub(crate) fn start(&mut self) {
        self.status = JobStatus::Running;
        self.started_at = Some(Instant::now());
    }

    /// Records the outcome of the job's slot. The result is written once.
    pub(crate) fn finish(&mut self, result: f64, status: JobStatus) {
        debug_assert!(self.result.is_none(), "job {} executed twice", self.id);
        self.result = Some(result);
        self.status = status;
        self.ended_at = Some(Instant::now());
    }
}

/// Jobs in file order. Nothing is removed during a run.
#[derive(Debug, Clone, Default)]
pub struct JobStore {
    jobs: Vec<Job>,
}

impl JobStore {
    pub fn push(&mut self, job: Job) {
        self.jobs.push(job);
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn batch_count(&self) -> usize {
        self.jobs.len().div_ceil(BATCH_SIZE)
    }

    pub fn batches_mut(&mut self) -> std::slice::ChunksMut<'_, Job> {
        self.jobs.chunks_mut(BATCH_SIZE)
    }

    pub fn total_estimated(&self) -> Duration {
        self.jobs()
            .iter()
            .map(Job::simulated_delay)
            .fold(Duration::ZERO, Duration::saturating_add)
    }
}

impl FromIterator<Job> for JobStore {
    fn from_iter<I: IntoIterator<Item = Job>>(iter: I) -> Self {
        Self {
            jobs: iter.into_iter().collect(),
        }
    }
}
