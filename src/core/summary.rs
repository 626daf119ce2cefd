use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Jobs whose slot was reached, failed operations included.
    pub executed: usize,
    pub failed: usize,
    pub batches: usize,
    pub estimated: Duration,
    pub elapsed: Duration,
}

impl RunSummary {
    pub fn succeeded(&self) -> usize {
        self.executed - self.failed
    }
}
