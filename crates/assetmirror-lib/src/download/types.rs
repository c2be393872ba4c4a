use std::time::Duration;

/// Terminal state of one manifest item. No retries; an item never leaves its
/// terminal state within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemOutcome {
    /// Destination already existed; no network I/O was performed.
    Skipped,
    /// Fetched and written to disk.
    Downloaded,
    /// Any per-item failure: unresolvable descriptor, network error,
    /// non-success status, or filesystem error.
    Failed,
}

/// End-of-run summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MirrorReport {
    pub downloaded: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl MirrorReport {
    pub fn record(&mut self, outcome: ItemOutcome) {
        match outcome {
            ItemOutcome::Downloaded => self.downloaded += 1,
            ItemOutcome::Skipped => self.skipped += 1,
            ItemOutcome::Failed => self.failed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.downloaded + self.skipped + self.failed
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MirrorOptions {
    /// Applies to the network call only, never to disk writes.
    pub timeout: Duration,
    /// Write buffer size for streaming response bodies to disk.
    pub chunk_size: usize,
}

impl Default for MirrorOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            chunk_size: 8192,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_counts_each_outcome() {
        let mut report = MirrorReport::default();
        report.record(ItemOutcome::Downloaded);
        report.record(ItemOutcome::Skipped);
        report.record(ItemOutcome::Skipped);
        report.record(ItemOutcome::Failed);

        assert_eq!(report.downloaded, 1);
        assert_eq!(report.skipped, 2);
        assert_eq!(report.failed, 1);
        assert_eq!(report.total(), 4);
    }
}
