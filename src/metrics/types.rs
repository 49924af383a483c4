use std::time::Duration;

use thiserror::Error;

use super::stats::{LatencyStats, compute_stats};

/// Why a single run did not count as a success.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeFailure {
    #[error("request timed out")]
    Timeout,
    #[error("transport error: {detail}")]
    Transport { detail: String },
    #[error("unexpected status {status}")]
    UnexpectedStatus { status: u16 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Success { status: u16 },
    Failure(ProbeFailure),
}

/// One timed request attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    pub elapsed: Duration,
    pub outcome: RunOutcome,
}

impl Sample {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.outcome, RunOutcome::Success { .. })
    }

    #[must_use]
    pub const fn failure(&self) -> Option<&ProbeFailure> {
        match &self.outcome {
            RunOutcome::Failure(failure) => Some(failure),
            RunOutcome::Success { .. } => None,
        }
    }
}

/// Samples of a completed probe, in run order.
#[derive(Debug, Clone, Default)]
pub struct Measurement {
    samples: Vec<Sample>,
}

impl Measurement {
    #[must_use]
    pub const fn new(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn success_count(&self) -> usize {
        self.samples
            .iter()
            .filter(|sample| sample.is_success())
            .count()
    }

    /// Statistics over every run, failed runs included.
    #[must_use]
    pub fn stats(&self) -> Option<LatencyStats> {
        let latencies: Vec<Duration> = self.samples.iter().map(|sample| sample.elapsed).collect();
        compute_stats(&latencies)
    }

    /// Statistics over successful runs only.
    #[must_use]
    pub fn success_stats(&self) -> Option<LatencyStats> {
        let latencies: Vec<Duration> = self
            .samples
            .iter()
            .filter(|sample| sample.is_success())
            .map(|sample| sample.elapsed)
            .collect();
        compute_stats(&latencies)
    }
}
