//! Per-run samples and the latency statistics computed over them.
mod stats;
mod types;


pub use stats::{LatencyStats, compute_stats};
pub use types::{Measurement, ProbeFailure, RunOutcome, Sample};
