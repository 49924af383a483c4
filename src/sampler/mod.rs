//! Sequential latency sampling loop.
//!
//! Each run times one GET from just before the request is issued until the
//! response body has been read (or the attempt failed). Failed runs still
//! produce a timed [`Sample`], so a completed probe always holds exactly
//! `runs` samples.


use std::time::Duration;

use reqwest::Url;
use tokio::time::{Instant, sleep, timeout};
use tracing::debug;

use crate::args::{PositiveU64, ProbeArgs};
use crate::http::Transport;
use crate::metrics::{Measurement, ProbeFailure, RunOutcome, Sample};

#[derive(Debug, Clone)]
pub struct SamplerPlan {
    pub url: Url,
    pub runs: PositiveU64,
    pub timeout: Duration,
    pub inter_run_delay: Duration,
    pub expected_status: u16,
}

impl SamplerPlan {
    #[must_use]
    pub fn from_args(args: &ProbeArgs) -> Self {
        Self {
            url: args.url.clone(),
            runs: args.runs,
            timeout: args.request_timeout,
            inter_run_delay: args.delay,
            expected_status: args.expected_status_code,
        }
    }
}

/// Runs the probe to completion. `on_sample` is called with the 1-based run
/// index right after each sample is taken.
pub async fn measure_latency<T, F>(
    transport: &T,
    plan: &SamplerPlan,
    mut on_sample: F,
) -> Measurement
where
    T: Transport + ?Sized,
    F: FnMut(u64, &Sample),
{
    let runs = plan.runs.get();
    let mut samples = Vec::with_capacity(usize::try_from(runs).map_or(0, |n| n.min(1024)));

    for run in 1..=runs {
        let sample = sample_once(transport, plan).await;
        if let Some(failure) = sample.failure() {
            debug!("Run {} failed after {:?}: {}", run, sample.elapsed, failure);
        }
        on_sample(run, &sample);
        samples.push(sample);

        if run < runs && !plan.inter_run_delay.is_zero() {
            sleep(plan.inter_run_delay).await;
        }
    }

    Measurement::new(samples)
}

async fn sample_once<T>(transport: &T, plan: &SamplerPlan) -> Sample
where
    T: Transport + ?Sized,
{
    let start = Instant::now();
    let result = timeout(plan.timeout, transport.get(&plan.url)).await;
    let elapsed = start.elapsed();

    let outcome = match result {
        Ok(Ok(status)) if status == plan.expected_status => RunOutcome::Success { status },
        Ok(Ok(status)) => RunOutcome::Failure(ProbeFailure::UnexpectedStatus { status }),
        Ok(Err(failure)) => RunOutcome::Failure(failure),
        Err(_elapsed) => RunOutcome::Failure(ProbeFailure::Timeout),
    };

    Sample { elapsed, outcome }
}
