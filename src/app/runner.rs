use tracing::info;

use crate::args::ProbeArgs;
use crate::error::AppResult;
use crate::http::HttpTransport;
use crate::metrics::Measurement;
use crate::sampler::{SamplerPlan, measure_latency};

use super::summary::{print_run_line, print_summary};

pub(crate) async fn run_probe(args: &ProbeArgs) -> AppResult<Measurement> {
    let transport = HttpTransport::from_args(args)?;
    let plan = SamplerPlan::from_args(args);
    let runs = plan.runs.get();

    info!(
        "Probing {} with {} runs (timeout {}ms, delay {}ms)",
        plan.url,
        runs,
        plan.timeout.as_millis(),
        plan.inter_run_delay.as_millis()
    );

    let measurement = measure_latency(&transport, &plan, |run, sample| {
        print_run_line(run, runs, sample);
    })
    .await;

    print_summary(&measurement);
    Ok(measurement)
}
