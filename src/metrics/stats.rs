use std::time::Duration;

/// Mean, median, min and max at microsecond resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyStats {
    pub mean: Duration,
    pub median: Duration,
    pub min: Duration,
    pub max: Duration,
}

/// Computes latency statistics, or `None` when there is nothing to summarize.
///
/// The median of an even count is the midpoint of the two middle values.
#[must_use]
pub fn compute_stats(latencies: &[Duration]) -> Option<LatencyStats> {
    let mut micros: Vec<u64> = latencies
        .iter()
        .map(|latency| u64::try_from(latency.as_micros()).unwrap_or(u64::MAX))
        .collect();
    micros.sort_unstable();

    let min = *micros.first()?;
    let max = *micros.last()?;

    let count = u128::from(u64::try_from(micros.len()).ok()?);
    let sum = micros
        .iter()
        .fold(0u128, |acc, value| acc.saturating_add(u128::from(*value)));
    let mean = sum
        .checked_div(count)
        .and_then(|value| u64::try_from(value).ok())
        .unwrap_or(max);

    let mid = micros.len().checked_div(2).unwrap_or(0);
    let upper = *micros.get(mid)?;
    let median = if micros.len().is_multiple_of(2) {
        let lower = *micros.get(mid.checked_sub(1)?)?;
        lower.midpoint(upper)
    } else {
        upper
    };

    Some(LatencyStats {
        mean: Duration::from_micros(mean),
        median: Duration::from_micros(median),
        min: Duration::from_micros(min),
        max: Duration::from_micros(max),
    })
}
