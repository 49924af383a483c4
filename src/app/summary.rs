use std::time::Duration;

use crate::metrics::{LatencyStats, Measurement, Sample};

const SUCCESS_GLYPH: &str = "✅";
const FAILURE_GLYPH: &str = "❌";
const MIN_RUN_WIDTH: usize = 2;

/// Milliseconds with two decimals, rounded half up.
pub(crate) fn format_ms(duration: Duration) -> String {
    let hundredths = duration
        .as_micros()
        .saturating_add(5)
        .checked_div(10)
        .unwrap_or(0);
    format!("{}.{:02}", hundredths / 100, hundredths % 100)
}

pub(crate) fn run_line(run: u64, runs: u64, sample: &Sample) -> String {
    let width = runs.to_string().len().max(MIN_RUN_WIDTH);
    let glyph = if sample.is_success() {
        SUCCESS_GLYPH
    } else {
        FAILURE_GLYPH
    };
    format!(
        "Run {:0width$}: {} ms {}",
        run,
        format_ms(sample.elapsed),
        glyph,
        width = width
    )
}

pub(crate) fn summary_lines(measurement: &Measurement) -> Vec<String> {
    let total = measurement.len();
    let succeeded = measurement.success_count();

    let mut lines = Vec::new();
    match measurement.stats() {
        Some(stats) => lines.extend(stat_lines(&stats, "")),
        None => lines.push("No runs recorded.".to_owned()),
    }
    lines.push(format!("Succeeded: {}/{}", succeeded, total));

    if succeeded > 0
        && succeeded < total
        && let Some(stats) = measurement.success_stats()
    {
        lines.extend(stat_lines(&stats, " (ok)"));
    }
    lines
}

fn stat_lines(stats: &LatencyStats, suffix: &str) -> Vec<String> {
    let rows = [
        ("Average", stats.mean),
        ("Median", stats.median),
        ("Best", stats.min),
        ("Worst", stats.max),
    ];
    let labels: Vec<String> = rows
        .iter()
        .map(|(name, _)| format!("{}{}", name, suffix))
        .collect();
    let width = labels.iter().map(String::len).max().unwrap_or(0);

    labels
        .iter()
        .zip(rows.iter())
        .map(|(label, (_, value))| {
            format!("{:<width$}: {} ms", label, format_ms(*value), width = width)
        })
        .collect()
}

pub(crate) fn print_run_line(run: u64, runs: u64, sample: &Sample) {
    println!("{}", run_line(run, runs, sample));
}

pub(crate) fn print_summary(measurement: &Measurement) {
    println!();
    for line in summary_lines(measurement) {
        println!("{}", line);
    }
}
