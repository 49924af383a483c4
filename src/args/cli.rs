use clap::Parser;
use clap::builder::FalseyValueParser;
use reqwest::Url;
use std::time::Duration;

use super::defaults::{
    DEFAULT_CONNECT_TIMEOUT, DEFAULT_DELAY, DEFAULT_RUNS, DEFAULT_STATUS, DEFAULT_TIMEOUT,
    DEFAULT_URL,
};
use super::parsers::{
    parse_delay_arg, parse_duration_arg, parse_positive_u64, parse_status_code, parse_url_arg,
};
use super::types::PositiveU64;

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Sequential HTTP round-trip latency probe - times a run of GET requests against one endpoint and prints mean, median, best and worst latency."
)]
pub struct ProbeArgs {
    /// Target URL to probe
    #[arg(long, short, default_value = DEFAULT_URL, value_parser = parse_url_arg)]
    pub url: Url,

    /// Number of sequential requests to time
    #[arg(long, short = 'n', default_value = DEFAULT_RUNS, value_parser = parse_positive_u64)]
    pub runs: PositiveU64,

    /// Per-request timeout (supports ms/s/m/h)
    #[arg(
        long = "timeout",
        default_value = DEFAULT_TIMEOUT,
        value_parser = parse_duration_arg
    )]
    pub request_timeout: Duration,

    /// Timeout for establishing a new connection (supports ms/s/m/h)
    #[arg(
        long = "connect-timeout",
        default_value = DEFAULT_CONNECT_TIMEOUT,
        value_parser = parse_duration_arg
    )]
    pub connect_timeout: Duration,

    /// Pause between runs (supports ms/s/m/h, 0 disables)
    #[arg(long, short = 'd', default_value = DEFAULT_DELAY, value_parser = parse_delay_arg)]
    pub delay: Duration,

    /// HTTP status code that counts as a successful run
    #[arg(
        long = "status",
        short = 's',
        default_value = DEFAULT_STATUS,
        value_parser = parse_status_code
    )]
    pub expected_status_code: u16,

    /// Do not send the default User-Agent header
    #[arg(long = "no-ua")]
    pub no_ua: bool,

    /// Enable verbose logging (sets log level to debug unless overridden by LATPROBE_LOG/RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Disable color output. Any non-empty `NO_COLOR` other than a false literal disables it too.
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = FalseyValueParser::new())]
    pub no_color: bool,

    /// Path to config file (TOML/JSON). Defaults to ./latprobe.toml or ./latprobe.json if present.
    #[arg(long)]
    pub config: Option<String>,
}
