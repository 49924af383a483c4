pub(crate) const DEFAULT_USER_AGENT: &str = concat!("latprobe/", env!("CARGO_PKG_VERSION"));

/// Unauthenticated account query; the request is expected to be rejected,
/// only the round trip matters.
pub(crate) const DEFAULT_URL: &str =
    "https://fapi.bitunix.com/api/v1/futures/account?marginCoin=USDT";

pub(crate) const DEFAULT_RUNS: &str = "20";
pub(crate) const DEFAULT_TIMEOUT: &str = "5s";
pub(crate) const DEFAULT_CONNECT_TIMEOUT: &str = "5s";
pub(crate) const DEFAULT_DELAY: &str = "300ms";
pub(crate) const DEFAULT_STATUS: &str = "200";
