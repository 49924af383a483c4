use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::{Client, Url};
use tracing::debug;

use crate::args::{DEFAULT_USER_AGENT, ProbeArgs};
use crate::error::HttpError;
use crate::metrics::ProbeFailure;

/// Issues one GET and reports the response status.
///
/// Implementations return `Err` only for transport-level failures; any status
/// code, including error statuses, is a successful exchange at this layer.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &Url) -> Result<u16, ProbeFailure>;
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Builds the reqwest client from the probe options.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be built.
    pub fn from_args(args: &ProbeArgs) -> Result<Self, HttpError> {
        let mut client_builder = Client::builder()
            .timeout(args.request_timeout)
            .connect_timeout(args.connect_timeout);

        if !args.no_ua {
            client_builder = client_builder.user_agent(DEFAULT_USER_AGENT);
        }

        let client = client_builder
            .build()
            .map_err(|err| HttpError::BuildClientFailed { source: err })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &Url) -> Result<u16, ProbeFailure> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(classify_error)?;
        let status = response.status().as_u16();
        let bytes = drain_response_body(response)
            .await
            .map_err(classify_error)?;
        debug!("GET {} -> {} ({} bytes)", url, status, bytes);
        Ok(status)
    }
}

fn classify_error(err: reqwest::Error) -> ProbeFailure {
    if err.is_timeout() {
        ProbeFailure::Timeout
    } else {
        ProbeFailure::Transport {
            detail: err.to_string(),
        }
    }
}

async fn drain_response_body(response: reqwest::Response) -> Result<u64, reqwest::Error> {
    let mut stream = response.bytes_stream();
    let mut total_bytes: u64 = 0;
    while let Some(chunk) = stream.next().await {
        let bytes = chunk?;
        total_bytes = total_bytes.saturating_add(u64::try_from(bytes.len()).unwrap_or(u64::MAX));
    }
    Ok(total_bytes)
}
