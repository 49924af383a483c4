//! HTTP transport used by the sampler.
mod transport;

#[cfg(test)]
mod tests;

pub use transport::{HttpTransport, Transport};
