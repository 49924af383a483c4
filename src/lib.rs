//! Core library for the `latprobe` CLI.
//!
//! `latprobe` times a sequence of HTTP GET requests against one endpoint and
//! reports mean, median, best and worst round-trip latency. The library
//! splits that into argument and config handling, an HTTP transport behind
//! the [`http::Transport`] trait, the sequential [`sampler`], and pure
//! statistics in [`metrics`]; the binary only wires them together.
pub mod args;
pub mod config;
pub mod error;
pub mod http;
pub mod metrics;
pub mod sampler;

mod app;
mod entry;
mod logger;

pub use entry::run;
