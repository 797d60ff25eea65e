//! HTTP client module
//!
//! Thin wrapper over `reqwest` used by the page source.
//!
//! # Features
//!
//! - **Base URL joining**: relative paths resolve against a configured base
//! - **Status classification**: non-2xx responses become [`Error::HttpStatus`](crate::Error::HttpStatus)
//!
//! Requests are sent exactly once; there is no retry or rate limiting.

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};

#[cfg(test)]
mod tests;
