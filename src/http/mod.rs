//! HTTP transport
//!
//! A thin client over `reqwest` for the sequential page fetches. There is
//! deliberately no retry, backoff or rate limiting at this layer: a single
//! failed call aborts the whole pagination sequence for that stream.

mod client;

pub use client::{HttpClient, HttpClientConfig};

#[cfg(test)]
mod tests;
