//! # reglens-client
//!
//! HTTP client for the RegLens metrics API.
//!
//! One read call per page load: the client fetches the complete agency
//! snapshot and hands it to the view-model. Non-2xx statuses and transport
//! failures both collapse into [`reglens_core::Error::FetchFailed`] with a
//! human-readable message; there is no retry, backoff, or cancellation.
//!
//! The API base URL is always a constructor parameter — deployment config
//! injects it, nothing is hardcoded.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod client;

pub use client::RegLensClient;
