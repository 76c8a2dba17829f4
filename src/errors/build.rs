// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Error types for the remote build service client.

use thiserror::Error;

/// Errors that can occur when talking to the build service.
#[derive(Error, Debug)]
pub enum BuildError {
    /// HTTP request failed at the transport level.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Build service returned a non-success status.
    ///
    /// The response body is not assumed to be parseable in this case.
    #[error("build service returned status {status}")]
    Status { status: u16 },

    /// Response body did not match either build result shape.
    #[error("failed to decode build response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Server URL is not an http(s) URL.
    #[error("invalid server URL: {0}")]
    InvalidUrl(String),

    /// A build submission is already in flight on this client.
    #[error("a build is already in flight")]
    BuildInFlight,

    /// Two sources in a bundle share the same file name.
    #[error("duplicate source name in bundle: {0}")]
    DuplicateSource(String),
}
