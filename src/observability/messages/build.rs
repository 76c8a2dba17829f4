// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for build submission and artifact lifecycle events.

use std::fmt::{Display, Formatter};

/// Build request submitted to the build service.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use wasm_studio::observability::messages::build::BuildSubmitted;
///
/// let msg = BuildSubmitted {
///     server: "http://localhost:8080",
///     config: "Release",
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct BuildSubmitted<'a> {
    pub server: &'a str,
    pub config: &'a str,
}

impl Display for BuildSubmitted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Submitted {} build to {}",
            self.config, self.server
        )
    }
}

/// Build service compiled the sources and produced an artifact.
///
/// # Log Level
/// `info!` - Important operational event
pub struct CompileSucceeded<'a> {
    pub id: &'a str,
}

impl Display for CompileSucceeded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Compilation succeeded, artifact id {}", self.id)
    }
}

/// Build service reported a compile failure.
///
/// # Log Level
/// `info!` - Expected outcome, not a client fault
pub struct CompileFailed<'a> {
    pub server: &'a str,
}

impl Display for CompileFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Compilation failed on {}", self.server)
    }
}

/// Build flow aborted on a transport-level fault.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use wasm_studio::observability::messages::build::BuildTransportFailed;
///
/// let error = std::io::Error::other("connection refused");
/// let msg = BuildTransportFailed {
///     server: "http://localhost:8080",
///     error: &error,
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct BuildTransportFailed<'a> {
    pub server: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for BuildTransportFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Build request to {} failed: {}",
            self.server, self.error
        )
    }
}

/// Ephemeral build artifact fetched from the build service.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ArtifactFetched<'a> {
    pub id: &'a str,
    pub size_bytes: usize,
}

impl Display for ArtifactFetched<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Fetched artifact {} ({} bytes)",
            self.id, self.size_bytes
        )
    }
}

/// Artifact delete failed after a successful fetch.
///
/// The artifact stays orphaned server-side; cleanup is best-effort and the
/// delete is never retried.
///
/// # Log Level
/// `warn!` - Degraded but accepted outcome
///
/// # Example
/// ```
/// use wasm_studio::observability::messages::build::ArtifactDeleteFailed;
///
/// let error = std::io::Error::other("status 500");
/// let msg = ArtifactDeleteFailed {
///     id: "abc123",
///     error: &error,
/// };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct ArtifactDeleteFailed<'a> {
    pub id: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for ArtifactDeleteFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Failed to delete artifact {} (left orphaned): {}",
            self.id, self.error
        )
    }
}
