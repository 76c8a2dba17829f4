// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for file staging lifecycle events.

use std::fmt::{Display, Formatter};

/// File staging into runtime memory started.
pub struct FileStagingStarted<'a> {
    pub name: &'a str,
    pub size_bytes: u64,
    pub chunk_count: usize,
}

impl Display for FileStagingStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Staging '{}' into runtime memory: {} bytes in {} chunks",
            self.name, self.size_bytes, self.chunk_count
        )
    }
}

/// File staging completed and the image was handed to the renderer.
pub struct FileStagingCompleted<'a> {
    pub name: &'a str,
    pub size_bytes: u64,
}

impl Display for FileStagingCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded '{}' ({} bytes) into the renderer",
            self.name, self.size_bytes
        )
    }
}

/// File staging aborted.
pub struct FileStagingFailed<'a> {
    pub name: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for FileStagingFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Failed to stage '{}': {}", self.name, self.error)
    }
}

/// Staging buffer release failed on a cleanup path.
///
/// # Log Level
/// `warn!` - The buffer leaks in the runtime's address space, but the
/// original failure is the one surfaced to the caller.
pub struct StagingReleaseFailed<'a> {
    pub ptr: u32,
    pub error: &'a dyn std::error::Error,
}

impl Display for StagingReleaseFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Failed to release staging buffer at {:#x}: {}",
            self.ptr, self.error
        )
    }
}
