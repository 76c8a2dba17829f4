// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Error types for file staging operations.
//!
//! Covers the whole path of a local file into runtime memory: planning the
//! chunk layout, materializing chunk bytes, allocating and filling the
//! staging buffer, and handing the finished image to its consumer. All
//! errors implement `std::error::Error` via the `thiserror` crate.

use thiserror::Error;

/// Error type for chunk planning and memory staging.
#[derive(Error, Debug)]
pub enum StagingError {
    /// Blob size exceeds the runtime's addressable range.
    ///
    /// Raised before any allocation or copy takes place.
    #[error("file too large for runtime memory: {size} bytes (max: {max} bytes)")]
    SizeLimit { size: u64, max: u64 },

    /// Chunk size of zero requested from the planner.
    #[error("chunk size must be non-zero")]
    InvalidChunkSize,

    /// Destination buffer could not be obtained from the runtime allocator.
    #[error("allocation failed: {0}")]
    Allocation(String),

    /// A chunk's bytes could not be materialized.
    #[error("chunk read failed: {0}")]
    ChunkRead(String),

    /// A write would move the staging cursor past the buffer capacity.
    #[error("write of {requested} bytes at cursor {cursor} exceeds capacity {capacity}")]
    CapacityExceeded {
        cursor: usize,
        requested: usize,
        capacity: usize,
    },

    /// Memory write or release error in runtime linear memory.
    #[error("memory error: {0}")]
    Memory(String),

    /// Runtime call failed while driving the renderer.
    #[error("runtime error: {0}")]
    Runtime(String),

    /// The consumer rejected the fully staged file image.
    #[error("file image rejected: {0}")]
    Consumer(String),

    /// File I/O error while opening or inspecting a blob source.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for staging operations.
pub type StagingResult<T> = Result<T, StagingError>;
