// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Chunk byte sources.
//!
//! A `ChunkSource` materializes the bytes behind a `ChunkSpec`. Reads are
//! async because a source may sit on a streaming backend; the staging
//! layer awaits each chunk before copying it, so bytes are only ever held
//! for one chunk at a time.

use crate::chunk::ChunkSpec;
use crate::errors::{StagingError, StagingResult};
use async_trait::async_trait;
use std::io::SeekFrom;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncSeekExt};

#[async_trait]
pub trait ChunkSource: Send {
    /// Total size of the underlying blob in bytes.
    fn total_size(&self) -> u64;

    /// Materialize the bytes for one chunk.
    ///
    /// Implementations must return exactly `chunk.length` bytes; the
    /// staging layer treats any other count as a read failure.
    async fn read_chunk(&mut self, chunk: &ChunkSpec) -> StagingResult<Vec<u8>>;
}

/// A blob already resident in memory.
pub struct MemoryBlob {
    bytes: Vec<u8>,
}

impl MemoryBlob {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

#[async_trait]
impl ChunkSource for MemoryBlob {
    fn total_size(&self) -> u64 {
        self.bytes.len() as u64
    }

    async fn read_chunk(&mut self, chunk: &ChunkSpec) -> StagingResult<Vec<u8>> {
        let start = chunk.offset as usize;
        let end = start
            .checked_add(chunk.length as usize)
            .filter(|end| *end <= self.bytes.len())
            .ok_or_else(|| {
                StagingError::ChunkRead(format!(
                    "chunk at offset {} with length {} is outside the blob ({} bytes)",
                    chunk.offset,
                    chunk.length,
                    self.bytes.len()
                ))
            })?;
        Ok(self.bytes[start..end].to_vec())
    }
}

/// A blob backed by a file on disk.
pub struct FileBlob {
    file: File,
    size: u64,
}

impl FileBlob {
    /// Open a file for chunked reading.
    pub async fn open<P: AsRef<Path>>(path: P) -> StagingResult<Self> {
        let file = File::open(path.as_ref()).await?;
        let size = file.metadata().await?.len();
        Ok(Self { file, size })
    }
}

#[async_trait]
impl ChunkSource for FileBlob {
    fn total_size(&self) -> u64 {
        self.size
    }

    async fn read_chunk(&mut self, chunk: &ChunkSpec) -> StagingResult<Vec<u8>> {
        self.file
            .seek(SeekFrom::Start(chunk.offset))
            .await
            .map_err(|e| {
                StagingError::ChunkRead(format!("seek to offset {} failed: {}", chunk.offset, e))
            })?;

        let mut bytes = vec![0u8; chunk.length as usize];
        self.file.read_exact(&mut bytes).await.map_err(|e| {
            StagingError::ChunkRead(format!("read at offset {} failed: {}", chunk.offset, e))
        })?;
        Ok(bytes)
    }
}
