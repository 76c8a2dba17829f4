// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::chunk::{ChunkSource, ChunkSpec};
use crate::config::consts::MAX_IMAGE_SIZE;
use crate::errors::{StagingError, StagingResult};
use crate::staging::StagingBuffer;
use crate::traits::RenderRuntime;

/// Copy `chunks` into a freshly allocated runtime buffer of `total_size`
/// bytes and hand the populated buffer to `sink` exactly once.
///
/// Chunks are copied strictly in the order given. Each copy awaits the
/// chunk's materialization first, so the destination only ever sees whole
/// chunks at their planned offsets; there is no internal synchronization
/// in the destination to tolerate anything else. The buffer is released
/// on every exit path.
///
/// A blob of zero bytes skips the allocator entirely: the sink sees a
/// null pointer and zero length.
pub async fn stage<R, S, F, T>(
    runtime: &mut R,
    source: &mut S,
    chunks: &[ChunkSpec],
    total_size: u64,
    sink: F,
) -> StagingResult<T>
where
    R: RenderRuntime + ?Sized,
    S: ChunkSource + ?Sized,
    F: FnOnce(&mut R, u32, usize) -> StagingResult<T>,
{
    if total_size > MAX_IMAGE_SIZE {
        return Err(StagingError::SizeLimit {
            size: total_size,
            max: MAX_IMAGE_SIZE,
        });
    }
    if total_size == 0 {
        return sink(runtime, 0, 0);
    }

    let capacity = total_size as usize;
    let mut buffer = StagingBuffer::acquire(runtime, capacity)?;

    for chunk in chunks {
        let bytes = source.read_chunk(chunk).await?;
        if bytes.len() as u64 != chunk.length {
            return Err(StagingError::ChunkRead(format!(
                "chunk at offset {} produced {} bytes, expected {}",
                chunk.offset,
                bytes.len(),
                chunk.length
            )));
        }
        buffer.push(&bytes)?;
    }

    if buffer.cursor() != buffer.capacity() {
        return Err(StagingError::ChunkRead(format!(
            "chunks covered {} of {} bytes",
            buffer.cursor(),
            buffer.capacity()
        )));
    }

    buffer.hand_off(sink)
}
