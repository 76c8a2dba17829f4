// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Blob partitioning.
//!
//! `chunkify` splits a byte blob into an ordered sequence of size-bounded
//! chunks. The partition is exact: chunks are contiguous, non-overlapping,
//! and their lengths sum to the blob size. Consumers rely on the ordering
//! (the staging layer copies chunks strictly in this order).

mod source;

pub use source::{ChunkSource, FileBlob, MemoryBlob};

use crate::config::consts::MAX_IMAGE_SIZE;
use crate::errors::{StagingError, StagingResult};

/// One contiguous slice of a larger byte sequence.
///
/// Carries only the layout; bytes are materialized lazily through a
/// [`ChunkSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkSpec {
    /// Offset of this chunk in the original blob.
    pub offset: u64,
    /// Number of bytes covered by this chunk.
    pub length: u64,
}

/// Split a blob of `total_size` bytes into chunks of at most `chunk_size`
/// bytes.
///
/// The final chunk is short when `total_size` is not a multiple of
/// `chunk_size`; a zero-size blob yields an empty sequence. Sizes beyond
/// the runtime's addressable range fail with `SizeLimit` before any
/// arithmetic - the overflow never reaches a chunk count.
pub fn chunkify(total_size: u64, chunk_size: usize) -> StagingResult<Vec<ChunkSpec>> {
    if chunk_size == 0 {
        return Err(StagingError::InvalidChunkSize);
    }
    if total_size > MAX_IMAGE_SIZE {
        return Err(StagingError::SizeLimit {
            size: total_size,
            max: MAX_IMAGE_SIZE,
        });
    }

    let chunk_size = chunk_size as u64;
    let num_chunks = total_size.div_ceil(chunk_size);
    let mut chunks = Vec::with_capacity(num_chunks as usize);
    for i in 0..num_chunks {
        let offset = i * chunk_size;
        let length = chunk_size.min(total_size - offset);
        chunks.push(ChunkSpec { offset, length });
    }
    Ok(chunks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partitions_example_blob() {
        let chunks = chunkify(10_000, 4_096).unwrap();

        assert_eq!(chunks.len(), 3);
        assert_eq!(
            chunks,
            vec![
                ChunkSpec {
                    offset: 0,
                    length: 4_096
                },
                ChunkSpec {
                    offset: 4_096,
                    length: 4_096
                },
                ChunkSpec {
                    offset: 8_192,
                    length: 1_808
                },
            ]
        );
    }

    #[test]
    fn zero_size_blob_yields_no_chunks() {
        assert!(chunkify(0, 4_096).unwrap().is_empty());
    }

    #[test]
    fn exact_multiple_has_no_short_chunk() {
        let chunks = chunkify(8_192, 4_096).unwrap();
        assert_eq!(chunks.len(), 2);
        assert!(chunks.iter().all(|c| c.length == 4_096));
    }

    #[test]
    fn blob_smaller_than_chunk_size_is_one_chunk() {
        let chunks = chunkify(10, 4_096).unwrap();
        assert_eq!(chunks, vec![ChunkSpec { offset: 0, length: 10 }]);
    }

    #[test]
    fn partition_is_exact_for_assorted_sizes() {
        for total in [1u64, 7, 100, 4_095, 4_096, 4_097, 1_000_000] {
            for chunk_size in [1usize, 3, 512, 4_096] {
                let chunks = chunkify(total, chunk_size).unwrap();

                assert_eq!(chunks.len() as u64, total.div_ceil(chunk_size as u64));
                assert_eq!(chunks.iter().map(|c| c.length).sum::<u64>(), total);

                // Each offset equals the sum of the preceding lengths.
                let mut expected_offset = 0u64;
                for chunk in &chunks {
                    assert_eq!(chunk.offset, expected_offset);
                    assert!(chunk.length <= chunk_size as u64);
                    assert!(chunk.length > 0);
                    expected_offset += chunk.length;
                }
            }
        }
    }

    #[test]
    fn oversized_blob_fails_fast() {
        let result = chunkify(MAX_IMAGE_SIZE + 1, 4_096);

        match result {
            Err(StagingError::SizeLimit { size, max }) => {
                assert_eq!(size, MAX_IMAGE_SIZE + 1);
                assert_eq!(max, MAX_IMAGE_SIZE);
            }
            other => panic!("expected SizeLimit, got {:?}", other),
        }
    }

    #[test]
    fn size_at_limit_is_accepted() {
        // Layout only - no allocation happens here, so the full range is fine.
        let chunks = chunkify(MAX_IMAGE_SIZE, 1 << 30).unwrap();
        assert_eq!(chunks.iter().map(|c| c.length).sum::<u64>(), MAX_IMAGE_SIZE);
    }

    #[test]
    fn zero_chunk_size_is_rejected() {
        assert!(matches!(
            chunkify(100, 0),
            Err(StagingError::InvalidChunkSize)
        ));
    }
}
