// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::{StagingError, StagingResult};
use crate::observability::messages::staging::StagingReleaseFailed;
use crate::traits::RenderRuntime;

/// A capacity-bounded, single-owner region of runtime memory.
///
/// The buffer owns its region for the duration of one stage operation: it
/// is acquired from the runtime allocator, filled through a monotonically
/// advancing write cursor, and released exactly once. Writes that would
/// move the cursor past capacity are rejected before touching runtime
/// memory. The raw base pointer never leaves this type except into the
/// sink it hands off to once fully populated.
pub struct StagingBuffer<'r, R: RenderRuntime + ?Sized> {
    runtime: &'r mut R,
    ptr: u32,
    capacity: usize,
    cursor: usize,
    released: bool,
}

impl<'r, R: RenderRuntime + ?Sized> StagingBuffer<'r, R> {
    /// Allocate a region of exactly `capacity` bytes.
    ///
    /// A null pointer from the runtime allocator is an allocation failure;
    /// callers never see a buffer they cannot write to.
    pub(crate) fn acquire(runtime: &'r mut R, capacity: usize) -> StagingResult<Self> {
        let ptr = runtime.allocate(capacity)?;
        if ptr == 0 {
            return Err(StagingError::Allocation(format!(
                "runtime allocator returned a null pointer for {} bytes",
                capacity
            )));
        }
        Ok(Self {
            runtime,
            ptr,
            capacity,
            cursor: 0,
            released: false,
        })
    }

    /// Append `bytes` at the current cursor, advancing it on success.
    pub fn push(&mut self, bytes: &[u8]) -> StagingResult<()> {
        let end = self
            .cursor
            .checked_add(bytes.len())
            .filter(|end| *end <= self.capacity)
            .ok_or(StagingError::CapacityExceeded {
                cursor: self.cursor,
                requested: bytes.len(),
                capacity: self.capacity,
            })?;
        self.runtime.write(self.ptr, self.cursor, bytes)?;
        self.cursor = end;
        Ok(())
    }

    /// Bytes written so far.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Total capacity of the region.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Hand the fully populated region to `sink`, then release it.
    ///
    /// The sink runs exactly once. If it fails, the drop guard still
    /// returns the region to the allocator; if it succeeds, the release
    /// happens eagerly and a release fault surfaces to the caller.
    pub(crate) fn hand_off<T, F>(mut self, sink: F) -> StagingResult<T>
    where
        F: FnOnce(&mut R, u32, usize) -> StagingResult<T>,
    {
        let result = sink(&mut *self.runtime, self.ptr, self.capacity)?;
        self.released = true;
        let ptr = self.ptr;
        self.runtime.release(ptr)?;
        Ok(result)
    }
}

impl<R: RenderRuntime + ?Sized> Drop for StagingBuffer<'_, R> {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        if let Err(error) = self.runtime.release(self.ptr) {
            tracing::warn!(
                "{}",
                StagingReleaseFailed {
                    ptr: self.ptr,
                    error: &error,
                }
            );
        }
    }
}
