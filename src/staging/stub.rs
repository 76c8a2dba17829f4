// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Test doubles for staging (only available in test builds).
//!
//! * `StubRuntime` - in-memory `RenderRuntime` that counts allocations,
//!   releases, and renderer calls
//! * `FlakySource` - chunk source that fails at a chosen chunk index
//! * `TruncatingSource` - chunk source that returns short reads

use crate::chunk::{ChunkSource, ChunkSpec};
use crate::errors::{StagingError, StagingResult};
use crate::traits::RenderRuntime;
use async_trait::async_trait;
use std::collections::HashMap;

pub(crate) struct StubRuntime {
    heap: Vec<u8>,
    next_ptr: u32,
    live: HashMap<u32, usize>,
    pub allocations: usize,
    pub releases: usize,
    pub loaded: Vec<(String, u32, usize)>,
    pub scene_clears: usize,
    pub view_resets: usize,
    pub renders: usize,
    pub fail_allocations: bool,
}

impl StubRuntime {
    pub fn new() -> Self {
        Self {
            heap: Vec::new(),
            // Keep the null pointer unallocatable, like a real allocator.
            next_ptr: 8,
            live: HashMap::new(),
            allocations: 0,
            releases: 0,
            loaded: Vec::new(),
            scene_clears: 0,
            view_resets: 0,
            renders: 0,
            fail_allocations: false,
        }
    }

    pub fn region(&self, ptr: u32, len: usize) -> &[u8] {
        &self.heap[ptr as usize..ptr as usize + len]
    }
}

impl RenderRuntime for StubRuntime {
    fn allocate(&mut self, size: usize) -> StagingResult<u32> {
        if self.fail_allocations {
            return Err(StagingError::Allocation(
                "stub allocator exhausted".to_string(),
            ));
        }
        let ptr = self.next_ptr;
        let end = ptr as usize + size;
        if self.heap.len() < end {
            self.heap.resize(end, 0);
        }
        self.live.insert(ptr, size);
        self.allocations += 1;
        self.next_ptr += size.max(1) as u32;
        Ok(ptr)
    }

    fn write(&mut self, ptr: u32, offset: usize, bytes: &[u8]) -> StagingResult<()> {
        let size = *self.live.get(&ptr).ok_or_else(|| {
            StagingError::Memory(format!("write to unallocated pointer {:#x}", ptr))
        })?;
        if offset + bytes.len() > size {
            return Err(StagingError::Memory(format!(
                "write of {} bytes at offset {} overruns region of {} bytes",
                bytes.len(),
                offset,
                size
            )));
        }
        let start = ptr as usize + offset;
        self.heap[start..start + bytes.len()].copy_from_slice(bytes);
        Ok(())
    }

    fn release(&mut self, ptr: u32) -> StagingResult<()> {
        self.live.remove(&ptr).ok_or_else(|| {
            StagingError::Memory(format!("release of unallocated pointer {:#x}", ptr))
        })?;
        self.releases += 1;
        Ok(())
    }

    fn load_file_image(&mut self, name: &str, ptr: u32, len: usize) -> StagingResult<()> {
        self.loaded.push((name.to_string(), ptr, len));
        Ok(())
    }

    fn clear_scene(&mut self) -> StagingResult<()> {
        self.scene_clears += 1;
        Ok(())
    }

    fn reset_view(&mut self) -> StagingResult<()> {
        self.view_resets += 1;
        Ok(())
    }

    fn render(&mut self) -> StagingResult<()> {
        self.renders += 1;
        Ok(())
    }
}

pub(crate) struct FlakySource {
    bytes: Vec<u8>,
    fail_at: usize,
    reads: usize,
}

impl FlakySource {
    pub fn new(bytes: Vec<u8>, fail_at: usize) -> Self {
        Self {
            bytes,
            fail_at,
            reads: 0,
        }
    }
}

#[async_trait]
impl ChunkSource for FlakySource {
    fn total_size(&self) -> u64 {
        self.bytes.len() as u64
    }

    async fn read_chunk(&mut self, chunk: &ChunkSpec) -> StagingResult<Vec<u8>> {
        let index = self.reads;
        self.reads += 1;
        if index == self.fail_at {
            return Err(StagingError::ChunkRead(
                "stub source dropped the stream".to_string(),
            ));
        }
        let start = chunk.offset as usize;
        Ok(self.bytes[start..start + chunk.length as usize].to_vec())
    }
}

pub(crate) struct TruncatingSource {
    bytes: Vec<u8>,
}

impl TruncatingSource {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

#[async_trait]
impl ChunkSource for TruncatingSource {
    fn total_size(&self) -> u64 {
        self.bytes.len() as u64
    }

    async fn read_chunk(&mut self, chunk: &ChunkSpec) -> StagingResult<Vec<u8>> {
        let start = chunk.offset as usize;
        let end = start + (chunk.length as usize) / 2;
        Ok(self.bytes[start..end].to_vec())
    }
}
