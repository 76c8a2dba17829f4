// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Narrow interface onto the in-process rendering runtime.
//!
//! The staging layer consumes this interface but does not implement the
//! runtime behind it. The crate ships one implementation backed by
//! wasmtime (`runtime::WasmRenderer`); tests substitute an in-memory
//! double. Pointers handed out by `allocate` are runtime addresses - they
//! are only meaningful when passed back through this same interface.

use crate::errors::StagingResult;

pub trait RenderRuntime {
    /// Allocate `size` bytes in the runtime's address space.
    ///
    /// Returns the base pointer of the new region. A null pointer is a
    /// valid return value here and is treated as an allocation failure by
    /// the staging layer.
    fn allocate(&mut self, size: usize) -> StagingResult<u32>;

    /// Write `bytes` into the region at `ptr + offset`.
    fn write(&mut self, ptr: u32, offset: usize, bytes: &[u8]) -> StagingResult<()>;

    /// Return the region at `ptr` to the runtime allocator.
    fn release(&mut self, ptr: u32) -> StagingResult<()>;

    /// Interpret the region at `ptr` as a file image named `name`.
    fn load_file_image(&mut self, name: &str, ptr: u32, len: usize) -> StagingResult<()>;

    /// Remove all loaded geometry from the scene.
    fn clear_scene(&mut self) -> StagingResult<()>;

    /// Reset the camera to frame the loaded scene.
    fn reset_view(&mut self) -> StagingResult<()>;

    /// Render one frame.
    fn render(&mut self) -> StagingResult<()>;
}
