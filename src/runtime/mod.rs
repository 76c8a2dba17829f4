// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Wasmtime host for the renderer module.
//!
//! The renderer ships as a core WASM module with C-style exports
//! (`memory`, `allocate`, `deallocate`, `load_file_image`, plus the scene
//! calls). This module loads it, meters it with fuel, and adapts it to the
//! `RenderRuntime` seam the staging layer consumes.

mod loader;
mod renderer;

pub use loader::load_module_bytes;
pub use renderer::WasmRenderer;
