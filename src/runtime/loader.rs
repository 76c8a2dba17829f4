// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Renderer module loading and validation
//!
//! This module handles reading the renderer binary from disk and
//! performing basic size validation. It does not parse or analyze the
//! binary format - wasmtime does that at compile time.

use crate::config::consts::MAX_MODULE_SIZE;
use crate::errors::{RuntimeError, RuntimeResult};
use crate::observability::messages::runtime::{ModuleLoadFailed, ModuleLoaded};
use std::path::Path;

/// Loads renderer module bytes from a file and validates the size
///
/// Reads the entire binary into memory and checks that it doesn't exceed
/// the maximum allowed size. Compilation and export checks happen later in
/// `WasmRenderer::from_bytes`.
pub fn load_module_bytes<P: AsRef<Path>>(path: P) -> RuntimeResult<Vec<u8>> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| {
        let error = RuntimeError::Io(e);
        tracing::error!(
            "{}",
            ModuleLoadFailed {
                module_path: &path.display().to_string(),
                error: &error,
            }
        );
        error
    })?;

    if bytes.len() > MAX_MODULE_SIZE {
        let error = RuntimeError::Validation(format!(
            "renderer module too large: {} bytes (max: {} bytes)",
            bytes.len(),
            MAX_MODULE_SIZE
        ));
        tracing::error!(
            "{}",
            ModuleLoadFailed {
                module_path: &path.display().to_string(),
                error: &error,
            }
        );
        return Err(error);
    }

    tracing::info!(
        "{}",
        ModuleLoaded {
            module_path: &path.display().to_string(),
            size_bytes: bytes.len(),
        }
    );

    Ok(bytes)
}
