// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for renderer module loading events.

use std::fmt::{Display, Formatter};

/// Renderer module loaded successfully.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use wasm_studio::observability::messages::runtime::ModuleLoaded;
///
/// let msg = ModuleLoaded {
///     module_path: "renderer/vtk_renderer.wasm",
///     size_bytes: 4096,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct ModuleLoaded<'a> {
    pub module_path: &'a str,
    pub size_bytes: usize,
}

impl Display for ModuleLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded renderer module: {} ({} bytes)",
            self.module_path, self.size_bytes
        )
    }
}

/// Renderer module loading failed.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use wasm_studio::observability::messages::runtime::ModuleLoadFailed;
///
/// let error = std::io::Error::other("file not found");
/// let msg = ModuleLoadFailed {
///     module_path: "renderer/missing.wasm",
///     error: &error,
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct ModuleLoadFailed<'a> {
    pub module_path: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for ModuleLoadFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Failed to load renderer module '{}': {}",
            self.module_path, self.error
        )
    }
}
