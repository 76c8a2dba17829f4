// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Error types for hosting the renderer module.
//!
//! These cover faults establishing the runtime itself - loading the module
//! bytes, compiling, instantiating, and resolving the expected exports -
//! before any staging begins.

use thiserror::Error;

/// Error type for renderer module loading and instantiation.
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// File I/O error while reading the module from disk.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Module failed to compile or instantiate.
    #[error("invalid renderer module: {0}")]
    Module(String),

    /// Module does not export a required symbol with the expected shape.
    #[error("renderer module must export '{0}'")]
    MissingExport(&'static str),

    /// Wasmtime engine creation or configuration error.
    #[error("engine creation error: {0}")]
    Engine(String),

    /// Wasmtime runtime execution error.
    #[error("WASM execution error: {0}")]
    Execution(#[from] wasmtime::Error),

    /// Input validation error (size limits, format, etc.).
    #[error("invalid module: {0}")]
    Validation(String),
}

/// Result type alias for runtime operations.
pub type RuntimeResult<T> = Result<T, RuntimeError>;
