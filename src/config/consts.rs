// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Largest file image the renderer runtime can address.
///
/// The runtime allocator takes a signed 32-bit length, so this is the hard
/// bound checked before any chunk planning or allocation.
pub const MAX_IMAGE_SIZE: u64 = i32::MAX as u64;
/// Default transfer chunk size (4 MiB)
pub const DEFAULT_CHUNK_SIZE: usize = 4 * 1024 * 1024;
/// Maximum allowed renderer module size (16 MB)
pub const MAX_MODULE_SIZE: usize = 16 * 1024 * 1024;
/// Default fuel level for WASM execution (100 million instructions)
pub const DEFAULT_FUEL_LEVEL: u64 = 100_000_000;
/// Minimum allowed fuel level (1 million instructions)
pub const MIN_FUEL_LEVEL: u64 = 1_000_000;
/// Maximum allowed fuel level (500 million instructions) - security limit
pub const MAX_FUEL_LEVEL: u64 = 500_000_000;
