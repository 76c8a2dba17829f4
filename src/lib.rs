// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod chunk;      // blob partitioning + chunk sources
pub mod client;     // remote build service client
pub mod config;     // config + consts
pub mod errors;     // error handling
pub mod observability;
pub mod runtime;    // wasmtime renderer host
pub mod staging;    // runtime memory staging
pub mod traits;     // unified abstractions
