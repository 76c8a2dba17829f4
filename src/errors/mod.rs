// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod build;
mod config;
mod runtime;
mod staging;

pub use build::BuildError;
pub use config::ConfigError;
pub use runtime::{RuntimeError, RuntimeResult};
pub use staging::{StagingError, StagingResult};
