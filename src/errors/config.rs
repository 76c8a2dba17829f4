// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors raised while loading or validating a studio configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid YAML for the expected schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Config parsed but failed semantic validation.
    #[error("configuration validation failed:\n{0}")]
    Validation(String),
}
