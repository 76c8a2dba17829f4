// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::client::BuildConfig;
use crate::config::consts::{
    DEFAULT_CHUNK_SIZE, DEFAULT_FUEL_LEVEL, MAX_FUEL_LEVEL, MAX_IMAGE_SIZE, MIN_FUEL_LEVEL,
};
use crate::errors::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Main configuration structure for the studio.
///
/// This struct represents the complete configuration for one studio session:
/// where to send build requests, which toolchain image compiles them, and
/// how local files are transferred into the renderer runtime. It is
/// typically loaded from a YAML configuration file.
///
/// # Fields
/// * `server` - Base URL of the build service
/// * `image` - Toolchain image used by the build service
/// * `config` - Build configuration sent with each request
/// * `chunk_size` - Transfer chunk size for local file loads, in bytes
/// * `timeout_seconds` - HTTP timeout for build service requests (optional)
/// * `wasm` - Renderer runtime options (optional)
///
/// # Example
/// ```yaml
/// server: http://localhost:8080
/// image:
///   repository: kitware/vtk-wasm-sdk
///   tag: wasm32-v9.4.1
/// config: Release
/// chunk_size: 4194304
/// wasm:
///   fuel:
///     default: 100000000
/// ```
#[derive(Debug, Deserialize)]
pub struct StudioConfig {
    #[serde(default = "default_server")]
    pub server: String,
    #[serde(default)]
    pub image: ImageSection,
    #[serde(default)]
    pub config: BuildConfig,
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
    pub timeout_seconds: Option<u64>,
    #[serde(default)]
    pub wasm: WasmSection,
}

fn default_server() -> String {
    "http://localhost:8080".to_string()
}

fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

/// Toolchain image coordinates sent with each build request.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageSection {
    pub repository: String,
    pub tag: String,
}

impl Default for ImageSection {
    fn default() -> Self {
        Self {
            repository: "kitware/vtk-wasm-sdk".to_string(),
            tag: "latest".to_string(),
        }
    }
}

/// Renderer runtime options.
#[derive(Debug, Deserialize)]
pub struct WasmSection {
    #[serde(default)]
    pub fuel: FuelConfig,
}

impl Default for WasmSection {
    fn default() -> Self {
        Self {
            fuel: FuelConfig::default(),
        }
    }
}

/// Fuel consumption configuration for the renderer runtime.
///
/// Fuel limits prevent infinite loops and resource exhaustion by limiting
/// the number of instructions the renderer module can execute. All values
/// are optional and validated against security bounds.
///
/// # Fields
/// * `default` - Default fuel level (defaults to 100M)
/// * `minimum` - Minimum allowed fuel level (defaults to 1M)
/// * `maximum` - Maximum allowed fuel level (defaults to 500M) - security limit
#[derive(Debug, Deserialize)]
pub struct FuelConfig {
    pub default: Option<u64>,
    pub minimum: Option<u64>,
    pub maximum: Option<u64>,
}

impl Default for FuelConfig {
    fn default() -> Self {
        Self {
            default: None,
            minimum: None,
            maximum: None,
        }
    }
}

impl FuelConfig {
    /// Get the default fuel level, using the built-in default if not configured.
    pub fn get_default(&self) -> u64 {
        self.default.unwrap_or(DEFAULT_FUEL_LEVEL)
    }

    /// Get the minimum fuel level, using the built-in default if not configured.
    pub fn get_minimum(&self) -> u64 {
        self.minimum.unwrap_or(MIN_FUEL_LEVEL)
    }

    /// Get the maximum fuel level, using the built-in default if not configured.
    pub fn get_maximum(&self) -> u64 {
        self.maximum.unwrap_or(MAX_FUEL_LEVEL)
    }

    /// Validate and clamp a fuel level to configured bounds.
    pub fn validate_and_clamp(&self, requested: u64) -> u64 {
        let min = self.get_minimum();
        let max = self.get_maximum();

        requested.clamp(min, max)
    }
}

/// Load a config from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<StudioConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let cfg: StudioConfig = serde_yaml::from_str(&content)?;
    Ok(cfg)
}

/// Load and validate a config from a YAML file
///
/// This function loads the configuration and validates the values that the
/// rest of the crate assumes are well formed: a usable server URL, a
/// non-zero chunk size within the runtime's addressable range, non-empty
/// image coordinates, and consistent fuel bounds.
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<StudioConfig, ConfigError> {
    let cfg = load_config(path)?;

    let errors = validate_config(&cfg);
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.join("\n")));
    }

    Ok(cfg)
}

fn validate_config(cfg: &StudioConfig) -> Vec<String> {
    let mut errors = Vec::new();

    if !cfg.server.starts_with("http://") && !cfg.server.starts_with("https://") {
        errors.push(format!(
            "server must be an http:// or https:// URL, got '{}'",
            cfg.server
        ));
    }
    if cfg.chunk_size == 0 {
        errors.push("chunk_size must be non-zero".to_string());
    }
    if cfg.chunk_size as u64 > MAX_IMAGE_SIZE {
        errors.push(format!(
            "chunk_size {} exceeds the runtime's addressable range ({})",
            cfg.chunk_size, MAX_IMAGE_SIZE
        ));
    }
    if cfg.image.repository.is_empty() {
        errors.push("image.repository must not be empty".to_string());
    }
    if cfg.image.tag.is_empty() {
        errors.push("image.tag must not be empty".to_string());
    }
    if cfg.wasm.fuel.get_minimum() > cfg.wasm.fuel.get_maximum() {
        errors.push(format!(
            "fuel minimum {} exceeds maximum {}",
            cfg.wasm.fuel.get_minimum(),
            cfg.wasm.fuel.get_maximum()
        ));
    }

    errors
}
