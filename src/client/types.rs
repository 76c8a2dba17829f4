// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Wire types for the build service.

use crate::errors::BuildError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::{Display, Formatter};

/// Build configuration passed to the compile toolchain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuildConfig {
    Debug,
    Release,
    RelWithDebInfo,
    MinSizeRel,
}

impl BuildConfig {
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildConfig::Debug => "Debug",
            BuildConfig::Release => "Release",
            BuildConfig::RelWithDebInfo => "RelWithDebInfo",
            BuildConfig::MinSizeRel => "MinSizeRel",
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig::Release
    }
}

impl Display for BuildConfig {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Toolchain image coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub repository: String,
    pub tag: String,
}

/// One named source file.
#[derive(Debug, Clone, Serialize)]
pub struct SourceFile {
    pub name: String,
    pub content: String,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// An ordered set of source files with unique names.
///
/// Order is preserved (it only matters for display); names must be unique
/// within the bundle, which construction enforces.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct SourceBundle {
    files: Vec<SourceFile>,
}

impl SourceBundle {
    pub fn new(files: Vec<SourceFile>) -> Result<Self, BuildError> {
        let mut seen = HashSet::new();
        for file in &files {
            if !seen.insert(file.name.as_str()) {
                return Err(BuildError::DuplicateSource(file.name.clone()));
            }
        }
        Ok(Self { files })
    }

    pub fn files(&self) -> &[SourceFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// One compile request. Immutable once constructed.
#[derive(Debug, Clone, Serialize)]
pub struct BuildRequest {
    pub config: BuildConfig,
    pub image: ImageRef,
    pub sources: SourceBundle,
}

/// Outcome reported by the build service.
///
/// The body is decoded against these two shapes; a body matching neither
/// is a decode error, not a silent success.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum BuildResult {
    /// Compilation produced an ephemeral artifact addressed by `id`.
    Succeeded { id: String, logs: String },
    /// The toolchain rejected the sources.
    Failed { error: String },
}
