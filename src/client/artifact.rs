// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::client::BuildClient;
use crate::errors::BuildError;
use crate::observability::messages::build::ArtifactFetched;

/// Handle onto one server-side ephemeral build artifact.
///
/// The artifact exists from the moment a successful build result names it
/// until a delete is attempted. Nothing reference-counts it; this handle
/// is the sole owner of the knowledge that it exists. `delete` consumes
/// the handle, so a second delete for the same id cannot be written.
pub struct RemoteArtifact<'c> {
    client: &'c BuildClient,
    id: String,
    fetch_attempted: bool,
}

impl<'c> RemoteArtifact<'c> {
    pub fn new(client: &'c BuildClient, id: impl Into<String>) -> Self {
        Self {
            client,
            id: id.into(),
            fetch_attempted: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether a fetch has been attempted on this handle.
    pub fn fetch_attempted(&self) -> bool {
        self.fetch_attempted
    }

    /// Retrieve the artifact bytes (GET semantics, safe to retry).
    pub async fn fetch(&mut self) -> Result<Vec<u8>, BuildError> {
        self.fetch_attempted = true;
        let bytes = self.client.fetch_artifact(&self.id).await?;
        tracing::info!(
            "{}",
            ArtifactFetched {
                id: &self.id,
                size_bytes: bytes.len(),
            }
        );
        Ok(bytes)
    }

    /// Remove the artifact server-side (DELETE semantics, one-shot).
    ///
    /// Cleanup is best-effort: callers log a failed delete and move on,
    /// leaving the artifact orphaned. A delete is only meaningful after a
    /// fetch attempt - the artifact is the reason the fetch happened.
    pub async fn delete(self) -> Result<(), BuildError> {
        debug_assert!(
            self.fetch_attempted,
            "artifact deleted before any fetch attempt"
        );
        self.client.delete_artifact(&self.id).await
    }
}
