// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Remote build service client.
//!
//! One `BuildClient::submit` call drives the whole exchange: serialize the
//! request, classify the response, and on success walk the artifact
//! lifecycle (fetch, preview, best-effort delete). The caller-visible busy
//! flag is held for exactly the duration of the flow on every exit path.

mod artifact;
mod types;


pub use artifact::RemoteArtifact;
pub use types::{BuildConfig, BuildRequest, BuildResult, ImageRef, SourceBundle, SourceFile};

use crate::errors::BuildError;
use crate::observability::messages::build::{
    ArtifactDeleteFailed, BuildSubmitted, BuildTransportFailed, CompileFailed, CompileSucceeded,
};
use crate::traits::BuildConsole;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

const STATUS_IDLE: &str = "Idle";
const GENERIC_FAILURE_NOTICE: &str = "Something went wrong, please file a bug report";
const COMPILE_FAILURE_NOTICE: &str = "The compilation failed, check the output below";

/// Client for one build service endpoint.
///
/// At most one build request is in flight per instance; the busy flag is
/// the caller-visible single-flight guard.
pub struct BuildClient {
    base_url: String,
    http: reqwest::Client,
    busy: AtomicBool,
}

impl BuildClient {
    /// Create a client for the build service at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, BuildError> {
        let base_url = base_url.into();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(BuildError::InvalidUrl(format!(
                "URL must start with http:// or https://, got: {}",
                base_url
            )));
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
            busy: AtomicBool::new(false),
        })
    }

    /// Set a request timeout for all exchanges with the build service.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, BuildError> {
        self.http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(self)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether a build submission is currently in flight.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// Submit a build request and drive it to completion.
    ///
    /// On a successful compile the artifact is fetched, shown on the
    /// console's preview surface, and then deleted server-side; a failed
    /// delete leaves the artifact orphaned and is only logged. Compile
    /// failures land in the console's output log. Transport-level faults
    /// surface as errors after a generic notice.
    ///
    /// Whatever happens, the status line ends at `Idle` and the busy flag
    /// is released.
    pub async fn submit(
        &self,
        request: &BuildRequest,
        console: &mut dyn BuildConsole,
    ) -> Result<BuildResult, BuildError> {
        if self.busy.swap(true, Ordering::SeqCst) {
            return Err(BuildError::BuildInFlight);
        }
        let _busy = BusyGuard(&self.busy);

        console.set_status(&format!("Compiling on {}", self.base_url));
        tracing::info!(
            "{}",
            BuildSubmitted {
                server: &self.base_url,
                config: request.config.as_str(),
            }
        );

        let outcome = self.run_build(request, console).await;
        console.set_status(STATUS_IDLE);

        if let Err(error) = &outcome {
            tracing::error!(
                "{}",
                BuildTransportFailed {
                    server: &self.base_url,
                    error,
                }
            );
            console.show_notice(GENERIC_FAILURE_NOTICE);
        }
        outcome
    }

    async fn run_build(
        &self,
        request: &BuildRequest,
        console: &mut dyn BuildConsole,
    ) -> Result<BuildResult, BuildError> {
        let response = self
            .http
            .post(format!("{}/build", self.base_url))
            .json(request)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(BuildError::Status {
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await?;
        let result: BuildResult = serde_json::from_str(&body)?;

        match &result {
            BuildResult::Succeeded { id, logs } => {
                for line in logs.lines() {
                    console.write_line(line);
                }
                console.write_line("compilation finished");
                tracing::info!("{}", CompileSucceeded { id });

                let mut artifact = RemoteArtifact::new(self, id.clone());
                let document = artifact.fetch().await?;
                console.show_preview(document);

                if let Err(error) = artifact.delete().await {
                    tracing::warn!("{}", ArtifactDeleteFailed { id, error: &error });
                }
            }
            BuildResult::Failed { error } => {
                for line in error.lines() {
                    console.write_line(line);
                }
                console.write_line("compilation failed");
                console.show_notice(COMPILE_FAILURE_NOTICE);
                tracing::info!(
                    "{}",
                    CompileFailed {
                        server: &self.base_url,
                    }
                );
            }
        }
        Ok(result)
    }

    pub(crate) async fn fetch_artifact(&self, id: &str) -> Result<Vec<u8>, BuildError> {
        let response = self
            .http
            .get(format!("{}/main.html", self.base_url))
            .query(&[("id", id)])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(BuildError::Status {
                status: response.status().as_u16(),
            });
        }
        Ok(response.bytes().await?.to_vec())
    }

    pub(crate) async fn delete_artifact(&self, id: &str) -> Result<(), BuildError> {
        let response = self
            .http
            .delete(format!("{}/delete", self.base_url))
            .query(&[("id", id)])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(BuildError::Status {
                status: response.status().as_u16(),
            });
        }
        Ok(())
    }
}

/// Clears the busy flag when the submit flow unwinds, however it unwinds.
struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}
