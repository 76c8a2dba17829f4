// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::chunk::{chunkify, ChunkSource};
use crate::errors::StagingResult;
use crate::observability::messages::staging::{
    FileStagingCompleted, FileStagingFailed, FileStagingStarted,
};
use crate::staging::stage;
use crate::traits::RenderRuntime;

/// Load a local file into the renderer.
///
/// Clears the current scene, plans the chunk layout, stages the file's
/// bytes into runtime memory, hands the image to the renderer under
/// `name`, then resets the camera and renders one frame. The staging
/// buffer is gone by the time this returns, whatever the outcome.
pub async fn load_file<R, S>(
    runtime: &mut R,
    name: &str,
    source: &mut S,
    chunk_size: usize,
) -> StagingResult<()>
where
    R: RenderRuntime + ?Sized,
    S: ChunkSource + ?Sized,
{
    let total_size = source.total_size();
    let chunks = chunkify(total_size, chunk_size)?;
    tracing::info!(
        "{}",
        FileStagingStarted {
            name,
            size_bytes: total_size,
            chunk_count: chunks.len(),
        }
    );

    runtime.clear_scene()?;

    let staged = stage(runtime, source, &chunks, total_size, |runtime, ptr, len| {
        runtime.load_file_image(name, ptr, len)
    })
    .await;

    if let Err(error) = &staged {
        tracing::error!("{}", FileStagingFailed { name, error });
    }
    staged?;

    runtime.reset_view()?;
    runtime.render()?;

    tracing::info!(
        "{}",
        FileStagingCompleted {
            name,
            size_bytes: total_size,
        }
    );
    Ok(())
}
