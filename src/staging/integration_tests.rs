// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::chunk::{chunkify, ChunkSpec, MemoryBlob};
use crate::errors::StagingError;
use crate::staging::stub::{FlakySource, StubRuntime, TruncatingSource};
use crate::staging::{load_file, stage};

fn pattern(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}

#[tokio::test]
async fn round_trip_preserves_bytes() {
    let data = pattern(10_000);
    let mut runtime = StubRuntime::new();
    let mut source = MemoryBlob::new(data.clone());

    let chunks = chunkify(data.len() as u64, 4_096).unwrap();
    let staged = stage(
        &mut runtime,
        &mut source,
        &chunks,
        data.len() as u64,
        |rt, ptr, len| Ok(rt.region(ptr, len).to_vec()),
    )
    .await
    .unwrap();

    assert_eq!(staged, data);
    assert_eq!(runtime.allocations, 1);
    assert_eq!(runtime.releases, 1);
}

#[tokio::test]
async fn single_chunk_blob_round_trips() {
    let data = pattern(100);
    let mut runtime = StubRuntime::new();
    let mut source = MemoryBlob::new(data.clone());

    let chunks = chunkify(data.len() as u64, 4_096).unwrap();
    assert_eq!(chunks.len(), 1);

    let staged = stage(
        &mut runtime,
        &mut source,
        &chunks,
        data.len() as u64,
        |rt, ptr, len| Ok(rt.region(ptr, len).to_vec()),
    )
    .await
    .unwrap();

    assert_eq!(staged, data);
}

#[tokio::test]
async fn chunk_read_failure_releases_buffer() {
    let data = pattern(10_000);
    let mut runtime = StubRuntime::new();
    let mut source = FlakySource::new(data.clone(), 1);

    let chunks = chunkify(data.len() as u64, 4_096).unwrap();
    let result = stage(
        &mut runtime,
        &mut source,
        &chunks,
        data.len() as u64,
        |_, _, _| Ok(()),
    )
    .await;

    assert!(matches!(result, Err(StagingError::ChunkRead(_))));
    assert_eq!(runtime.allocations, 1);
    assert_eq!(runtime.releases, 1);
}

#[tokio::test]
async fn short_chunk_read_is_rejected() {
    let data = pattern(8_192);
    let mut runtime = StubRuntime::new();
    let mut source = TruncatingSource::new(data.clone());

    let chunks = chunkify(data.len() as u64, 4_096).unwrap();
    let result = stage(
        &mut runtime,
        &mut source,
        &chunks,
        data.len() as u64,
        |_, _, _| Ok(()),
    )
    .await;

    assert!(matches!(result, Err(StagingError::ChunkRead(_))));
    assert_eq!(runtime.releases, 1);
}

#[tokio::test]
async fn sink_failure_releases_buffer() {
    let data = pattern(4_096);
    let mut runtime = StubRuntime::new();
    let mut source = MemoryBlob::new(data.clone());

    let chunks = chunkify(data.len() as u64, 4_096).unwrap();
    let result: Result<(), _> = stage(
        &mut runtime,
        &mut source,
        &chunks,
        data.len() as u64,
        |_, _, _| Err(StagingError::Consumer("unreadable file image".to_string())),
    )
    .await;

    assert!(matches!(result, Err(StagingError::Consumer(_))));
    assert_eq!(runtime.allocations, 1);
    assert_eq!(runtime.releases, 1);
}

#[tokio::test]
async fn allocation_failure_copies_nothing() {
    let data = pattern(4_096);
    let mut runtime = StubRuntime::new();
    runtime.fail_allocations = true;
    let mut source = MemoryBlob::new(data.clone());

    let chunks = chunkify(data.len() as u64, 4_096).unwrap();
    let result = stage(
        &mut runtime,
        &mut source,
        &chunks,
        data.len() as u64,
        |_, _, _| Ok(()),
    )
    .await;

    assert!(matches!(result, Err(StagingError::Allocation(_))));
    assert_eq!(runtime.allocations, 0);
    assert_eq!(runtime.releases, 0);
}

#[tokio::test]
async fn zero_size_blob_skips_the_allocator() {
    let mut runtime = StubRuntime::new();
    let mut source = MemoryBlob::new(Vec::new());

    let chunks = chunkify(0, 4_096).unwrap();
    assert!(chunks.is_empty());

    let seen = stage(&mut runtime, &mut source, &chunks, 0, |_, ptr, len| {
        Ok((ptr, len))
    })
    .await
    .unwrap();

    assert_eq!(seen, (0, 0));
    assert_eq!(runtime.allocations, 0);
    assert_eq!(runtime.releases, 0);
}

#[tokio::test]
async fn writes_past_capacity_are_rejected() {
    let data = pattern(16);
    let mut runtime = StubRuntime::new();
    let mut source = MemoryBlob::new(data);

    // Hand-made layout that overcommits an 8-byte buffer.
    let chunks = [
        ChunkSpec {
            offset: 0,
            length: 8,
        },
        ChunkSpec {
            offset: 8,
            length: 8,
        },
    ];
    let result = stage(&mut runtime, &mut source, &chunks, 8, |_, _, _| Ok(())).await;

    assert!(matches!(
        result,
        Err(StagingError::CapacityExceeded { cursor: 8, .. })
    ));
    assert_eq!(runtime.allocations, 1);
    assert_eq!(runtime.releases, 1);
}

#[tokio::test]
async fn undercovering_chunks_are_rejected_before_hand_off() {
    let data = pattern(16);
    let mut runtime = StubRuntime::new();
    let mut source = MemoryBlob::new(data);

    let chunks = [ChunkSpec {
        offset: 0,
        length: 8,
    }];
    let result = stage(&mut runtime, &mut source, &chunks, 16, |_, _, _| Ok(())).await;

    assert!(matches!(result, Err(StagingError::ChunkRead(_))));
    assert_eq!(runtime.releases, 1);
}

#[tokio::test]
async fn load_file_drives_the_renderer() {
    let data = pattern(10_000);
    let mut runtime = StubRuntime::new();
    let mut source = MemoryBlob::new(data.clone());

    load_file(&mut runtime, "cone.vtp", &mut source, 4_096)
        .await
        .unwrap();

    assert_eq!(runtime.scene_clears, 1);
    assert_eq!(runtime.view_resets, 1);
    assert_eq!(runtime.renders, 1);
    assert_eq!(runtime.loaded.len(), 1);

    let (name, ptr, len) = runtime.loaded[0].clone();
    assert_eq!(name, "cone.vtp");
    assert_eq!(len, data.len());
    assert_eq!(runtime.region(ptr, len), &data[..]);
    assert_eq!(runtime.allocations, runtime.releases);
}

#[tokio::test]
async fn load_file_surfaces_source_failures() {
    let data = pattern(10_000);
    let mut runtime = StubRuntime::new();
    let mut source = FlakySource::new(data, 2);

    let result = load_file(&mut runtime, "cone.vtp", &mut source, 4_096).await;

    assert!(matches!(result, Err(StagingError::ChunkRead(_))));
    assert!(runtime.loaded.is_empty());
    // The scene was already cleared, but no frame is rendered for a load
    // that never happened.
    assert_eq!(runtime.scene_clears, 1);
    assert_eq!(runtime.renders, 0);
    assert_eq!(runtime.allocations, runtime.releases);
}
