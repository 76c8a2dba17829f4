// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Runtime memory staging.
//!
//! This module moves a blob's bytes into a capacity-matched buffer inside
//! the rendering runtime's address space and hands the finished image to a
//! consumer. The discipline is scoped acquisition: the buffer is acquired
//! on entry and released exactly once on every exit path - normal return,
//! consumer failure, or mid-copy failure. No partially populated buffer is
//! ever exposed.

mod buffer;
mod loader;
mod stager;

#[cfg(test)]
pub(crate) mod stub;
#[cfg(test)]
mod integration_tests;

pub use buffer::StagingBuffer;
pub use loader::load_file;
pub use stager::stage;
