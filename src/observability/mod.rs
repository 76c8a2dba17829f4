// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging.
//!
//! Centralized message types for diagnostic and operational logging across
//! the studio. Message types follow a struct-based pattern with a
//! `Display` implementation to:
//!
//! * Eliminate magic strings scattered throughout the codebase
//! * Enable future internationalization without code changes
//! * Provide consistent, structured logging output
//!
//! Messages are organized by subsystem:
//! * `messages::build` - build submission and artifact lifecycle events
//! * `messages::staging` - file staging lifecycle events
//! * `messages::runtime` - renderer module loading events

pub mod messages;
