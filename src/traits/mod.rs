// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod console;
pub mod runtime;

pub use console::BuildConsole;
pub use runtime::RenderRuntime;
