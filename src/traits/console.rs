// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Handle onto the user-visible build surfaces.
///
/// The build client reports through this trait instead of reaching for
/// ambient references to a terminal or preview panel; the composition root
/// decides what a "status line" or "preview" actually is (a terminal, a
/// browser pane, a test recorder).
pub trait BuildConsole: Send {
    /// Replace the status line text.
    fn set_status(&mut self, status: &str);

    /// Append one line to the output log.
    fn write_line(&mut self, line: &str);

    /// Show a compiled artifact in the preview surface.
    fn show_preview(&mut self, document: Vec<u8>);

    /// Show an informational notice in the preview surface.
    fn show_notice(&mut self, message: &str);
}
