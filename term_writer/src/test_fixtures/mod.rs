// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Fakes for the writer's collaborators. These are public so that integration tests
//! (and crates that embed a [`crate::TerminalWriter`]) can capture output without a
//! real terminal.

// Attach sources.
pub mod fake_console_api;
pub mod fake_terminal_size;
pub mod output_device_ext;
pub mod stdout_mock;

// Re-export.
pub use fake_console_api::*;
pub use fake_terminal_size::*;
pub use output_device_ext::*;
pub use stdout_mock::*;
