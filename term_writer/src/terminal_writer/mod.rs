// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod config;
pub mod line_state;
pub mod separator;
pub mod source_block;
pub mod writer;

// Re-export.
pub use config::*;
pub use line_state::*;
pub use separator::*;
pub use writer::*;
