// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Style names and the two ways of rendering them.
//!
//! ```text
//!  ("red", true), ("bold", true)
//!            │
//!            ▼  MarkupSpec::from_flags()  ── unknown name ──▶ TermWriterError::UnknownMarkup
//!       MarkupSpec [Red, Bold]
//!            │
//!      ┌─────┴──────────────────────────┐
//!      ▼                                ▼
//!  AnsiColorStrategy            NativeConsoleColorStrategy
//!  "\x1b[31;1m" text "\x1b[0m"  get attr → set 0x0C → write text → restore attr
//! ```

// Attach sources.
pub mod ansi_strategy;
pub mod console_api;
pub mod markup_spec;
pub mod native_console_strategy;
pub mod sgr_code;
pub mod strategy;
pub mod style;

// Re-export.
pub use ansi_strategy::*;
pub use console_api::*;
pub use markup_spec::*;
pub use native_console_strategy::*;
pub use sgr_code::*;
pub use strategy::*;
pub use style::*;
