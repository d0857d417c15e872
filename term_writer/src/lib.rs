// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_term_writer
//!
//! A terminal writer for line oriented command line output. It writes text to an
//! output device, knows where the cursor is on the current line (in characters and in
//! terminal cells), and can style text when the terminal supports it.
//!
//! What it does:
//! 1. Tracks the position on the current line across writes, counting East Asian wide
//!    characters as two cells. See [`LineState`] and [`line_width()`].
//! 1. Decides once, when the writer is built, whether markup is emitted. This looks at
//!    `CLICOLOR_FORCE` / `NO_COLOR`, `TERM`, whether the output is a TTY, and the
//!    platform. See [`should_do_markup()`].
//! 1. Renders markup with one of two strategies: ANSI SGR escape sequences, or (on
//!    legacy Windows consoles) by changing the console text attribute around each
//!    write. See [`MarkupStrategy`].
//! 1. Draws separator lines that fill the terminal width, optionally with a title in
//!    the middle. See [`format_separator()`].
//! 1. Writes indented source code blocks, syntax highlighted with
//!    [syntect](https://docs.rs/syntect) when markup is enabled. See
//!    [`TerminalWriter::write_source()`].
//!
//! It is not a TUI library: there is no cursor movement, no scrollback, no layout.
//!
//! ## Example
//!
//! ```no_run
//! use r3bl_term_writer::{MarkupSpec, Style, TerminalWriter};
//!
//! fn main() -> r3bl_term_writer::Result<()> {
//!     let mut writer = TerminalWriter::new_stdout();
//!     writer.sep("=", Some("test session starts"), None, &MarkupSpec::new())?;
//!     writer.write("collected 3 items", &MarkupSpec::from(Style::Bold))?;
//!     writer.line("", &MarkupSpec::new())?;
//!     writer.write_with("PASSED", &[("green", true)])?;
//!     writer.line("", &MarkupSpec::new())?;
//!     writer.write_source(&["fn main() {", "}"], &["    ", "    "])?;
//!     Ok(())
//! }
//! ```
//!
//! ## Testing code that uses the writer
//!
//! [`OutputDevice::new_mock()`](OutputDeviceExt::new_mock) returns a device backed by a
//! [`StdoutMock`], which captures everything written to it. Pair it with an explicit
//! [`TerminalEnv`] so that the result doesn't depend on the environment the tests run
//! in.
//!
//! ```
//! use r3bl_term_writer::{MarkupSpec, OutputDevice, OutputDeviceExt, TerminalEnv,
//!                        TerminalWriter, TerminalWriterConfig};
//!
//! let (device, mock) = OutputDevice::new_mock();
//! let mut writer = TerminalWriter::new(
//!     TerminalWriterConfig::default()
//!         .with_output_device(device)
//!         .with_env(TerminalEnv::default())
//!         .with_fullwidth(12),
//! );
//! writer.sep("-", Some("ok"), None, &MarkupSpec::new()).unwrap();
//! assert_eq!(mock.get_copy_of_buffer_as_string(), "---- ok ----\n");
//! ```

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod detect_markup_support;
pub mod error;
pub mod highlight;
pub mod markup;
pub mod terminal_io;
pub mod terminal_size;
pub mod terminal_writer;
pub mod test_fixtures;
pub mod width;

// Re-export.
pub use detect_markup_support::*;
pub use error::*;
pub use highlight::*;
pub use markup::*;
pub use terminal_io::*;
pub use terminal_size::*;
pub use terminal_writer::*;
pub use test_fixtures::*;
pub use width::*;
