// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Errors produced by [`crate::TerminalWriter`] and the types it is configured with.
//!
//! | Variant                 | Cause                                              | Output written? |
//! | :---------------------- | :------------------------------------------------- | :-------------- |
//! | [`UnknownMarkup`]       | A style name that is not in [`crate::Style`]       | No              |
//! | [`IndentCountMismatch`] | Source block indents and lines differ in length    | No              |
//! | [`EmptySeparator`]      | [`crate::TerminalWriter::sep()`] got `""`          | No              |
//! | [`Io`]                  | The output device failed                           | Maybe partial   |
//!
//! [`UnknownMarkup`]: TermWriterError::UnknownMarkup
//! [`IndentCountMismatch`]: TermWriterError::IndentCountMismatch
//! [`EmptySeparator`]: TermWriterError::EmptySeparator
//! [`Io`]: TermWriterError::Io

/// Alias used by every fallible operation in this crate.
pub type Result<T> = std::result::Result<T, TermWriterError>;

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum TermWriterError {
    /// A markup flag named a style that does not exist.
    #[error("unknown markup: {name:?}")]
    #[diagnostic(
        code(r3bl_term_writer::unknown_markup),
        help(
            "Valid names are black, red, green, yellow, blue, purple, cyan, white \
             (foreground), the same capitalized (background), and bold, light, blink, \
             invert"
        )
    )]
    UnknownMarkup { name: String },

    #[error("indents size ({indents}) should have same size as lines ({lines})")]
    #[diagnostic(
        code(r3bl_term_writer::indent_count_mismatch),
        help("Pass one indent per line, or no indents at all")
    )]
    IndentCountMismatch { indents: usize, lines: usize },

    #[error("separator character string is empty")]
    #[diagnostic(code(r3bl_term_writer::empty_separator))]
    EmptySeparator,

    /// The output device failed. The underlying error is passed through untouched.
    #[error(transparent)]
    #[diagnostic(code(r3bl_term_writer::io))]
    Io(#[from] std::io::Error),
}
