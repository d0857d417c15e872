// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Debug;

/// Turns plain source text into text with embedded terminal escapes.
///
/// Implementations must keep the number of lines unchanged; the source block renderer
/// pairs output lines with indents and does not try to reconcile a mismatch.
pub trait Highlighter: Debug + Send {
    /// # Errors
    ///
    /// Any error makes the caller fall back to the unhighlighted source.
    fn highlight(&self, source: &str) -> miette::Result<String>;
}
