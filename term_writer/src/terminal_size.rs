// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::Debug, io};

/// Width used when the terminal size is unknown or not believable.
pub const DEFAULT_WIDTH: usize = 80;

/// Some platforms (notably Windows consoles) report bogus widths. Anything narrower
/// than this is replaced by [`DEFAULT_WIDTH`].
pub const MIN_PLAUSIBLE_WIDTH: usize = 40;

/// Capability that reports the terminal size as `(columns, rows)`.
pub trait TerminalSize: Debug + Send {
    /// # Errors
    ///
    /// Returns an error if the size can't be determined, eg: the output isn't a TTY.
    fn size(&self) -> io::Result<(u16, u16)>;
}

/// Queries the real terminal using [`crossterm::terminal::size()`].
#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermTerminalSize;

impl TerminalSize for CrosstermTerminalSize {
    fn size(&self) -> io::Result<(u16, u16)> { crossterm::terminal::size() }
}

/// Get the terminal width from `terminal_size`. If there is a problem, or the reported
/// width is below [`MIN_PLAUSIBLE_WIDTH`], return [`DEFAULT_WIDTH`].
#[must_use]
pub fn get_terminal_width(terminal_size: &dyn TerminalSize) -> usize {
    match terminal_size.size() {
        Ok((columns, _)) => {
            let columns = usize::from(columns);
            if columns < MIN_PLAUSIBLE_WIDTH {
                tracing::debug!(columns, "implausible terminal width, using default");
                DEFAULT_WIDTH
            } else {
                columns
            }
        }
        Err(error) => {
            tracing::debug!(%error, "terminal size query failed, using default width");
            DEFAULT_WIDTH
        }
    }
}
