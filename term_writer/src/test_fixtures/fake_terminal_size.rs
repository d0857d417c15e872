// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io;

use crate::TerminalSize;

/// Always reports the same size.
#[derive(Debug, Clone, Copy)]
pub struct FixedTerminalSize {
    pub columns: u16,
    pub rows: u16,
}

impl FixedTerminalSize {
    #[must_use]
    pub fn new(columns: u16, rows: u16) -> Self { Self { columns, rows } }
}

impl TerminalSize for FixedTerminalSize {
    fn size(&self) -> io::Result<(u16, u16)> { Ok((self.columns, self.rows)) }
}

/// Behaves like a process without a controlling terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingTerminalSize;

impl TerminalSize for FailingTerminalSize {
    fn size(&self) -> io::Result<(u16, u16)> {
        Err(io::Error::new(io::ErrorKind::Unsupported, "not a terminal"))
    }
}
