// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{IsTerminal, Write};

pub type SendWriter = Box<dyn Write + Send>;

/// Encoding assumed when the output device doesn't declare one.
pub const DEFAULT_ENCODING: &str = "utf-8";

/// The sink a [`crate::TerminalWriter`] writes to.
///
/// Besides the writer itself this carries the two facts the terminal writer needs to
/// know about it, both captured once at construction:
/// - whether it is an interactive terminal (TTY);
/// - its declared text encoding, if any.
///
/// The main constructors are:
/// - [`OutputDevice::new_stdout()`] / [`OutputDevice::new_stderr()`]
/// - [`OutputDevice::from_writer()`] for any [`Write`]
/// - [`crate::OutputDeviceExt::new_mock()`] for tests
pub struct OutputDevice {
    pub resource: SendWriter,
    pub is_terminal: bool,
    pub encoding: Option<String>,
    pub is_mock: bool,
}

impl std::fmt::Debug for OutputDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutputDevice")
            .field("is_terminal", &self.is_terminal)
            .field("encoding", &self.encoding)
            .field("is_mock", &self.is_mock)
            .finish_non_exhaustive()
    }
}

impl Default for OutputDevice {
    fn default() -> Self { Self::new_stdout() }
}

impl OutputDevice {
    #[must_use]
    pub fn new_stdout() -> Self {
        let stdout = std::io::stdout();
        Self {
            is_terminal: stdout.is_terminal(),
            resource: Box::new(stdout),
            encoding: None,
            is_mock: false,
        }
    }

    #[must_use]
    pub fn new_stderr() -> Self {
        let stderr = std::io::stderr();
        Self {
            is_terminal: stderr.is_terminal(),
            resource: Box::new(stderr),
            encoding: None,
            is_mock: false,
        }
    }

    /// Wrap any writer. Since arbitrary writers can't be asked whether they are a
    /// terminal, the caller says so.
    #[must_use]
    pub fn from_writer(writer: impl Write + Send + 'static, is_terminal: bool) -> Self {
        Self {
            resource: Box::new(writer),
            is_terminal,
            encoding: None,
            is_mock: false,
        }
    }

    #[must_use]
    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = Some(encoding.into());
        self
    }

    /// Declared encoding, or [`DEFAULT_ENCODING`].
    #[must_use]
    pub fn encoding_or_default(&self) -> &str {
        self.encoding.as_deref().unwrap_or(DEFAULT_ENCODING)
    }
}
