// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ConsoleApi, CrosstermTerminalSize, Highlighter, OutputDevice, TerminalEnv,
            TerminalSize};

/// Which [`Highlighter`] source blocks go through.
#[derive(Debug, Default)]
pub enum HighlighterChoice {
    /// [`crate::SyntectHighlighter::default()`], loaded the first time a source block is
    /// highlighted. Writers that never write highlighted source never pay for it.
    #[default]
    Syntect,
    Custom(Box<dyn Highlighter>),
    Disabled,
}

/// Everything a [`crate::TerminalWriter`] is built from. Each field has a real default,
/// and each `with_*` method replaces one of them.
///
/// ```no_run
/// use r3bl_term_writer::{OutputDevice, TerminalWriter, TerminalWriterConfig};
///
/// let writer = TerminalWriter::new(
///     TerminalWriterConfig::default()
///         .with_output_device(OutputDevice::new_stderr())
///         .with_fullwidth(100),
/// );
/// ```
#[derive(Debug)]
pub struct TerminalWriterConfig {
    pub output_device: OutputDevice,
    /// Beats the encoding declared by the output device.
    pub encoding: Option<String>,
    /// `None` means [`TerminalEnv::from_process_env()`], evaluated when the writer is
    /// built.
    pub env: Option<TerminalEnv>,
    /// `Some(_)` skips [`crate::should_do_markup()`] entirely.
    pub markup: Option<bool>,
    pub fullwidth: Option<usize>,
    pub terminal_size: Box<dyn TerminalSize>,
    pub highlighter: HighlighterChoice,
    /// Only used on [`crate::PlatformKind::NativeConsole`].
    pub console_api: Option<Box<dyn ConsoleApi>>,
}

impl Default for TerminalWriterConfig {
    fn default() -> Self {
        Self {
            output_device: OutputDevice::new_stdout(),
            encoding: None,
            env: None,
            markup: None,
            fullwidth: None,
            terminal_size: Box::new(CrosstermTerminalSize),
            highlighter: HighlighterChoice::Syntect,
            console_api: None,
        }
    }
}

impl TerminalWriterConfig {
    #[must_use]
    pub fn with_output_device(mut self, output_device: OutputDevice) -> Self {
        self.output_device = output_device;
        self
    }

    #[must_use]
    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = Some(encoding.into());
        self
    }

    #[must_use]
    pub fn with_env(mut self, env: TerminalEnv) -> Self {
        self.env = Some(env);
        self
    }

    #[must_use]
    pub fn with_markup(mut self, markup: Option<bool>) -> Self {
        self.markup = markup;
        self
    }

    #[must_use]
    pub fn with_fullwidth(mut self, fullwidth: usize) -> Self {
        self.fullwidth = Some(fullwidth);
        self
    }

    #[must_use]
    pub fn with_terminal_size(mut self, terminal_size: impl TerminalSize + 'static) -> Self {
        self.terminal_size = Box::new(terminal_size);
        self
    }

    #[must_use]
    pub fn with_highlighter(mut self, highlighter: impl Highlighter + 'static) -> Self {
        self.highlighter = HighlighterChoice::Custom(Box::new(highlighter));
        self
    }

    #[must_use]
    pub fn without_highlighter(mut self) -> Self {
        self.highlighter = HighlighterChoice::Disabled;
        self
    }

    #[must_use]
    pub fn with_console_api(mut self, console_api: impl ConsoleApi + 'static) -> Self {
        self.console_api = Some(Box::new(console_api));
        self
    }
}
