// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::Write;

use crate::{Highlighter, HighlighterChoice, LineState, MarkupSpec, MarkupStrategy,
            OutputDevice, SyntectHighlighter, TerminalEnv, TerminalSize,
            TerminalWriterConfig, format_separator, get_terminal_width,
            select_markup_strategy, should_do_markup};

/// Writes text to an [`OutputDevice`] and keeps track of where the cursor is on the
/// current line.
///
/// Whether markup is emitted is decided once, in [`TerminalWriter::new()`], and the
/// [`MarkupStrategy`] picked there is used for the lifetime of the writer. Every write
/// is flushed right away.
///
/// ```
/// use r3bl_term_writer::{MarkupSpec, OutputDevice, OutputDeviceExt, Style,
///                        TerminalEnv, TerminalWriter, TerminalWriterConfig};
///
/// let (device, mock) = OutputDevice::new_mock();
/// let mut writer = TerminalWriter::new(
///     TerminalWriterConfig::default()
///         .with_output_device(device)
///         .with_env(TerminalEnv::default().with_force_color(Some(true))),
/// );
///
/// writer.write("中文 ok", &MarkupSpec::from(Style::Green)).unwrap();
/// assert_eq!(writer.chars_on_current_line(), 5);
/// assert_eq!(writer.width_of_current_line(), 7);
/// assert_eq!(mock.get_copy_of_buffer_as_string(), "\x1b[32m中文 ok\x1b[0m");
/// ```
#[derive(Debug)]
pub struct TerminalWriter {
    output_device: OutputDevice,
    encoding: String,
    has_markup: bool,
    fullwidth: Option<usize>,
    wraps_at_last_column: bool,
    strategy: Box<dyn MarkupStrategy>,
    terminal_size: Box<dyn TerminalSize>,
    highlighter: HighlighterChoice,
    line_state: LineState,
}

impl Default for TerminalWriter {
    fn default() -> Self { Self::new_stdout() }
}

impl TerminalWriter {
    /// Writer for stdout with every collaborator at its default.
    #[must_use]
    pub fn new_stdout() -> Self { Self::new(TerminalWriterConfig::default()) }

    #[must_use]
    pub fn new(config: TerminalWriterConfig) -> Self {
        let TerminalWriterConfig {
            output_device,
            encoding,
            env,
            markup,
            fullwidth,
            terminal_size,
            highlighter,
            console_api,
        } = config;

        let env = env.unwrap_or_else(TerminalEnv::from_process_env);
        let has_markup =
            markup.unwrap_or_else(|| should_do_markup(&env, output_device.is_terminal));
        let encoding =
            encoding.unwrap_or_else(|| output_device.encoding_or_default().to_string());
        let strategy = select_markup_strategy(env.platform, console_api);

        tracing::debug!(
            has_markup,
            strategy = strategy.name(),
            %encoding,
            is_terminal = output_device.is_terminal,
            "terminal writer created"
        );

        Self {
            output_device,
            encoding,
            has_markup,
            fullwidth,
            wraps_at_last_column: env.wraps_at_last_column,
            strategy,
            terminal_size,
            highlighter,
            line_state: LineState::default(),
        }
    }

    /// Write `text`, styled with `spec` if markup is enabled. Empty text writes nothing.
    ///
    /// The line position is updated from `text` itself, so escape codes added by the
    /// strategy never count towards it.
    ///
    /// # Errors
    ///
    /// [`crate::TermWriterError::Io`] if the output device fails.
    pub fn write(&mut self, text: &str, spec: &MarkupSpec) -> crate::Result<()> {
        if text.is_empty() {
            return Ok(());
        }

        self.line_state.update(text);

        let out = &mut self.output_device.resource;
        if self.has_markup && !spec.is_empty() {
            self.strategy.write_styled(&mut *out, text, spec)?;
        } else {
            out.write_all(text.as_bytes())?;
        }
        out.flush()?;
        Ok(())
    }

    /// Same as [`Self::write()`] with the styles given as `(name, enabled)` flags, eg:
    /// `&[("red", true), ("bold", true)]`.
    ///
    /// # Errors
    ///
    /// [`crate::TermWriterError::UnknownMarkup`] before anything is written, or any
    /// error from [`Self::write()`].
    pub fn write_with(&mut self, text: &str, flags: &[(&str, bool)]) -> crate::Result<()> {
        let spec = MarkupSpec::from_flags(flags)?;
        self.write(text, &spec)
    }

    /// Write `text` followed by a newline. Only `text` is styled.
    ///
    /// # Errors
    ///
    /// See [`Self::write()`].
    pub fn line(&mut self, text: &str, spec: &MarkupSpec) -> crate::Result<()> {
        self.write(text, spec)?;
        self.write("\n", &MarkupSpec::new())
    }

    /// # Errors
    ///
    /// See [`Self::write_with()`].
    pub fn line_with(&mut self, text: &str, flags: &[(&str, bool)]) -> crate::Result<()> {
        let spec = MarkupSpec::from_flags(flags)?;
        self.line(text, &spec)
    }

    /// Column count used for full width output. The override wins if set; otherwise
    /// the terminal is asked, with implausible answers replaced by
    /// [`crate::DEFAULT_WIDTH`].
    #[must_use]
    pub fn fullwidth(&self) -> usize {
        self.fullwidth
            .unwrap_or_else(|| get_terminal_width(self.terminal_size.as_ref()))
    }

    pub fn set_fullwidth(&mut self, fullwidth: usize) { self.fullwidth = Some(fullwidth); }

    /// Write a separator line, see [`format_separator()`]. `fullwidth` defaults to
    /// [`Self::fullwidth()`].
    ///
    /// # Errors
    ///
    /// [`crate::TermWriterError::EmptySeparator`] before anything is written, or any
    /// error from [`Self::line()`].
    pub fn sep(
        &mut self,
        sepchar: &str,
        title: Option<&str>,
        fullwidth: Option<usize>,
        spec: &MarkupSpec,
    ) -> crate::Result<()> {
        let fullwidth = fullwidth.unwrap_or_else(|| self.fullwidth());
        let line = format_separator(sepchar, title, fullwidth, self.wraps_at_last_column)?;
        self.line(&line, spec)
    }

    /// `text` with in-band markup applied, or unchanged if markup is disabled. Nothing
    /// is written.
    #[must_use]
    pub fn markup(&self, text: &str, spec: &MarkupSpec) -> String {
        if self.has_markup {
            self.strategy.apply_markup(text, spec)
        } else {
            text.to_string()
        }
    }

    /// # Errors
    ///
    /// [`crate::TermWriterError::UnknownMarkup`].
    pub fn markup_with(&self, text: &str, flags: &[(&str, bool)]) -> crate::Result<String> {
        let spec = MarkupSpec::from_flags(flags)?;
        Ok(self.markup(text, &spec))
    }

    #[must_use]
    pub fn chars_on_current_line(&self) -> usize { self.line_state.chars_on_current_line }

    #[must_use]
    pub fn width_of_current_line(&self) -> usize { self.line_state.width_of_current_line }

    #[must_use]
    pub fn line_state(&self) -> LineState { self.line_state }

    #[must_use]
    pub fn has_markup(&self) -> bool { self.has_markup }

    #[must_use]
    pub fn encoding(&self) -> &str { &self.encoding }

    #[must_use]
    pub fn strategy_name(&self) -> &'static str { self.strategy.name() }

    /// Loads the default highlighter on first use.
    pub(crate) fn highlighter(&mut self) -> Option<&dyn Highlighter> {
        if matches!(self.highlighter, HighlighterChoice::Syntect) {
            tracing::debug!("loading syntect syntaxes and themes");
            self.highlighter =
                HighlighterChoice::Custom(Box::new(SyntectHighlighter::default()));
        }
        match &self.highlighter {
            HighlighterChoice::Custom(it) => Some(it.as_ref()),
            HighlighterChoice::Syntect | HighlighterChoice::Disabled => None,
        }
    }
}
