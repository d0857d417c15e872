// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::borrow::Cow;

use crate::{MarkupSpec, TermWriterError, TerminalWriter};

impl TerminalWriter {
    /// Write a block of source code, one [`TerminalWriter::line()`] per line, each
    /// prefixed with its indent. Pass an empty `indents` for no indentation.
    ///
    /// The block is highlighted as a whole when markup is enabled and a
    /// [`crate::Highlighter`] is configured. If the highlighter fails, the plain lines
    /// are written instead. If it changes the number of lines, lines and indents are
    /// paired up until the shorter of the two runs out.
    ///
    /// # Errors
    ///
    /// [`TermWriterError::IndentCountMismatch`] if `indents` is neither empty nor the
    /// same length as `lines`. Nothing is written in that case.
    pub fn write_source(&mut self, lines: &[&str], indents: &[&str]) -> crate::Result<()> {
        if !indents.is_empty() && indents.len() != lines.len() {
            return Err(TermWriterError::IndentCountMismatch {
                indents: indents.len(),
                lines: lines.len(),
            });
        }

        let source = lines.join("\n");
        let source = self.highlight_source(&source);

        let no_indents = vec![""; lines.len()];
        let indents = if indents.is_empty() { &no_indents[..] } else { indents };

        let no_markup = MarkupSpec::new();
        for (indent, line) in indents.iter().zip(source.lines()) {
            self.line(&format!("{indent}{line}"), &no_markup)?;
        }

        Ok(())
    }

    fn highlight_source<'a>(&mut self, source: &'a str) -> Cow<'a, str> {
        if !self.has_markup() {
            return Cow::Borrowed(source);
        }
        let Some(highlighter) = self.highlighter() else {
            return Cow::Borrowed(source);
        };
        match highlighter.highlight(source) {
            Ok(highlighted) => Cow::Owned(highlighted),
            Err(report) => {
                tracing::warn!(error = %report, "highlighting failed, writing plain source");
                Cow::Borrowed(source)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{Highlighter, OutputDevice, OutputDeviceExt, StdoutMock, TermWriterError,
                TerminalEnv, TerminalWriter, TerminalWriterConfig};

    /// Wraps each line in `<` and `>`, so it is visible whether it ran.
    #[derive(Debug)]
    struct AngleHighlighter;

    impl Highlighter for AngleHighlighter {
        fn highlight(&self, source: &str) -> miette::Result<String> {
            Ok(source
                .lines()
                .map(|line| format!("<{line}>"))
                .collect::<Vec<_>>()
                .join("\n"))
        }
    }

    #[derive(Debug)]
    struct FailingHighlighter;

    impl Highlighter for FailingHighlighter {
        fn highlight(&self, _source: &str) -> miette::Result<String> {
            Err(miette::miette!("lexer exploded"))
        }
    }

    /// Adds a trailing line.
    #[derive(Debug)]
    struct LineAddingHighlighter;

    impl Highlighter for LineAddingHighlighter {
        fn highlight(&self, source: &str) -> miette::Result<String> {
            Ok(format!("{source}\n// extra"))
        }
    }

    /// Joins everything onto one line.
    #[derive(Debug)]
    struct LineDroppingHighlighter;

    impl Highlighter for LineDroppingHighlighter {
        fn highlight(&self, source: &str) -> miette::Result<String> {
            Ok(source.replace('\n', " "))
        }
    }

    fn writer(
        force_color: bool,
        highlighter: impl Highlighter + 'static,
    ) -> (TerminalWriter, StdoutMock) {
        let (device, mock) = OutputDevice::new_mock();
        let writer = TerminalWriter::new(
            TerminalWriterConfig::default()
                .with_output_device(device)
                .with_env(TerminalEnv::default().with_force_color(Some(force_color)))
                .with_highlighter(highlighter),
        );
        (writer, mock)
    }

    #[test]
    fn test_indents_prefix_each_line() {
        let (mut writer, mock) = writer(false, AngleHighlighter);
        writer.write_source(&["a", "b"], &["> ", ">> "]).unwrap();
        assert_eq!(mock.get_copy_of_buffer_as_string(), "> a\n>> b\n");
        assert_eq!(writer.chars_on_current_line(), 0);
    }

    #[test]
    fn test_empty_indents_mean_no_indentation() {
        let (mut writer, mock) = writer(false, AngleHighlighter);
        writer.write_source(&["fn f() {", "}"], &[]).unwrap();
        assert_eq!(mock.get_copy_of_buffer_as_string(), "fn f() {\n}\n");
    }

    #[test]
    fn test_mismatched_indents_write_nothing() {
        let (mut writer, mock) = writer(false, AngleHighlighter);
        let result = writer.write_source(&["a", "b", "c"], &["  "]);
        assert!(matches!(
            result,
            Err(TermWriterError::IndentCountMismatch { indents: 1, lines: 3 })
        ));
        assert!(mock.get_copy_of_buffer().is_empty());
    }

    #[test]
    fn test_highlighter_only_runs_with_markup() {
        let (mut with_markup, mock) = writer(true, AngleHighlighter);
        with_markup.write_source(&["x", "y"], &["1 ", "2 "]).unwrap();
        assert_eq!(mock.get_copy_of_buffer_as_string(), "1 <x>\n2 <y>\n");

        let (mut without_markup, mock) = writer(false, AngleHighlighter);
        without_markup.write_source(&["x", "y"], &["1 ", "2 "]).unwrap();
        assert_eq!(mock.get_copy_of_buffer_as_string(), "1 x\n2 y\n");
    }

    #[test]
    fn test_highlighter_failure_falls_back_to_plain() {
        let (mut writer, mock) = writer(true, FailingHighlighter);
        writer.write_source(&["x", "y"], &[]).unwrap();
        assert_eq!(mock.get_copy_of_buffer_as_string(), "x\ny\n");
    }

    #[test]
    fn test_extra_highlighted_lines_are_dropped() {
        let (mut writer, mock) = writer(true, LineAddingHighlighter);
        writer.write_source(&["x"], &["  "]).unwrap();
        assert_eq!(mock.get_copy_of_buffer_as_string(), "  x\n");
    }

    #[test]
    fn test_missing_highlighted_lines_are_not_padded() {
        let (mut writer, mock) = writer(true, LineDroppingHighlighter);
        writer.write_source(&["x", "y", "z"], &["1 ", "2 ", "3 "]).unwrap();
        assert_eq!(mock.get_copy_of_buffer_as_string(), "1 x y z\n");
    }

    #[test]
    fn test_empty_block_writes_nothing() {
        let (mut writer, mock) = writer(true, AngleHighlighter);
        writer.write_source(&[], &[]).unwrap();
        assert!(mock.get_copy_of_buffer().is_empty());
    }

    #[test]
    fn test_no_highlighter_configured() {
        let (device, mock) = OutputDevice::new_mock();
        let mut writer = TerminalWriter::new(
            TerminalWriterConfig::default()
                .with_output_device(device)
                .with_env(TerminalEnv::default().with_force_color(Some(true)))
                .without_highlighter(),
        );
        writer.write_source(&["plain"], &["    "]).unwrap();
        assert_eq!(mock.get_copy_of_buffer_as_string(), "    plain\n");
    }
}
