// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic;
use syntect::{easy::HighlightLines,
              highlighting::{Theme, ThemeSet},
              parsing::SyntaxSet,
              util::{LinesWithEndings, as_24_bit_terminal_escaped}};

use crate::{Highlighter, SGR_RESET};

pub const DEFAULT_SYNTAX_EXTENSION: &str = "rs";
pub const DEFAULT_THEME_NAME: &str = "base16-ocean.dark";

/// [`Highlighter`] backed by [syntect](https://docs.rs/syntect)'s bundled syntaxes and
/// themes, emitting 24-bit color escapes.
///
/// Each output line ends with [`SGR_RESET`] (before its line ending), so a style never
/// bleeds into the indent of the next line, and the line count is unchanged.
#[derive(Debug)]
pub struct SyntectHighlighter {
    syntax_set: SyntaxSet,
    theme: Theme,
    file_extension: String,
}

impl Default for SyntectHighlighter {
    fn default() -> Self { Self::new(DEFAULT_SYNTAX_EXTENSION) }
}

impl SyntectHighlighter {
    /// Use the syntax registered for `file_extension`, eg: `"rs"`, `"py"`, `"toml"`.
    /// Unknown extensions highlight as plain text.
    #[must_use]
    pub fn new(file_extension: impl Into<String>) -> Self {
        let theme_set = ThemeSet::load_defaults();
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme: theme_set
                .themes
                .get(DEFAULT_THEME_NAME)
                .cloned()
                .unwrap_or_default(),
            file_extension: file_extension.into(),
        }
    }

    #[must_use]
    pub fn file_extension(&self) -> &str { &self.file_extension }
}

impl Highlighter for SyntectHighlighter {
    fn highlight(&self, source: &str) -> miette::Result<String> {
        let syntax = self
            .syntax_set
            .find_syntax_by_extension(&self.file_extension)
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());
        let mut highlight_lines = HighlightLines::new(syntax, &self.theme);

        let mut acc = String::with_capacity(source.len() * 2);
        for line in LinesWithEndings::from(source) {
            let ranges = highlight_lines
                .highlight_line(line, &self.syntax_set)
                .into_diagnostic()?;
            let escaped = as_24_bit_terminal_escaped(&ranges[..], false);
            match escaped.strip_suffix('\n') {
                Some(body) => {
                    acc.push_str(body);
                    acc.push_str(SGR_RESET);
                    acc.push('\n');
                }
                None => {
                    acc.push_str(&escaped);
                    acc.push_str(SGR_RESET);
                }
            }
        }
        Ok(acc)
    }
}
