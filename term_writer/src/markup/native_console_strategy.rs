// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Markup for consoles that don't interpret escape sequences.
//!
//! Instead of embedding codes in the text, the console's current text attribute is
//! changed around each write and then put back. Only a subset of [`Style`] has an
//! effect here:
//!
//! | Requested                    | Attribute bits                                |
//! | :--------------------------- | :-------------------------------------------- |
//! | `bold`                       | [`FOREGROUND_INTENSITY`]                      |
//! | `red`                        | [`FOREGROUND_RED`]                            |
//! | `blue` (if not red)          | [`FOREGROUND_BLUE`]                           |
//! | `green` (if not red, blue)   | [`FOREGROUND_GREEN`]                          |
//! | `yellow` (if none of above)  | [`FOREGROUND_RED`] \| [`FOREGROUND_GREEN`]    |
//! | no foreground color above    | current foreground bits are kept              |
//!
//! The current background bits are always kept. Every other style is accepted and
//! ignored.

use std::io::{self, Write};

use crate::{ConsoleApi, MarkupSpec, MarkupStrategy, Style};

pub const FOREGROUND_BLUE: u16 = 0x0001;
pub const FOREGROUND_GREEN: u16 = 0x0002;
pub const FOREGROUND_RED: u16 = 0x0004;
pub const FOREGROUND_INTENSITY: u16 = 0x0008;
pub const FOREGROUND_MASK: u16 = 0x0007;
pub const BACKGROUND_MASK: u16 = 0x00F0;

#[derive(Debug)]
pub struct NativeConsoleColorStrategy {
    console_api: Box<dyn ConsoleApi>,
}

impl NativeConsoleColorStrategy {
    pub const NAME: &'static str = "native-console";

    #[must_use]
    pub fn new(console_api: Box<dyn ConsoleApi>) -> Self { Self { console_api } }
}

/// Attribute word to use while writing text styled with `spec`, given the console's
/// `current` attribute word.
#[must_use]
pub fn derive_console_attribute(current: u16, spec: &MarkupSpec) -> u16 {
    let mut attribute = current & BACKGROUND_MASK;

    if spec.contains(Style::Bold) {
        attribute |= FOREGROUND_INTENSITY;
    }

    attribute |= if spec.contains(Style::Red) {
        FOREGROUND_RED
    } else if spec.contains(Style::Blue) {
        FOREGROUND_BLUE
    } else if spec.contains(Style::Green) {
        FOREGROUND_GREEN
    } else if spec.contains(Style::Yellow) {
        FOREGROUND_RED | FOREGROUND_GREEN
    } else {
        current & FOREGROUND_MASK
    };

    attribute
}

impl MarkupStrategy for NativeConsoleColorStrategy {
    fn name(&self) -> &'static str { Self::NAME }

    /// There is no in-band form for console attributes, so text is returned as is.
    fn apply_markup(&self, text: &str, _spec: &MarkupSpec) -> String { text.to_string() }

    fn write_styled(
        &self,
        out: &mut dyn Write,
        text: &str,
        spec: &MarkupSpec,
    ) -> io::Result<()> {
        if spec.is_empty() {
            return out.write_all(text.as_bytes());
        }

        let original = self.console_api.text_attribute()?;
        let attribute = derive_console_attribute(original, spec);
        tracing::trace!(original, attribute, "set console text attribute");
        self.console_api.set_text_attribute(attribute)?;

        // The text must reach the console while the attribute is active.
        let written = out.write_all(text.as_bytes()).and_then(|()| out.flush());
        let restored = self.console_api.set_text_attribute(original);
        written.and(restored)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::{FakeConsoleApi, StdoutMock};

    #[test_case("red", 0x0007, 0x0004 ; "red replaces grey")]
    #[test_case("red,bold", 0x0017, 0x001C ; "red bold keeps blue background")]
    #[test_case("red,blue,green", 0x0000, 0x0004 ; "red wins")]
    #[test_case("blue,green,yellow", 0x0000, 0x0001 ; "blue beats green and yellow")]
    #[test_case("green,yellow", 0x0000, 0x0002 ; "green beats yellow")]
    #[test_case("yellow", 0x0000, 0x0006 ; "yellow is red and green")]
    #[test_case("bold", 0x0047, 0x004F ; "bold keeps foreground and background")]
    #[test_case("invert,Blue", 0x0027, 0x0027 ; "unsupported styles keep current")]
    #[test_case("cyan", 0x008F, 0x0087 ; "intensity bit is not inherited")]
    fn test_derive_console_attribute(spec: &str, current: u16, expected: u16) {
        let spec: MarkupSpec = spec.parse().unwrap();
        assert_eq!(derive_console_attribute(current, &spec), expected);
    }

    #[test]
    fn test_write_styled_sets_then_restores_attribute() {
        let console = FakeConsoleApi::new(0x0017);
        let strategy = NativeConsoleColorStrategy::new(Box::new(console.clone()));
        let mut out = StdoutMock::new();

        strategy
            .write_styled(&mut out, "FAIL", &MarkupSpec::from([Style::Red, Style::Bold]))
            .unwrap();

        assert_eq!(console.set_history(), vec![0x001C, 0x0017]);
        assert_eq!(console.current(), 0x0017);
        assert_eq!(out.get_copy_of_buffer_as_string(), "FAIL");
        assert!(out.flush_count() >= 1);
    }

    #[test]
    fn test_write_styled_never_embeds_escape_codes() {
        let console = FakeConsoleApi::new(0x0007);
        let strategy = NativeConsoleColorStrategy::new(Box::new(console));
        let mut out = StdoutMock::new();

        strategy
            .write_styled(&mut out, "ok", &MarkupSpec::from(Style::Green))
            .unwrap();

        assert!(!out.get_copy_of_buffer_as_string().contains('\x1b'));
        assert_eq!(strategy.apply_markup("ok", &MarkupSpec::from(Style::Green)), "ok");
    }

    #[test]
    fn test_attribute_is_restored_when_write_fails() {
        let console = FakeConsoleApi::new(0x0007);
        let strategy = NativeConsoleColorStrategy::new(Box::new(console.clone()));
        let mut out = StdoutMock::new_failing();

        let result = strategy.write_styled(&mut out, "x", &MarkupSpec::from(Style::Red));

        assert!(result.is_err());
        assert_eq!(console.set_history(), vec![0x0004, 0x0007]);
    }
}
