// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! More info:
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>

use std::fmt::{Display, Formatter, Result};

use crate::MarkupSpec;

pub const CSI: &str = "\x1b[";
pub const SGR: &str = "m";
pub const SGR_RESET: &str = "\x1b[0m";

/// A single SGR (set graphics rendition) command carrying every code of a
/// [`MarkupSpec`], eg: `ESC[31;1m` for red + bold.
#[derive(Debug, Clone, Copy)]
pub struct SgrSequence<'a>(pub &'a MarkupSpec);

impl Display for SgrSequence<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{CSI}")?;
        for (index, style) in self.0.iter().enumerate() {
            if index > 0 {
                write!(f, ";")?;
            }
            write!(f, "{}", style.sgr_code())?;
        }
        write!(f, "{SGR}")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::Style;

    #[test]
    fn bold() {
        let spec = MarkupSpec::from(Style::Bold);
        assert_eq!(SgrSequence(&spec).to_string(), "\x1b[1m");
    }

    #[test]
    fn fg_and_bg_in_one_command() {
        let spec = MarkupSpec::from([Style::Yellow, Style::BgBlue, Style::Invert]);
        assert_eq!(SgrSequence(&spec).to_string(), "\x1b[33;44;7m");
    }
}
