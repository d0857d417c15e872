// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{AsRefStr, Display, EnumCount, EnumIter, EnumString};

/// Every style name a [`crate::MarkupSpec`] accepts. Names are case sensitive: the
/// lowercase color names select the foreground, the capitalized ones the background.
///
/// The string form (via [`std::str::FromStr`] and [`std::fmt::Display`]) is the
/// style name, eg: `"red"`, `"Red"`, `"bold"`.
#[rustfmt::skip]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash,
    Display, EnumString, EnumIter, EnumCount, AsRefStr,
)]
pub enum Style {
    #[strum(serialize = "black")]  Black,
    #[strum(serialize = "red")]    Red,
    #[strum(serialize = "green")]  Green,
    #[strum(serialize = "yellow")] Yellow,
    #[strum(serialize = "blue")]   Blue,
    #[strum(serialize = "purple")] Purple,
    #[strum(serialize = "cyan")]   Cyan,
    #[strum(serialize = "white")]  White,

    #[strum(serialize = "Black")]  BgBlack,
    #[strum(serialize = "Red")]    BgRed,
    #[strum(serialize = "Green")]  BgGreen,
    #[strum(serialize = "Yellow")] BgYellow,
    #[strum(serialize = "Blue")]   BgBlue,
    #[strum(serialize = "Purple")] BgPurple,
    #[strum(serialize = "Cyan")]   BgCyan,
    #[strum(serialize = "White")]  BgWhite,

    #[strum(serialize = "bold")]   Bold,
    #[strum(serialize = "light")]  Light,
    #[strum(serialize = "blink")]  Blink,
    #[strum(serialize = "invert")] Invert,
}

impl Style {
    /// SGR parameter for this style.
    /// More info: <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR>
    #[rustfmt::skip]
    #[must_use]
    pub const fn sgr_code(self) -> u8 {
        match self {
            Style::Black    => 30, Style::BgBlack  => 40,
            Style::Red      => 31, Style::BgRed    => 41,
            Style::Green    => 32, Style::BgGreen  => 42,
            Style::Yellow   => 33, Style::BgYellow => 43,
            Style::Blue     => 34, Style::BgBlue   => 44,
            Style::Purple   => 35, Style::BgPurple => 45,
            Style::Cyan     => 36, Style::BgCyan   => 46,
            Style::White    => 37, Style::BgWhite  => 47,
            Style::Bold     => 1,
            Style::Light    => 2,
            Style::Blink    => 5,
            Style::Invert   => 7,
        }
    }
}
