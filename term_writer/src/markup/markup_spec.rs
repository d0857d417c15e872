// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter},
          str::FromStr};

use smallvec::SmallVec;

use crate::{Style, TermWriterError};

/// Styles are kept inline until more than this many are requested at once.
pub const MAX_INLINE_STYLES: usize = 4;
pub type InlineVecStyles = SmallVec<[Style; MAX_INLINE_STYLES]>;

/// A set of [`Style`]s to apply to one piece of text.
///
/// Insertion order is kept (duplicates are dropped) and is the order SGR codes are
/// emitted in. An empty spec means "no markup".
///
/// ```
/// use r3bl_term_writer::{MarkupSpec, Style};
///
/// let spec = MarkupSpec::from_flags(&[("red", true), ("bold", true), ("blink", false)])
///     .unwrap();
/// assert_eq!(spec.iter().collect::<Vec<_>>(), vec![Style::Red, Style::Bold]);
///
/// let spec: MarkupSpec = "green, invert".parse().unwrap();
/// assert!(spec.contains(Style::Invert));
///
/// assert!(MarkupSpec::from_flags(&[("wrongname", true)]).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkupSpec {
    styles: InlineVecStyles,
}

impl MarkupSpec {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Build a spec from `(name, on)` pairs. Every name is validated, including the
    /// ones that are switched off, and only the `on` ones are kept.
    ///
    /// # Errors
    ///
    /// Returns [`TermWriterError::UnknownMarkup`] for the first name that isn't a
    /// [`Style`].
    pub fn from_flags(flags: &[(&str, bool)]) -> crate::Result<Self> {
        let mut it = Self::new();
        for (name, on) in flags {
            let style = parse_style(name)?;
            if *on {
                it.insert(style);
            }
        }
        Ok(it)
    }

    /// No-op if `style` is already present.
    pub fn insert(&mut self, style: Style) {
        if !self.contains(style) {
            self.styles.push(style);
        }
    }

    #[must_use]
    pub fn with(mut self, style: Style) -> Self {
        self.insert(style);
        self
    }

    #[must_use]
    pub fn contains(&self, style: Style) -> bool { self.styles.contains(&style) }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.styles.is_empty() }

    #[must_use]
    pub fn len(&self) -> usize { self.styles.len() }

    pub fn iter(&self) -> impl Iterator<Item = Style> + '_ { self.styles.iter().copied() }
}

fn parse_style(name: &str) -> crate::Result<Style> {
    Style::from_str(name).map_err(|_| TermWriterError::UnknownMarkup {
        name: name.to_string(),
    })
}

impl FromIterator<Style> for MarkupSpec {
    fn from_iter<I: IntoIterator<Item = Style>>(iter: I) -> Self {
        let mut it = Self::new();
        for style in iter {
            it.insert(style);
        }
        it
    }
}

impl From<Style> for MarkupSpec {
    fn from(style: Style) -> Self { Self::new().with(style) }
}

impl<const N: usize> From<[Style; N]> for MarkupSpec {
    fn from(styles: [Style; N]) -> Self { styles.into_iter().collect() }
}

/// Parse a comma separated list of style names, eg: `"red,bold"`. Whitespace around
/// names and empty entries are ignored, so `""` is the empty spec.
impl FromStr for MarkupSpec {
    type Err = TermWriterError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut it = Self::new();
        for name in input.split(',').map(str::trim).filter(|it| !it.is_empty()) {
            it.insert(parse_style(name)?);
        }
        Ok(it)
    }
}

impl Display for MarkupSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (index, style) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ",")?;
            }
            write!(f, "{style}")?;
        }
        Ok(())
    }
}
