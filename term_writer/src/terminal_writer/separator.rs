// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Separator lines, eg: `====== title ======`.
//!
//! The goal is to have the line be as long as possible under the condition that
//! `len(line) <= width`, where `len` counts characters (not display cells):
//!
//! ```text
//! with title:     2 + 2·len(sepchar)·N + len(title) <= width
//!             =>  N = max((width - len(title) - 2) / (2·len(sepchar)), 1)
//!                 line = fill + " " + title + " " + fill     (fill = sepchar × N)
//!
//! without title:  len(sepchar)·N <= width
//!             =>  N = width / len(sepchar)
//! ```
//!
//! Integer division can leave room at the right edge, so afterwards one more copy of
//! `sepchar` (with trailing whitespace trimmed, so that `"_ "` ends in `"_"`) is
//! appended if it still fits.
//!
//! On platforms that wrap when the last column is written, `width` is reduced by one
//! before any of this.

use crate::{TermWriterError, char_count};

/// Build a separator line for a terminal `fullwidth` columns wide.
///
/// With a long title the line is allowed to exceed the width, since `N` never drops
/// below 1.
///
/// # Errors
///
/// Returns [`TermWriterError::EmptySeparator`] if `sepchar` is empty.
///
/// ```
/// use r3bl_term_writer::format_separator;
///
/// assert_eq!(format_separator("=", None, 8, false).unwrap(), "========");
/// assert_eq!(format_separator("-", Some("T"), 10, false).unwrap(), "--- T ----");
/// ```
pub fn format_separator(
    sepchar: &str,
    title: Option<&str>,
    fullwidth: usize,
    wraps_at_last_column: bool,
) -> crate::Result<String> {
    let sepchar_len = to_i64(char_count(sepchar));
    if sepchar_len == 0 {
        return Err(TermWriterError::EmptySeparator);
    }

    let mut width = to_i64(fullwidth);
    if wraps_at_last_column {
        width -= 1;
    }

    let mut line = match title {
        Some(title) => {
            let title_len = to_i64(char_count(title));
            let count = (width - title_len - 2)
                .div_euclid(sepchar_len.saturating_mul(2))
                .max(1);
            let fill = sepchar.repeat(to_usize(count));
            format!("{fill} {title} {fill}")
        }
        None => sepchar.repeat(to_usize(width.div_euclid(sepchar_len))),
    };

    let trimmed = sepchar.trim_end();
    if to_i64(char_count(&line)) + to_i64(char_count(trimmed)) <= width {
        line.push_str(trimmed);
    }

    Ok(line)
}

fn to_i64(value: usize) -> i64 { i64::try_from(value).unwrap_or(i64::MAX) }

/// Negative counts repeat zero times.
fn to_usize(value: i64) -> usize { usize::try_from(value).unwrap_or(0) }
