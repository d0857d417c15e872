// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Display width of text, measured in terminal cells.
//!
//! A character is either narrow (1 cell) or wide (2 cells). Wide means the East Asian
//! Width property is `W` (Wide) or `F` (Fullwidth); every other class, including `A`
//! (Ambiguous), is narrow.
//!
//! [`unicode_width`] reports 2 for `W` / `F` characters, except for a few `W` code points
//! it renders as zero width (combining ideographic tone marks, kana voicing marks,
//! Hangul fillers). Those are listed in [`EAW_WIDE_ZERO_RENDERED`] and checked first.
//! Narrow characters that render as zero width (combining accents, controls) count as 1.
//!
//! Strings are NFC normalized before measurement, so a base letter followed by a
//! combining accent measures the same as its precomposed form.

use std::{cmp::Ordering,
          sync::{LazyLock, Mutex}};

use unicode_normalization::UnicodeNormalization;
use unicode_width::UnicodeWidthChar;

use super::LruCache;

/// Number of distinct characters whose width is remembered.
pub const CHAR_WIDTH_CACHE_CAPACITY: usize = 100;

/// Process wide cache. The lookup is pure, so a key never needs invalidating and an
/// evicted entry is recomputed with the same result.
static CHAR_WIDTH_CACHE: LazyLock<Mutex<LruCache<char, u8>>> =
    LazyLock::new(|| Mutex::new(LruCache::new(CHAR_WIDTH_CACHE_CAPACITY)));

/// Returns `2` for wide / fullwidth characters, `1` for everything else.
///
/// ```
/// use r3bl_term_writer::char_width;
///
/// assert_eq!(char_width('a'), 1);
/// assert_eq!(char_width('中'), 2);
/// ```
#[must_use]
pub fn char_width(ch: char) -> usize {
    let width = match CHAR_WIDTH_CACHE.lock() {
        Ok(mut cache) => {
            if let Some(width) = cache.get(&ch) {
                width
            } else {
                let width = east_asian_width(ch);
                cache.insert(ch, width);
                width
            }
        }
        // Poisoned lock: skip the cache.
        Err(_) => east_asian_width(ch),
    };
    usize::from(width)
}

/// Code points with East Asian Width `W` that [`unicode_width`] does not report as 2.
/// Sorted, non-overlapping, inclusive ranges.
#[rustfmt::skip]
pub const EAW_WIDE_ZERO_RENDERED: &[(u32, u32)] = &[
    (0x115F, 0x115F),   // HANGUL CHOSEONG FILLER
    (0x302A, 0x302F),   // Ideographic and Hangul tone marks
    (0x3099, 0x309A),   // Combining kana voiced / semi-voiced sound marks
    (0x3164, 0x3164),   // HANGUL FILLER
    (0x16FE4, 0x16FE4), // KHITAN SMALL SCRIPT FILLER
    (0x16FF0, 0x16FF1), // Vietnamese alternate reading marks
];

fn is_eaw_wide_zero_rendered(ch: char) -> bool {
    let code = u32::from(ch);
    EAW_WIDE_ZERO_RENDERED
        .binary_search_by(|&(start, end)| {
            if end < code {
                Ordering::Less
            } else if start > code {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .is_ok()
}

fn east_asian_width(ch: char) -> u8 {
    if is_eaw_wide_zero_rendered(ch) {
        return 2;
    }
    match UnicodeWidthChar::width(ch) {
        Some(2) => 2,
        _ => 1,
    }
}

/// Sum of [`char_width`] over the NFC normalized form of `text`.
///
/// ```
/// use r3bl_term_writer::line_width;
///
/// assert_eq!(line_width(""), 0);
/// assert_eq!(line_width("abc"), 3);
/// assert_eq!(line_width("a中b"), 4);
/// ```
#[must_use]
pub fn line_width(text: &str) -> usize { text.nfc().map(char_width).sum() }

/// Number of Unicode scalar values in `text`, without normalization. This is the
/// "length" used for line position character counts and separator arithmetic.
#[must_use]
pub fn char_count(text: &str) -> usize { text.chars().count() }
