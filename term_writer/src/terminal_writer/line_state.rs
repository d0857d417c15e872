// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{char_count, line_width};

/// Where the cursor is on the current line, in characters and in terminal cells,
/// derived purely from what has been written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineState {
    pub chars_on_current_line: usize,
    pub width_of_current_line: usize,
}

impl LineState {
    /// Account for `text` having been written. Only the part after the last newline
    /// counts; a newline resets the line, no newline accumulates.
    pub fn update(&mut self, text: &str) {
        match text.rsplit_once('\n') {
            Some((_, tail)) => {
                self.chars_on_current_line = char_count(tail);
                self.width_of_current_line = line_width(tail);
            }
            None => {
                self.chars_on_current_line += char_count(text);
                self.width_of_current_line += line_width(text);
            }
        }
    }
}
