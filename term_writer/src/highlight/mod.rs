// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod highlighter;
pub mod syntect_highlighter;

// Re-export.
pub use highlighter::*;
pub use syntect_highlighter::*;
