// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod display_width;
pub mod lru_cache;

// Re-export.
pub use display_width::*;
pub use lru_cache::*;
