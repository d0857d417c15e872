// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{self, Write};

use crate::{MarkupSpec, MarkupStrategy, SGR_RESET, SgrSequence};

/// Wraps text in one SGR command and a reset: `ESC[<codes>m` + text + `ESC[0m`.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnsiColorStrategy;

impl AnsiColorStrategy {
    pub const NAME: &'static str = "ansi";
}

impl MarkupStrategy for AnsiColorStrategy {
    fn name(&self) -> &'static str { Self::NAME }

    fn apply_markup(&self, text: &str, spec: &MarkupSpec) -> String {
        if spec.is_empty() {
            return text.to_string();
        }
        format!("{}{text}{SGR_RESET}", SgrSequence(spec))
    }

    fn write_styled(
        &self,
        out: &mut dyn Write,
        text: &str,
        spec: &MarkupSpec,
    ) -> io::Result<()> {
        out.write_all(self.apply_markup(text, spec).as_bytes())
    }
}
