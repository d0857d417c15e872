// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::Debug,
          io::{self, Write}};

use crate::{AnsiColorStrategy, ConsoleApi, MarkupSpec, NativeConsoleColorStrategy,
            PlatformKind};

/// How a [`MarkupSpec`] becomes visible. One strategy is picked when a
/// [`crate::TerminalWriter`] is built and is used for its whole lifetime.
///
/// Callers only invoke these when markup is enabled and `spec` is non-empty; an
/// implementation must still treat an empty spec as "write the text as is".
pub trait MarkupStrategy: Debug + Send {
    fn name(&self) -> &'static str;

    /// Return `text` with any in-band markup applied.
    fn apply_markup(&self, text: &str, spec: &MarkupSpec) -> String;

    /// Write `text` to `out` so that it shows up styled according to `spec`.
    ///
    /// # Errors
    ///
    /// Errors from `out` are returned unchanged.
    fn write_styled(
        &self,
        out: &mut dyn Write,
        text: &str,
        spec: &MarkupSpec,
    ) -> io::Result<()>;
}

/// Pick the strategy for `platform`.
///
/// [`PlatformKind::NativeConsole`] needs a [`ConsoleApi`]. `console_api` is used if
/// given, otherwise the real console is opened (Windows only). Without a console the
/// ANSI strategy is used.
#[must_use]
pub fn select_markup_strategy(
    platform: PlatformKind,
    console_api: Option<Box<dyn ConsoleApi>>,
) -> Box<dyn MarkupStrategy> {
    match platform {
        PlatformKind::NativeConsole => match console_api.or_else(default_console_api) {
            Some(console_api) => Box::new(NativeConsoleColorStrategy::new(console_api)),
            None => {
                tracing::warn!(
                    "native console markup requested but no console is available, \
                     falling back to ANSI"
                );
                Box::new(AnsiColorStrategy)
            }
        },
        PlatformKind::Ansi | PlatformKind::Unsupported => Box::new(AnsiColorStrategy),
    }
}

#[cfg(windows)]
fn default_console_api() -> Option<Box<dyn ConsoleApi>> {
    match crate::WinConsoleApi::new() {
        Ok(it) => Some(Box::new(it)),
        Err(error) => {
            tracing::warn!(%error, "could not open the console screen buffer");
            None
        }
    }
}

#[cfg(not(windows))]
fn default_console_api() -> Option<Box<dyn ConsoleApi>> { None }
