// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Decide whether a [`crate::TerminalWriter`] emits markup.
//!
//! The process environment is read exactly once, into a [`TerminalEnv`] snapshot, and
//! the decision is made once per writer at construction time. Changing the environment
//! afterwards has no effect on an existing writer.
//!
//! Priority order used by [`should_do_markup()`]:
//! 1. [`ENV_FORCE_COLOR`] set (and not `"0"`) forces markup on.
//! 2. [`ENV_NO_COLOR`] set to a non-empty value (other than `"0"`) forces markup off.
//!    An empty `NO_COLOR=` is treated as unset, see <https://no-color.org>.
//! 3. Otherwise markup is on iff the output device is a TTY, `TERM` isn't `dumb`, and
//!    the platform can render markup at all (see [`PlatformKind`]).

use std::env;

pub const ENV_FORCE_COLOR: &str = "CLICOLOR_FORCE";
pub const ENV_NO_COLOR: &str = "NO_COLOR";
pub const ENV_TERM: &str = "TERM";
pub const DUMB_TERM: &str = "dumb";

/// How the platform renders markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformKind {
    /// The terminal interprets escape sequences written in-band.
    Ansi,
    /// Legacy Windows console: no VT processing, but the console text attribute API
    /// is available.
    NativeConsole,
    /// Neither escape sequences nor a console API are usable.
    Unsupported,
}

impl PlatformKind {
    /// Probe the running platform. On Windows this asks the console whether VT
    /// processing can be enabled, and falls back to the attribute API.
    #[must_use]
    pub fn detect() -> Self {
        #[cfg(windows)]
        {
            if crossterm::ansi_support::supports_ansi() {
                PlatformKind::Ansi
            } else if crate::WinConsoleApi::new().is_ok() {
                PlatformKind::NativeConsole
            } else {
                PlatformKind::Unsupported
            }
        }
        #[cfg(not(windows))]
        {
            PlatformKind::Ansi
        }
    }
}

/// Read-only snapshot of the environment signals the writer depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalEnv {
    /// `Some(true)` forces markup on, `Some(false)` forces it off.
    pub force_color: Option<bool>,
    /// Value of `TERM`, if set.
    pub term: Option<String>,
    pub platform: PlatformKind,
    /// Writing into the last column moves the cursor to the next line (Windows
    /// consoles), so full width lines must stop one column short.
    pub wraps_at_last_column: bool,
}

impl Default for TerminalEnv {
    /// No overrides, no `TERM`, an ANSI capable platform that doesn't wrap.
    fn default() -> Self {
        Self {
            force_color: None,
            term: None,
            platform: PlatformKind::Ansi,
            wraps_at_last_column: false,
        }
    }
}

impl TerminalEnv {
    /// Snapshot the real process environment and platform.
    #[must_use]
    pub fn from_process_env() -> Self {
        Self {
            platform: PlatformKind::detect(),
            wraps_at_last_column: cfg!(windows),
            ..Self::from_lookup(|name| env::var(name).ok())
        }
    }

    /// Build the env var derived fields from `lookup`. The platform fields keep their
    /// defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let force_on = is_set_and_not_zero(lookup(ENV_FORCE_COLOR).as_deref());
        let force_off = is_non_empty_and_not_zero(lookup(ENV_NO_COLOR).as_deref());
        let force_color = match (force_on, force_off) {
            (true, _) => Some(true),
            (false, true) => Some(false),
            (false, false) => None,
        };
        Self {
            force_color,
            term: lookup(ENV_TERM),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_force_color(mut self, force_color: Option<bool>) -> Self {
        self.force_color = force_color;
        self
    }

    #[must_use]
    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = Some(term.into());
        self
    }

    #[must_use]
    pub fn with_platform(mut self, platform: PlatformKind) -> Self {
        self.platform = platform;
        self
    }

    #[must_use]
    pub fn with_wraps_at_last_column(mut self, wraps: bool) -> Self {
        self.wraps_at_last_column = wraps;
        self
    }

    #[must_use]
    pub fn is_dumb_terminal(&self) -> bool { self.term.as_deref() == Some(DUMB_TERM) }
}

/// See the [module docs](self) for the priority order.
#[must_use]
pub fn should_do_markup(env: &TerminalEnv, is_terminal: bool) -> bool {
    match env.force_color {
        Some(forced) => {
            tracing::debug!(forced, "markup forced by environment");
            forced
        }
        None => {
            let it = is_terminal
                && !env.is_dumb_terminal()
                && env.platform != PlatformKind::Unsupported;
            tracing::debug!(
                is_terminal,
                term = ?env.term,
                platform = ?env.platform,
                markup = it,
                "markup detected"
            );
            it
        }
    }
}

fn is_set_and_not_zero(value: Option<&str>) -> bool {
    match value {
        None | Some("0") => false,
        Some(_) => true,
    }
}

fn is_non_empty_and_not_zero(value: Option<&str>) -> bool {
    match value {
        None | Some("" | "0") => false,
        Some(_) => true,
    }
}
