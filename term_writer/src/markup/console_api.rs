// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::Debug, io};

/// Access to the console text attribute word (the `wAttributes` field of the Windows
/// console screen buffer). Implemented by [`WinConsoleApi`] on Windows, and by
/// [`crate::FakeConsoleApi`] in tests.
pub trait ConsoleApi: Debug + Send {
    /// # Errors
    ///
    /// Returns an error if the console can't be queried.
    fn text_attribute(&self) -> io::Result<u16>;

    /// # Errors
    ///
    /// Returns an error if the console rejects the attribute.
    fn set_text_attribute(&self, attribute: u16) -> io::Result<()>;
}

#[cfg(windows)]
pub use win_console_api::WinConsoleApi;

#[cfg(windows)]
mod win_console_api {
    use std::io;

    use crossterm_winapi::{Console, ScreenBuffer};

    use super::ConsoleApi;

    /// The screen buffer attached to this process' stdout.
    #[derive(Debug, Clone)]
    pub struct WinConsoleApi {
        screen_buffer: ScreenBuffer,
    }

    impl WinConsoleApi {
        /// # Errors
        ///
        /// Returns an error if stdout isn't attached to a console.
        pub fn new() -> io::Result<Self> {
            let screen_buffer = ScreenBuffer::current()?;
            // Make sure the buffer can actually be queried.
            let _info = screen_buffer.info()?;
            Ok(Self { screen_buffer })
        }
    }

    impl ConsoleApi for WinConsoleApi {
        fn text_attribute(&self) -> io::Result<u16> {
            Ok(self.screen_buffer.info()?.attributes())
        }

        fn set_text_attribute(&self, attribute: u16) -> io::Result<()> {
            Console::from(self.screen_buffer.handle().clone()).set_text_attribute(attribute)
        }
    }
}
