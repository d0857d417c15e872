// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{OutputDevice, StdoutMock};

pub trait OutputDeviceExt {
    /// A non-TTY output device backed by a [`StdoutMock`], plus a handle to inspect it.
    fn new_mock() -> (OutputDevice, StdoutMock);

    /// Same as [`OutputDeviceExt::new_mock()`] but the device claims to be a TTY.
    fn new_mock_tty() -> (OutputDevice, StdoutMock);
}

impl OutputDeviceExt for OutputDevice {
    fn new_mock() -> (OutputDevice, StdoutMock) { new_mock_with_tty_flag(false) }

    fn new_mock_tty() -> (OutputDevice, StdoutMock) { new_mock_with_tty_flag(true) }
}

fn new_mock_with_tty_flag(is_terminal: bool) -> (OutputDevice, StdoutMock) {
    let stdout_mock = StdoutMock::default();
    let this = OutputDevice {
        resource: Box::new(stdout_mock.clone()),
        is_terminal,
        encoding: None,
        is_mock: true,
    };
    (this, stdout_mock)
}
