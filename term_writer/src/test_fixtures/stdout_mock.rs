// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{io::{Error, ErrorKind, Result, Write},
          sync::{Arc, Mutex}};

use strip_ansi_escapes::strip;

#[derive(Debug, Default)]
pub struct StdoutMockState {
    pub buffer: Vec<u8>,
    pub write_count: usize,
    pub flush_count: usize,
    pub fail_writes: bool,
}

/// You can safely clone this struct, since it only contains an `Arc<Mutex<_>>`. The
/// inner state is not cloned, just the [Arc], so a clone handed to an
/// [`crate::OutputDevice`] can be inspected through the original.
///
/// The main constructors are:
/// - [`StdoutMock::default`] / [`StdoutMock::new`]
/// - [`StdoutMock::new_failing`], every write returns [`ErrorKind::BrokenPipe`]
/// - [`super::OutputDeviceExt::new_mock()`]
#[derive(Debug, Clone, Default)]
pub struct StdoutMock {
    pub state: Arc<Mutex<StdoutMockState>>,
}

impl StdoutMock {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn new_failing() -> Self {
        let it = Self::default();
        it.lock().fail_writes = true;
        it
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, StdoutMockState> {
        // A test that panicked while holding the lock already failed.
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    #[must_use]
    pub fn get_copy_of_buffer(&self) -> Vec<u8> { self.lock().buffer.clone() }

    /// Invalid UTF-8 is replaced, not rejected.
    #[must_use]
    pub fn get_copy_of_buffer_as_string(&self) -> String {
        String::from_utf8_lossy(&self.lock().buffer).into_owned()
    }

    #[must_use]
    pub fn get_copy_of_buffer_as_string_strip_ansi(&self) -> String {
        let stripped = strip(&self.lock().buffer);
        String::from_utf8_lossy(&stripped).into_owned()
    }

    /// Number of `write` calls that reached the mock, including failed ones.
    #[must_use]
    pub fn write_count(&self) -> usize { self.lock().write_count }

    #[must_use]
    pub fn flush_count(&self) -> usize { self.lock().flush_count }
}

impl Write for StdoutMock {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        let mut state = self.lock();
        state.write_count += 1;
        if state.fail_writes {
            return Err(Error::new(ErrorKind::BrokenPipe, "stdout mock is closed"));
        }
        state.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<()> {
        self.lock().flush_count += 1;
        Ok(())
    }
}
