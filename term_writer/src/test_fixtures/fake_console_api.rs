// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{io,
          sync::{Arc, Mutex, MutexGuard}};

use crate::ConsoleApi;

#[derive(Debug, Default)]
struct FakeConsoleState {
    current: u16,
    set_history: Vec<u16>,
}

/// In-memory console attribute word. Clones share state, so keep one clone to inspect
/// what a [`crate::NativeConsoleColorStrategy`] did with the other.
#[derive(Debug, Clone, Default)]
pub struct FakeConsoleApi {
    state: Arc<Mutex<FakeConsoleState>>,
}

impl FakeConsoleApi {
    #[must_use]
    pub fn new(initial_attribute: u16) -> Self {
        let it = Self::default();
        it.lock().current = initial_attribute;
        it
    }

    fn lock(&self) -> MutexGuard<'_, FakeConsoleState> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    #[must_use]
    pub fn current(&self) -> u16 { self.lock().current }

    /// Every attribute passed to [`ConsoleApi::set_text_attribute()`], oldest first.
    #[must_use]
    pub fn set_history(&self) -> Vec<u16> { self.lock().set_history.clone() }
}

impl ConsoleApi for FakeConsoleApi {
    fn text_attribute(&self) -> io::Result<u16> { Ok(self.current()) }

    fn set_text_attribute(&self, attribute: u16) -> io::Result<()> {
        let mut state = self.lock();
        state.current = attribute;
        state.set_history.push(attribute);
        Ok(())
    }
}
