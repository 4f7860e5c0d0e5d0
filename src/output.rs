//! Where the patterns write their user-facing lines.
//!
//! Components never call `println!` directly; they hold a [`SharedOutput`]
//! and the caller decides whether lines go to the terminal ([`Console`]) or
//! into memory ([`Transcript`]) where a test can inspect them.

use std::sync::{Arc, Mutex, MutexGuard};

pub trait Output: Send + Sync {
    fn emit(&self, line: &str);
}

pub type SharedOutput = Arc<dyn Output>;

/// Writes each line to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct Console;

impl Console {
    pub fn shared() -> SharedOutput {
        Arc::new(Console)
    }
}

impl Output for Console {
    fn emit(&self, line: &str) {
        println!("{line}");
    }
}

/// Records every emitted line in order. Clones share the same buffer.
#[derive(Debug, Default, Clone)]
pub struct Transcript {
    lines: Arc<Mutex<Vec<String>>>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// A handle to the same buffer, typed for injection into a component.
    pub fn shared(&self) -> SharedOutput {
        Arc::new(self.clone())
    }

    pub fn lines(&self) -> Vec<String> {
        self.buffer().clone()
    }

    pub fn len(&self) -> usize {
        self.buffer().len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer().is_empty()
    }

    pub fn clear(&self) {
        self.buffer().clear();
    }

    // A panic in another holder leaves the Vec intact, so keep using it.
    fn buffer(&self) -> MutexGuard<'_, Vec<String>> {
        self.lines.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Output for Transcript {
    fn emit(&self, line: &str) {
        self.buffer().push(line.to_string());
    }
}
