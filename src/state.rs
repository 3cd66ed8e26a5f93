// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mode flags and naming state shared by every logger of a [`Log`](crate::Log).
//!
//! [`LogState`] holds the debug and sandbox flags, the program name used in mode
//! announcements, and the table translating caller paths into display names.
//! Loggers and formatters receive it by reference on every call instead of reading
//! hidden globals, so a test can build its own state and observe it in isolation.
//!
//! All accessors take `&self`.  The flags are atomics; the program name and the
//! translation table sit behind a spinlock.

use crate::spinlock::Spinlock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

pub const DEFAULT_PROGRAM_NAME: &str = "Program";

#[derive(Debug)]
pub struct LogState {
    debug_mode: AtomicBool,
    sandbox_mode: AtomicBool,
    program_name: Spinlock<String>,
    class_names: Spinlock<HashMap<String, String>>,
}

impl LogState {
    /// Debug and sandbox mode off, program name `"Program"`, no translations.
    pub fn new() -> Self {
        Self {
            debug_mode: AtomicBool::new(false),
            sandbox_mode: AtomicBool::new(false),
            program_name: Spinlock::new(DEFAULT_PROGRAM_NAME.to_string()),
            class_names: Spinlock::new(HashMap::new()),
        }
    }

    pub fn debug_mode(&self) -> bool {
        self.debug_mode.load(Ordering::Acquire)
    }

    pub fn set_debug_mode(&self, enabled: bool) {
        self.debug_mode.store(enabled, Ordering::Release);
    }

    pub fn sandbox_mode(&self) -> bool {
        self.sandbox_mode.load(Ordering::Acquire)
    }

    pub fn set_sandbox_mode(&self, enabled: bool) {
        self.sandbox_mode.store(enabled, Ordering::Release);
    }

    pub fn program_name(&self) -> String {
        self.program_name.get()
    }

    pub fn set_program_name(&self, name: impl Into<String>) {
        let name = name.into();
        self.program_name.with_mut(|current| *current = name);
    }

    /// Maps a caller path (usually a `module_path!()`) to the name shown in log lines.
    pub fn register_class_name(&self, path: impl Into<String>, name: impl Into<String>) {
        let (path, name) = (path.into(), name.into());
        self.class_names.with_mut(|names| {
            names.insert(path, name);
        });
    }

    pub fn class_name(&self, path: &str) -> Option<String> {
        self.class_names.with(|names| names.get(path).cloned())
    }

    /// Removes a translation, returning the display name it had.
    pub fn remove_class_name(&self, path: &str) -> Option<String> {
        self.class_names.with_mut(|names| names.remove(path))
    }

    /// A snapshot of every registered translation.
    pub fn class_names(&self) -> HashMap<String, String> {
        self.class_names.get()
    }

    /**
    Resolves the class name shown for a caller.

    A registered translation wins.  Otherwise the raw path is used when
    `include_untranslated` is set, and the class name is absent when it is not.
    */
    pub fn resolve_class_name(&self, path: &str, include_untranslated: bool) -> Option<String> {
        self.class_name(path)
            .or_else(|| include_untranslated.then(|| path.to_string()))
    }
}

impl Default for LogState {
    fn default() -> Self {
        Self::new()
    }
}
