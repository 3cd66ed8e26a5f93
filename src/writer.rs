// SPDX-License-Identifier: MIT OR Apache-2.0

//! Destinations for formatted log text.
//!
//! A [`LogWriter`] accepts finished lines and error reports.  Writers do not format;
//! they only need to say whether they understand ANSI escape codes so the formatter
//! can decide whether to emit them.
//!
//! Error reports are gated by a [`StackTraceGate`]: by default a writer drops them
//! unless debug mode is on.

use crate::error::Result;
use crate::state::LogState;
use std::error::Error;
use std::fmt::Debug;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

pub trait LogWriter: Debug + Send + Sync {
    /// Writes one line.  The writer supplies the line terminator.
    fn write(&self, text: &str) -> Result<()>;

    /// Whether text sent to this writer may contain ANSI escape codes.
    fn is_ansi(&self) -> bool;

    /**
    Writes an error together with its chain of sources.

    Implementations consult their [`StackTraceGate`] and may write nothing.
    */
    fn write_stack_trace(&self, error: &(dyn Error + 'static), state: &LogState) -> Result<()>;
}

/// Decides whether a writer prints error reports outside debug mode.
#[derive(Debug)]
pub struct StackTraceGate {
    debug_only: AtomicBool,
}

impl StackTraceGate {
    /// `debug_only = true` drops error reports unless debug mode is on.
    pub const fn new(debug_only: bool) -> Self {
        Self {
            debug_only: AtomicBool::new(debug_only),
        }
    }

    pub fn debug_only(&self) -> bool {
        self.debug_only.load(Ordering::Relaxed)
    }

    pub fn set_debug_only(&self, debug_only: bool) {
        self.debug_only.store(debug_only, Ordering::Relaxed);
    }

    pub fn permits(&self, state: &LogState) -> bool {
        state.debug_mode() || !self.debug_only()
    }
}

impl Default for StackTraceGate {
    fn default() -> Self {
        Self::new(true)
    }
}

/**
Renders an error as a block of lines: the error itself, then one
`Caused by: ...` line per source.

```
use std::io;
let inner = io::Error::new(io::ErrorKind::NotFound, "config.toml");
let outer = io::Error::new(io::ErrorKind::Other, inner);
let text = simplelogging::render_stack_trace(&outer);
assert!(text.starts_with("config.toml"));
```
*/
pub fn render_stack_trace(error: &(dyn Error + 'static)) -> String {
    let mut text = error.to_string();
    for cause in std::iter::successors(error.source(), |e| (*e).source()) {
        text.push_str("\nCaused by: ");
        text.push_str(&cause.to_string());
    }
    text
}

/// Lets a caller keep a handle on a writer after giving it to a [`Logger`](crate::Logger).
impl<W: LogWriter + ?Sized> LogWriter for Arc<W> {
    fn write(&self, text: &str) -> Result<()> {
        (**self).write(text)
    }

    fn is_ansi(&self) -> bool {
        (**self).is_ansi()
    }

    fn write_stack_trace(&self, error: &(dyn Error + 'static), state: &LogState) -> Result<()> {
        (**self).write_stack_trace(error, state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thiserror::Error;

    #[derive(Debug, Error)]
    #[error("could not load settings")]
    struct Outer(#[source] Inner);

    #[derive(Debug, Error)]
    #[error("file missing")]
    struct Inner;

    #[test]
    fn renders_source_chain() {
        let error = Outer(Inner);
        assert_eq!(
            render_stack_trace(&error),
            "could not load settings\nCaused by: file missing"
        );
    }

    #[derive(Debug, Error)]
    #[error("sync failed")]
    struct Top(#[source] Outer);

    #[test]
    fn renders_every_level_of_the_chain() {
        let error = Top(Outer(Inner));
        assert_eq!(
            render_stack_trace(&error),
            "sync failed\nCaused by: could not load settings\nCaused by: file missing"
        );
    }

    #[test]
    fn gate_defaults_to_debug_only() {
        let gate = StackTraceGate::default();
        let state = LogState::new();
        assert!(!gate.permits(&state));
        state.set_debug_mode(true);
        assert!(gate.permits(&state));
        state.set_debug_mode(false);
        gate.set_debug_only(false);
        assert!(gate.permits(&state));
    }
}
