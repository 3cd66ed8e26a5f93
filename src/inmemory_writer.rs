// SPDX-License-Identifier: MIT OR Apache-2.0

//! # In-Memory Writer
//!
//! A [`LogWriter`] that keeps every line in memory instead of printing it.  Useful for:
//!
//! - Unit testing code that logs
//! - Capturing logs where stdout is redirected or unavailable
//! - Programmatically examining log output
//!
//! ## Integration with the façade
//!
//! Wrap the writer in a [`Logger`](crate::Logger) and register it with
//! [`Log::add_logger`](crate::Log::add_logger) or
//! [`set_global_loggers`](crate::set_global_loggers).  Because loggers own their
//! writer, share it through an `Arc`: `Arc<InMemoryWriter>` is itself a writer.

use crate::error::Result;
use crate::state::LogState;
use crate::writer::{LogWriter, StackTraceGate, render_stack_trace};
use std::error::Error;
use std::sync::Mutex;

/// A writer that stores lines in a `Vec<String>`.
///
/// # Example
///
/// ```rust
/// use simplelogging::{InMemoryWriter, Level, Log, Logger, TemplateFormatter};
/// use std::sync::Arc;
///
/// let writer = Arc::new(InMemoryWriter::new());
/// let log = Log::without_default_logger();
/// let logger = Logger::new(TemplateFormatter::new("%level% %msg%"), writer.clone())
///     .with_initiation_message(None);
/// log.add_logger(logger);
///
/// log.log_at("app", &Level::ERROR, "disk full").unwrap();
/// assert_eq!(writer.drain_logs(), "ERROR disk full");
/// ```
#[derive(Debug)]
pub struct InMemoryWriter {
    logs: Mutex<Vec<String>>,
    ansi: bool,
    gate: StackTraceGate,
}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// - Debug: derived, required by LogWriter
// - Default: empty buffer, no ANSI, error reports only in debug mode
// - Clone: NOT implemented - share through Arc instead
// - PartialEq/Eq/Hash: NOT implemented - mutex state comparison is problematic
// - Send/Sync: automatic due to Mutex usage

impl Default for InMemoryWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryWriter {
    pub fn new() -> Self {
        Self::with_ansi(false)
    }

    /// A writer that claims to understand ANSI codes, so formatters colour their output.
    pub fn with_ansi(ansi: bool) -> Self {
        Self {
            logs: Mutex::new(Vec::new()),
            ansi,
            gate: StackTraceGate::default(),
        }
    }

    pub fn stack_trace_gate(&self) -> &StackTraceGate {
        &self.gate
    }

    /// Takes every captured line, leaving the buffer empty.
    pub fn drain_lines(&self) -> Vec<String> {
        let mut logs = self.logs.lock().unwrap();
        std::mem::take(&mut *logs)
    }

    /// Drains all logs into a single string joined by newlines.
    ///
    /// ```rust
    /// use simplelogging::{InMemoryWriter, LogWriter};
    ///
    /// let writer = InMemoryWriter::new();
    /// writer.write("First message").unwrap();
    /// writer.write("Second message").unwrap();
    /// assert_eq!(writer.drain_logs(), "First message\nSecond message");
    /// assert_eq!(writer.drain_logs(), "");
    /// ```
    pub fn drain_logs(&self) -> String {
        self.drain_lines().join("\n")
    }

    /// Flushes all captured lines to stdout, clearing the buffer.
    pub fn drain_to_console(&self) {
        for line in self.drain_lines() {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(&line));
            #[cfg(not(target_arch = "wasm32"))]
            println!("{}", line);
        }
    }
}

impl LogWriter for InMemoryWriter {
    fn write(&self, text: &str) -> Result<()> {
        self.logs.lock().unwrap().push(text.to_string());
        Ok(())
    }

    fn is_ansi(&self) -> bool {
        self.ansi
    }

    fn write_stack_trace(&self, error: &(dyn Error + 'static), state: &LogState) -> Result<()> {
        if self.gate.permits(state) {
            self.write(&render_stack_trace(error))?;
        }
        Ok(())
    }
}
