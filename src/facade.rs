// SPDX-License-Identifier: MIT OR Apache-2.0

//! The broadcast point for log calls.
//!
//! A [`Log`] owns a [`LogState`] and an ordered list of [`Logger`]s.  Every log call is
//! handed to each logger in registration order.  There is no isolation between them:
//! the first logger that fails stops the broadcast and its error is returned.
//!
//! Most programs use the process-wide instance from
//! [`global_logger::global`](crate::global_logger::global) through the crate's macros.
//! Tests and embedders can build their own.
//!
//! # Examples
//!
//! ```
//! use simplelogging::{InMemoryWriter, Level, Log, Logger, TemplateFormatter};
//! use std::sync::Arc;
//!
//! let log = Log::without_default_logger();
//! let writer = Arc::new(InMemoryWriter::new());
//! log.add_logger(
//!     Logger::new(TemplateFormatter::new("%classname%: %msg%"), writer.clone())
//!         .with_initiation_message(None),
//! );
//!
//! log.register_class_name("shop::cart", "Cart");
//! log.log_at("shop::cart", &Level::INFO, "3 items")?;
//! assert_eq!(writer.drain_logs(), "Cart: 3 items");
//! # Ok::<(), simplelogging::LogError>(())
//! ```

use crate::error::Result;
use crate::level::Level;
use crate::logger::Logger;
use crate::settings::LogSettings;
use crate::spinlock::Spinlock;
use crate::state::LogState;
use std::collections::HashMap;
use std::error::Error;
use std::sync::Arc;

/// Fan-out to a list of loggers, plus the mode state they share.
#[derive(Debug)]
pub struct Log {
    state: LogState,
    // None until first use, so that seeding the default logger is lazy
    loggers: Spinlock<Option<Vec<Arc<Logger>>>>,
    seed_default_logger: bool,
}

impl Log {
    /// A façade that gets a console [`Logger::default`] on first use unless loggers
    /// were set before.
    pub fn new() -> Self {
        Self {
            state: LogState::new(),
            loggers: Spinlock::new(None),
            seed_default_logger: true,
        }
    }

    /// A façade that starts with no loggers at all.
    pub fn without_default_logger() -> Self {
        Self {
            seed_default_logger: false,
            ..Self::new()
        }
    }

    pub fn state(&self) -> &LogState {
        &self.state
    }

    // ------------------------------------------------------------------
    // broadcast
    // ------------------------------------------------------------------

    /// Logs at each logger's default level with its default sandbox-warning flag.
    pub fn log(&self, caller: &str, message: &str) -> Result<()> {
        self.log_with(caller, None, message, None)
    }

    pub fn log_at(&self, caller: &str, level: &Level, message: &str) -> Result<()> {
        self.log_with(caller, Some(level), message, None)
    }

    /// See [`Logger::log_with`].
    pub fn log_with(
        &self,
        caller: &str,
        level: Option<&Level>,
        message: &str,
        sandbox_warning: Option<bool>,
    ) -> Result<()> {
        for logger in self.loggers() {
            logger.log_with(&self.state, caller, level, message, sandbox_warning)?;
        }
        Ok(())
    }

    pub fn print_stack_trace(&self, error: &(dyn Error + 'static)) -> Result<()> {
        for logger in self.loggers() {
            logger.print_stack_trace(&self.state, error)?;
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // loggers
    // ------------------------------------------------------------------

    /// The registered loggers, in broadcast order.
    pub fn loggers(&self) -> Vec<Arc<Logger>> {
        self.loggers.with_mut(|loggers| {
            loggers
                .get_or_insert_with(|| self.initial_loggers())
                .clone()
        })
    }

    pub fn add_logger(&self, logger: impl Into<Arc<Logger>>) {
        let logger = logger.into();
        self.loggers.with_mut(|loggers| {
            loggers
                .get_or_insert_with(|| self.initial_loggers())
                .push(logger)
        });
    }

    /// Replaces every logger.  An empty list silences the façade.
    pub fn set_loggers(&self, new_loggers: Vec<Arc<Logger>>) {
        self.loggers.with_mut(|loggers| *loggers = Some(new_loggers));
    }

    fn initial_loggers(&self) -> Vec<Arc<Logger>> {
        if self.seed_default_logger {
            vec![Arc::new(Logger::default())]
        } else {
            Vec::new()
        }
    }

    // ------------------------------------------------------------------
    // modes
    // ------------------------------------------------------------------

    pub fn debug_mode(&self) -> bool {
        self.state.debug_mode()
    }

    pub fn set_debug_mode(&self, enabled: bool) {
        self.state.set_debug_mode(enabled);
    }

    pub fn sandbox_mode(&self) -> bool {
        self.state.sandbox_mode()
    }

    pub fn set_sandbox_mode(&self, enabled: bool) {
        self.state.set_sandbox_mode(enabled);
    }

    pub fn program_name(&self) -> String {
        self.state.program_name()
    }

    pub fn set_program_name(&self, name: impl Into<String>) {
        self.state.set_program_name(name);
    }

    /// Sets sandbox mode, debug mode and program name together.
    pub fn set_settings(&self, sandbox_mode: bool, debug_mode: bool, program_name: impl Into<String>) {
        self.apply_settings(&LogSettings::new(sandbox_mode, debug_mode, program_name));
    }

    pub fn apply_settings(&self, settings: &LogSettings) {
        settings.apply_to(&self.state);
    }

    // ------------------------------------------------------------------
    // class names
    // ------------------------------------------------------------------

    pub fn register_class_name(&self, path: impl Into<String>, name: impl Into<String>) {
        self.state.register_class_name(path, name);
    }

    pub fn class_name(&self, path: &str) -> Option<String> {
        self.state.class_name(path)
    }

    pub fn remove_class_name(&self, path: &str) -> Option<String> {
        self.state.remove_class_name(path)
    }

    pub fn class_names(&self) -> HashMap<String, String> {
        self.state.class_names()
    }
}

impl Default for Log {
    fn default() -> Self {
        Self::new()
    }
}
