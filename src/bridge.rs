// SPDX-License-Identifier: MIT OR Apache-2.0

//! A backend for the [`log`](https://docs.rs/log) crate.
//!
//! [`LogBridge`] implements [`log::Log`](::log::Log) so that `log::info!` and friends
//! from any dependency end up in a [`Log`] façade.  The record's module path is used as
//! the caller, falling back to its target.
//!
//! | `log` level      | [`Level`]          |
//! |------------------|--------------------|
//! | `Error`          | [`Level::ERROR`]   |
//! | `Warn`           | [`Level::WARNING`] |
//! | `Info`           | [`Level::INFO`]    |
//! | `Debug`, `Trace` | [`Level::DEBUG`]   |
//!
//! `log::Log::log` cannot report failures, so write errors are dropped here.
//!
//! ```no_run
//! simplelogging::LogBridge::new().init().expect("another logger is installed");
//! log::info!("routed through simplelogging");
//! ```

use crate::facade::Log;
use crate::global_logger::global;
use crate::level::Level;
use ::log::{LevelFilter, Metadata, Record, SetLoggerError};

#[derive(Debug)]
pub struct LogBridge {
    log: &'static Log,
    max_level: LevelFilter,
}

impl LogBridge {
    /// Forwards every record to the global façade.
    pub fn new() -> Self {
        Self::with_log(global())
    }

    pub fn with_log(log: &'static Log) -> Self {
        Self {
            log,
            max_level: LevelFilter::Trace,
        }
    }

    /// Drops records less severe than `max_level` before they are formatted.
    pub fn with_max_level(mut self, max_level: LevelFilter) -> Self {
        self.max_level = max_level;
        self
    }

    /// Installs the bridge as the `log` crate's logger.
    pub fn init(self) -> Result<(), SetLoggerError> {
        let max_level = self.max_level;
        ::log::set_boxed_logger(Box::new(self))?;
        ::log::set_max_level(max_level);
        Ok(())
    }
}

impl Default for LogBridge {
    fn default() -> Self {
        Self::new()
    }
}

/// The [`Level`] a `log` crate record is written at.
pub fn from_log_level(level: ::log::Level) -> Level {
    match level {
        ::log::Level::Error => Level::ERROR,
        ::log::Level::Warn => Level::WARNING,
        ::log::Level::Info => Level::INFO,
        ::log::Level::Debug | ::log::Level::Trace => Level::DEBUG,
    }
}

impl ::log::Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let caller = record.module_path().unwrap_or_else(|| record.target());
        let message = record.args().to_string();
        let _ = self.log.log_at(caller, &from_log_level(record.level()), &message);
    }

    fn flush(&self) {
        //nothing to do since we are unbuffered
    }
}
