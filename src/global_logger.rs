// SPDX-License-Identifier: MIT OR Apache-2.0

//! The process-wide [`Log`].
//!
//! The crate's macros log through a single [`Log`] created on first use.  When it is
//! created it reads [`LogSettings::from_env`](crate::LogSettings::from_env), and on its
//! first broadcast it seeds itself with one console logger unless loggers were set
//! before.  It lives for the rest of the process.
//!
//! # Examples
//!
//! ## Using the default logger
//!
//! ```
//! use simplelogging::global_logger::global_loggers;
//!
//! // Initialises with a console logger if nothing was configured
//! let loggers = global_loggers();
//! assert!(!loggers.is_empty());
//! ```
//!
//! ## Capturing output
//!
//! ```
//! use simplelogging::global_logger::set_global_loggers;
//! use simplelogging::{InMemoryWriter, Logger};
//! use std::sync::Arc;
//!
//! let writer = Arc::new(InMemoryWriter::new());
//! set_global_loggers(vec![Arc::new(Logger::with_writer(writer.clone()))]);
//!
//! simplelogging::warning!("Only captured in memory").unwrap();
//! assert!(writer.drain_logs().contains("Only captured in memory"));
//! ```

use crate::facade::Log;
use crate::logger::Logger;
use crate::settings::LogSettings;
use std::sync::{Arc, OnceLock};

static GLOBAL_LOG: OnceLock<Log> = OnceLock::new();

/// The process-wide façade.
pub fn global() -> &'static Log {
    GLOBAL_LOG.get_or_init(|| {
        let log = Log::new();
        log.apply_settings(&LogSettings::from_env());
        log
    })
}

/// The loggers of the global façade.  Seeds the default console logger if needed.
pub fn global_loggers() -> Vec<Arc<Logger>> {
    global().loggers()
}

/// Appends a logger to the global façade, after the default one if it was seeded.
pub fn add_global_logger(logger: impl Into<Arc<Logger>>) {
    global().add_logger(logger);
}

/// Replaces every logger of the global façade.
pub fn set_global_loggers(loggers: Vec<Arc<Logger>>) {
    global().set_loggers(loggers);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inmemory_writer::InMemoryWriter;
    use std::sync::Mutex;

    static TEST_LOGGER_GUARD: Mutex<()> = Mutex::new(());

    #[test]
    fn test_add_logger() {
        let _guard = TEST_LOGGER_GUARD.lock().unwrap();
        set_global_loggers(vec![Arc::new(Logger::default())]);
        let initial_count = global_loggers().len();

        add_global_logger(Logger::with_writer(InMemoryWriter::new()));

        assert_eq!(
            global_loggers().len(),
            initial_count + 1,
            "Logger count should increase by 1"
        );
    }

    #[test]
    fn test_set_loggers() {
        let _guard = TEST_LOGGER_GUARD.lock().unwrap();
        let logger1 = Arc::new(Logger::with_writer(InMemoryWriter::new()));
        let logger2 = Arc::new(Logger::with_writer(InMemoryWriter::new()));

        set_global_loggers(vec![logger1, logger2]);

        assert_eq!(global_loggers().len(), 2, "Should have exactly 2 loggers");
    }

    #[test]
    fn test_thread_safety() {
        use std::thread;

        let _guard = TEST_LOGGER_GUARD.lock().unwrap();
        set_global_loggers(vec![Arc::new(Logger::default())]);

        let handle = thread::spawn(|| {
            add_global_logger(Logger::with_writer(InMemoryWriter::new()));
        });

        let _ = global_loggers();
        handle.join().expect("Thread should complete successfully");

        assert!(
            global_loggers().len() >= 2,
            "Should have at least 2 loggers after thread operation"
        );
    }
}
