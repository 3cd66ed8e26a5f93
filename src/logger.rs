// SPDX-License-Identifier: MIT OR Apache-2.0

//! A formatter and a writer, plus the bookkeeping that announces mode changes.
//!
//! Each [`Logger`] remembers whether it has written anything yet and which debug and
//! sandbox modes it saw last.  On every call it compares those with the current
//! [`LogState`] and writes, in this order:
//!
//! 1. the initiation message, on its very first call;
//! 2. a debug-mode announcement, if debug mode changed since the previous call;
//! 3. a sandbox-mode announcement, if sandbox mode changed;
//! 4. the message itself;
//! 5. the sandbox warning, if sandbox mode is on and the caller asked for it.
//!
//! Each line is skipped when the formatter suppresses it.  The remembered state is
//! updated before anything is written, so a failing writer does not cause an
//! announcement to repeat.

use crate::console_writer::ConsoleWriter;
use crate::error::Result;
use crate::formatter::{DefaultFormatter, Formatted, LogFormatter};
use crate::level::Level;
use crate::log_record::LogRecord;
use crate::spinlock::Spinlock;
use crate::state::LogState;
use crate::writer::LogWriter;
use std::error::Error;

pub const DEFAULT_INITIATION_MESSAGE: &str = "------------------------------- New Logger Initiation! Program (re-)start? -------------------------------";

#[derive(Debug, Clone)]
struct LoggerConfig {
    default_level: Level,
    default_sandbox_warning: bool,
    include_untranslated_class_name: bool,
    initiation_message: Option<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            default_level: Level::INFO,
            default_sandbox_warning: false,
            include_untranslated_class_name: false,
            initiation_message: Some(DEFAULT_INITIATION_MESSAGE.to_string()),
        }
    }
}

/// What a logger saw on its previous call.
#[derive(Debug, Clone, Copy, Default)]
struct Seen {
    has_logged_before: bool,
    debug_mode: bool,
    sandbox_mode: bool,
}

/// Lines owed before the message, decided under the lock.
#[derive(Debug, Clone, Copy)]
struct Owed {
    initiation: bool,
    debug_announcement: bool,
    sandbox_announcement: bool,
}

/**
Pairs a [`LogFormatter`] with a [`LogWriter`].

```
use simplelogging::{InMemoryWriter, Level, LogState, Logger, TemplateFormatter};
use std::sync::Arc;

let writer = Arc::new(InMemoryWriter::new());
let logger = Logger::new(TemplateFormatter::new("%level%:%msg%"), writer.clone())
    .with_initiation_message(Some("-- start --".to_string()));
let state = LogState::new();

logger.log_at(&state, module_path!(), &Level::INFO, "hello")?;
assert_eq!(writer.drain_lines(), ["-- start --", "INFO:hello"]);
# Ok::<(), simplelogging::LogError>(())
```
*/
#[derive(Debug)]
pub struct Logger {
    formatter: Box<dyn LogFormatter>,
    writer: Box<dyn LogWriter>,
    config: Spinlock<LoggerConfig>,
    seen: Spinlock<Seen>,
}

impl Logger {
    pub fn new(formatter: impl LogFormatter + 'static, writer: impl LogWriter + 'static) -> Self {
        Self {
            formatter: Box::new(formatter),
            writer: Box::new(writer),
            config: Spinlock::new(LoggerConfig::default()),
            seen: Spinlock::new(Seen::default()),
        }
    }

    /// A logger writing to the console.
    pub fn with_formatter(formatter: impl LogFormatter + 'static) -> Self {
        Self::new(formatter, ConsoleWriter::new())
    }

    /// A logger using the [`DefaultFormatter`].
    pub fn with_writer(writer: impl LogWriter + 'static) -> Self {
        Self::new(DefaultFormatter::new(), writer)
    }

    pub fn with_default_level(self, level: Level) -> Self {
        self.set_default_level(level);
        self
    }

    pub fn with_default_sandbox_warning(self, enabled: bool) -> Self {
        self.set_default_sandbox_warning(enabled);
        self
    }

    pub fn with_include_untranslated_class_name(self, enabled: bool) -> Self {
        self.set_include_untranslated_class_name(enabled);
        self
    }

    /// `None` skips the initiation line.
    pub fn with_initiation_message(self, message: Option<String>) -> Self {
        self.set_initiation_message(message);
        self
    }

    pub fn default_level(&self) -> Level {
        self.config.with(|c| c.default_level.clone())
    }

    pub fn set_default_level(&self, level: Level) {
        self.config.with_mut(|c| c.default_level = level);
    }

    pub fn default_sandbox_warning(&self) -> bool {
        self.config.with(|c| c.default_sandbox_warning)
    }

    pub fn set_default_sandbox_warning(&self, enabled: bool) {
        self.config.with_mut(|c| c.default_sandbox_warning = enabled);
    }

    /// Whether callers without a registered translation are shown by their raw path.
    pub fn include_untranslated_class_name(&self) -> bool {
        self.config.with(|c| c.include_untranslated_class_name)
    }

    pub fn set_include_untranslated_class_name(&self, enabled: bool) {
        self.config
            .with_mut(|c| c.include_untranslated_class_name = enabled);
    }

    pub fn initiation_message(&self) -> Option<String> {
        self.config.with(|c| c.initiation_message.clone())
    }

    pub fn set_initiation_message(&self, message: Option<String>) {
        self.config.with_mut(|c| c.initiation_message = message);
    }

    /// Whether this logger has handled at least one log call.
    pub fn has_logged(&self) -> bool {
        self.seen.with(|s| s.has_logged_before)
    }

    pub fn formatter(&self) -> &dyn LogFormatter {
        self.formatter.as_ref()
    }

    pub fn writer(&self) -> &dyn LogWriter {
        self.writer.as_ref()
    }

    /// Logs at the default level with the default sandbox-warning flag.
    pub fn log(&self, state: &LogState, caller: &str, message: &str) -> Result<()> {
        self.log_with(state, caller, None, message, None)
    }

    pub fn log_at(&self, state: &LogState, caller: &str, level: &Level, message: &str) -> Result<()> {
        self.log_with(state, caller, Some(level), message, None)
    }

    /**
    Logs `message` on behalf of `caller`.

    `caller` is the path of the calling code, normally `module_path!()`.  It is
    translated through the [`LogState`] class-name table.  `None` for `level` or
    `sandbox_warning` uses this logger's defaults.
    */
    pub fn log_with(
        &self,
        state: &LogState,
        caller: &str,
        level: Option<&Level>,
        message: &str,
        sandbox_warning: Option<bool>,
    ) -> Result<()> {
        let config = self.config.get();
        let level = level.unwrap_or(&config.default_level).clone();
        let sandbox_warning = sandbox_warning.unwrap_or(config.default_sandbox_warning);
        let debug_mode = state.debug_mode();
        let sandbox_mode = state.sandbox_mode();
        let ansi = self.writer.is_ansi();

        let owed = self.seen.with_mut(|seen| {
            let owed = Owed {
                initiation: !seen.has_logged_before,
                debug_announcement: seen.debug_mode != debug_mode,
                sandbox_announcement: seen.sandbox_mode != sandbox_mode,
            };
            *seen = Seen {
                has_logged_before: true,
                debug_mode,
                sandbox_mode,
            };
            owed
        });

        if owed.initiation {
            if let Some(message) = &config.initiation_message {
                self.writer.write(message)?;
            }
        }
        if owed.debug_announcement {
            self.emit(self.formatter.debug_announcement(ansi, debug_mode, state))?;
        }
        if owed.sandbox_announcement {
            self.emit(self.formatter.sandbox_announcement(ansi, sandbox_mode, state))?;
        }

        let class_name = state.resolve_class_name(caller, config.include_untranslated_class_name);
        let record = LogRecord::new(message, level, class_name);
        self.emit(self.formatter.format(&record, ansi, state))?;

        if sandbox_mode && sandbox_warning {
            self.emit(self.formatter.sandbox_warning(ansi, state))?;
        }
        Ok(())
    }

    /// Hands `error` to the writer.  No formatting and no mode bookkeeping happen.
    pub fn print_stack_trace(&self, state: &LogState, error: &(dyn Error + 'static)) -> Result<()> {
        self.writer.write_stack_trace(error, state)
    }

    fn emit(&self, formatted: Formatted) -> Result<()> {
        match formatted {
            Formatted::Text(text) => self.writer.write(&text),
            Formatted::Suppressed => Ok(()),
        }
    }
}

impl Default for Logger {
    /// [`DefaultFormatter`] writing to the console.
    fn default() -> Self {
        Self::new(DefaultFormatter::new(), ConsoleWriter::new())
    }
}

/*
Boilerplate notes.

# Logger

Clone is out: the transition flags belong to one sink, and a clone would announce
every mode change twice.
PartialEq/Eq/Hash: formatters and writers are trait objects with no notion of equality.
Default: the console logger the façade seeds itself with.
Send/Sync: both trait objects are Send + Sync and the flags sit behind spinlocks.
*/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatter::TemplateFormatter;
    use crate::inmemory_writer::InMemoryWriter;
    use std::sync::Arc;

    fn logger(template: &str) -> (Logger, Arc<InMemoryWriter>) {
        let writer = Arc::new(InMemoryWriter::new());
        let logger = Logger::new(TemplateFormatter::new(template), writer.clone());
        (logger, writer)
    }

    #[test]
    fn first_call_writes_initiation_message() {
        let (logger, writer) = logger("%msg%");
        let state = LogState::new();
        assert!(!logger.has_logged());
        logger.log(&state, "app", "one").unwrap();
        logger.log(&state, "app", "two").unwrap();
        assert!(logger.has_logged());
        assert_eq!(
            writer.drain_lines(),
            [DEFAULT_INITIATION_MESSAGE, "one", "two"]
        );
    }

    #[test]
    fn initiation_message_is_not_formatted() {
        let (logger, writer) = logger("[%level%] %msg%");
        let logger = logger.with_initiation_message(Some("%msg% raw".to_string()));
        logger.log(&LogState::new(), "app", "x").unwrap();
        assert_eq!(writer.drain_lines(), ["%msg% raw", "[INFO] x"]);
    }

    #[test]
    fn debug_toggle_is_announced_once() {
        let (logger, writer) = logger("%msg%");
        let logger = logger.with_initiation_message(None);
        let state = LogState::new();
        logger.log(&state, "app", "a").unwrap();
        state.set_debug_mode(true);
        logger.log(&state, "app", "b").unwrap();
        logger.log(&state, "app", "c").unwrap();
        state.set_debug_mode(false);
        logger.log(&state, "app", "d").unwrap();
        assert_eq!(
            writer.drain_lines(),
            [
                "a",
                "Program runs in debug mode!",
                "b",
                "c",
                "Program no longer runs in debug mode!",
                "d"
            ]
        );
    }

    #[test]
    fn modes_already_on_are_announced_on_first_call() {
        let (logger, writer) = logger("%msg%");
        let state = LogState::new();
        state.set_debug_mode(true);
        state.set_sandbox_mode(true);
        state.set_program_name("Crawler");
        logger.log(&state, "app", "hello").unwrap();
        assert_eq!(
            writer.drain_lines(),
            [
                DEFAULT_INITIATION_MESSAGE,
                "Crawler runs in debug mode!",
                "Crawler runs in sandbox mode!",
                "hello"
            ]
        );
    }

    #[test]
    fn sandbox_warning_needs_mode_and_flag() {
        let (logger, writer) = logger("%msg%");
        let logger = logger.with_initiation_message(None);
        let state = LogState::new();
        logger.log_with(&state, "app", None, "off", Some(true)).unwrap();
        assert_eq!(writer.drain_lines(), ["off"]);

        state.set_sandbox_mode(true);
        logger.log_with(&state, "app", None, "no flag", Some(false)).unwrap();
        logger.log_with(&state, "app", None, "flag", Some(true)).unwrap();
        assert_eq!(
            writer.drain_lines(),
            [
                "Program runs in sandbox mode!",
                "no flag",
                "flag",
                crate::formatter::SANDBOX_WARNING
            ]
        );
    }

    #[test]
    fn defaults_fill_missing_arguments() {
        let (logger, writer) = logger("%level% %msg%");
        let logger = logger
            .with_initiation_message(None)
            .with_default_level(Level::ERROR)
            .with_default_sandbox_warning(true);
        let state = LogState::new();
        state.set_sandbox_mode(true);
        logger.log(&state, "app", "x").unwrap();
        let warning = format!("WARNING {}", crate::formatter::SANDBOX_WARNING);
        assert_eq!(
            writer.drain_lines(),
            [
                "WARNING Program runs in sandbox mode!",
                "ERROR x",
                warning.as_str()
            ]
        );
    }

    #[test]
    fn class_name_resolution() {
        let (logger, writer) = logger("<%classname%> %msg%");
        let logger = logger.with_initiation_message(None);
        let state = LogState::new();
        state.register_class_name("app::net", "Net");
        logger.log(&state, "app::net", "a").unwrap();
        logger.log(&state, "app::db", "b").unwrap();
        logger.set_include_untranslated_class_name(true);
        logger.log(&state, "app::db", "c").unwrap();
        assert_eq!(writer.drain_lines(), ["<Net> a", "<> b", "<app::db> c"]);
    }

    #[test]
    fn suppressed_debug_still_commits_transitions() {
        let (logger, writer) = logger("%msg%");
        let state = LogState::new();
        logger.log_at(&state, "app", &Level::DEBUG, "hidden").unwrap();
        assert!(logger.has_logged());
        assert_eq!(writer.drain_lines(), [DEFAULT_INITIATION_MESSAGE]);
    }

    /// Refuses its first line, then records the rest.
    #[derive(Debug, Default)]
    struct FailsOnce {
        failed: std::sync::atomic::AtomicBool,
        lines: std::sync::Mutex<Vec<String>>,
    }

    impl LogWriter for FailsOnce {
        fn write(&self, text: &str) -> Result<()> {
            if !self.failed.swap(true, std::sync::atomic::Ordering::SeqCst) {
                return Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full").into());
            }
            self.lines.lock().unwrap().push(text.to_string());
            Ok(())
        }

        fn is_ansi(&self) -> bool {
            false
        }

        fn write_stack_trace(&self, _error: &(dyn Error + 'static), _state: &LogState) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn failed_write_does_not_repeat_announcements() {
        let writer = Arc::new(FailsOnce::default());
        let logger = Logger::new(TemplateFormatter::new("%msg%"), writer.clone());
        let state = LogState::new();
        state.set_debug_mode(true);

        assert!(logger.log(&state, "app", "one").is_err());
        assert!(logger.has_logged());
        logger.log(&state, "app", "two").unwrap();
        assert_eq!(*writer.lines.lock().unwrap(), ["two"]);
    }

    /// Formats and stores its own lines.
    #[derive(Debug, Default)]
    struct Tape {
        lines: std::sync::Mutex<Vec<String>>,
    }

    impl LogFormatter for Tape {
        fn format(&self, record: &LogRecord, _ansi: bool, _state: &LogState) -> Formatted {
            Formatted::Text(format!("tape: {}", record.message()))
        }
    }

    impl LogWriter for Tape {
        fn write(&self, text: &str) -> Result<()> {
            self.lines.lock().unwrap().push(text.to_string());
            Ok(())
        }

        fn is_ansi(&self) -> bool {
            false
        }

        fn write_stack_trace(&self, _error: &(dyn Error + 'static), _state: &LogState) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn one_value_can_format_and_write() {
        let tape = Arc::new(Tape::default());
        let logger = Logger::new(tape.clone(), tape.clone()).with_initiation_message(None);
        let state = LogState::new();
        state.set_sandbox_mode(true);
        logger.log(&state, "app", "x").unwrap();
        assert_eq!(
            *tape.lines.lock().unwrap(),
            ["tape: Program runs in sandbox mode!", "tape: x"]
        );
    }

    #[test]
    fn print_stack_trace_bypasses_bookkeeping() {
        let writer = Arc::new(InMemoryWriter::new());
        writer.stack_trace_gate().set_debug_only(false);
        let logger = Logger::with_writer(writer.clone());
        let error = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        logger.print_stack_trace(&LogState::new(), &error).unwrap();
        assert!(!logger.has_logged());
        assert_eq!(writer.drain_lines(), ["boom"]);
    }
}
