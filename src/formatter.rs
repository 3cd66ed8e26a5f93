// SPDX-License-Identifier: MIT OR Apache-2.0

/*!
Turning log records into text.

A [`LogFormatter`] renders a [`LogRecord`] into a [`Formatted`] value, which is either
the text to write or [`Formatted::Suppressed`].  Suppression is how a formatter says
"write nothing for this record"; it is not an error.

Two formatters are provided:

* [`DefaultFormatter`] renders `[<date>|<time> - <LEVEL>] > <classname>: <message>`.
* [`TemplateFormatter`] substitutes `%token%` placeholders in a user template.

Both suppress [`Level::DEBUG`] records while debug mode is off, and both inherit the
sandbox warning and mode announcements from the provided trait methods, which format a
synthetic WARNING record attributed to `"Logger"`.
*/

mod default;
mod template;

pub use default::DefaultFormatter;
pub use template::{DEFAULT_TEMPLATE, TemplateFormatter};

use crate::Level;
use crate::log_record::LogRecord;
use crate::state::LogState;
use chrono::NaiveDateTime;
use std::fmt::Debug;
use std::sync::Arc;

/// Class name attached to the lines a logger emits about itself.
pub const LOGGER_CLASS_NAME: &str = "Logger";

/// Line written after a message when sandbox mode kept its action from happening.
pub const SANDBOX_WARNING: &str =
    "The last logged action didn't go through, because we are in sandbox mode.";

pub(crate) const DATE_FORMAT: &str = "%d.%m.%Y";
pub(crate) const TIME_FORMAT: &str = "%H:%M:%S";
pub(crate) const DATE_TIME_FORMAT: &str = "%d.%m.%Y|%H:%M:%S";

/// Source of the timestamp printed in each line.
pub type Clock = fn() -> NaiveDateTime;

/// The local wall-clock time.  This is the clock formatters use unless told otherwise.
pub fn local_now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

/// The outcome of formatting a record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Formatted {
    /// Nothing should be written.
    Suppressed,
    Text(String),
}

impl Formatted {
    pub fn text(&self) -> Option<&str> {
        match self {
            Formatted::Suppressed => None,
            Formatted::Text(text) => Some(text),
        }
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            Formatted::Suppressed => None,
            Formatted::Text(text) => Some(text),
        }
    }

    pub fn is_suppressed(&self) -> bool {
        matches!(self, Formatted::Suppressed)
    }
}

impl From<String> for Formatted {
    fn from(text: String) -> Self {
        Formatted::Text(text)
    }
}

impl From<Option<String>> for Formatted {
    fn from(text: Option<String>) -> Self {
        text.map_or(Formatted::Suppressed, Formatted::Text)
    }
}

/**
Renders records for a [`LogWriter`](crate::LogWriter).

`ansi` tells the formatter whether the writer that will receive the text understands
ANSI escape codes.

Only [`format`](Self::format) is required.  The remaining methods build a synthetic
WARNING record and pass it through `format`, so a custom formatter changes the look of
announcements simply by changing `format`.
*/
pub trait LogFormatter: Debug + Send + Sync {
    fn format(&self, record: &LogRecord, ansi: bool, state: &LogState) -> Formatted;

    /// Line written after a message whose action was skipped because of sandbox mode.
    fn sandbox_warning(&self, ansi: bool, state: &LogState) -> Formatted {
        self.format(&logger_record(SANDBOX_WARNING.to_string()), ansi, state)
    }

    /// Announces that sandbox mode was switched on or off.
    fn sandbox_announcement(&self, ansi: bool, enabled: bool, state: &LogState) -> Formatted {
        let message = mode_announcement(&state.program_name(), "sandbox", enabled);
        self.format(&logger_record(message), ansi, state)
    }

    /// Announces that debug mode was switched on or off.
    fn debug_announcement(&self, ansi: bool, enabled: bool, state: &LogState) -> Formatted {
        let message = mode_announcement(&state.program_name(), "debug", enabled);
        self.format(&logger_record(message), ansi, state)
    }
}

/// Lets one shared value be both the formatter and the writer of a [`Logger`](crate::Logger).
impl<F: LogFormatter + ?Sized> LogFormatter for Arc<F> {
    fn format(&self, record: &LogRecord, ansi: bool, state: &LogState) -> Formatted {
        (**self).format(record, ansi, state)
    }

    fn sandbox_warning(&self, ansi: bool, state: &LogState) -> Formatted {
        (**self).sandbox_warning(ansi, state)
    }

    fn sandbox_announcement(&self, ansi: bool, enabled: bool, state: &LogState) -> Formatted {
        (**self).sandbox_announcement(ansi, enabled, state)
    }

    fn debug_announcement(&self, ansi: bool, enabled: bool, state: &LogState) -> Formatted {
        (**self).debug_announcement(ansi, enabled, state)
    }
}

/// Whether the built-in DEBUG suppression applies to `record`.
pub fn suppressed_by_debug_mode(record: &LogRecord, state: &LogState) -> bool {
    record.level().is_debug() && !state.debug_mode()
}

fn logger_record(message: String) -> LogRecord {
    LogRecord::new(message, Level::WARNING, Some(LOGGER_CLASS_NAME.to_string()))
}

fn mode_announcement(program_name: &str, mode: &str, enabled: bool) -> String {
    if enabled {
        format!("{program_name} runs in {mode} mode!")
    } else {
        format!("{program_name} no longer runs in {mode} mode!")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn announcement_wording() {
        assert_eq!(mode_announcement("Crawler", "debug", true), "Crawler runs in debug mode!");
        assert_eq!(
            mode_announcement("Crawler", "sandbox", false),
            "Crawler no longer runs in sandbox mode!"
        );
    }

    #[test]
    fn formatted_from_option() {
        assert!(Formatted::from(None).is_suppressed());
        assert_eq!(Formatted::from(Some("x".to_string())).text(), Some("x"));
    }

    #[test]
    fn debug_suppression_follows_state() {
        let state = LogState::new();
        let record = LogRecord::new("m", Level::DEBUG, None);
        assert!(suppressed_by_debug_mode(&record, &state));
        state.set_debug_mode(true);
        assert!(!suppressed_by_debug_mode(&record, &state));
        let info = LogRecord::new("m", Level::INFO, None);
        state.set_debug_mode(false);
        assert!(!suppressed_by_debug_mode(&info, &state));
    }
}
