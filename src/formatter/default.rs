// SPDX-License-Identifier: MIT OR Apache-2.0
use super::{Clock, DATE_TIME_FORMAT, Formatted, LogFormatter, local_now, suppressed_by_debug_mode};
use crate::ansi::AnsiColor;
use crate::log_record::LogRecord;
use crate::state::LogState;

/**
The formatter a [`Logger`](crate::Logger) uses unless given another one.

Plain output looks like

```text
[24.12.2025|18:30:00 - INFO] > Storage: disk almost full
```

The `Storage: ` segment is left out when the record has no class name.  With ANSI
enabled the brackets are white, the level name and message take the level's colour,
and the class name is italic.
*/
#[derive(Debug, Clone)]
pub struct DefaultFormatter {
    clock: Clock,
}

impl DefaultFormatter {
    pub fn new() -> Self {
        Self { clock: local_now }
    }

    /// Uses `clock` instead of the local time.
    pub fn with_clock(clock: Clock) -> Self {
        Self { clock }
    }
}

impl Default for DefaultFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl LogFormatter for DefaultFormatter {
    fn format(&self, record: &LogRecord, ansi: bool, state: &LogState) -> Formatted {
        if suppressed_by_debug_mode(record, state) {
            return Formatted::Suppressed;
        }
        let timestamp = (self.clock)().format(DATE_TIME_FORMAT);
        let level = record.level();
        let text = if ansi {
            let class_name = record
                .class_name()
                .map(|name| format!("{}{}{}: ", AnsiColor::Italic, name, AnsiColor::ItalicOff))
                .unwrap_or_default();
            format!(
                "{white}[{timestamp} - {level_name}{white}] > {color}{class_name}{message}{white}",
                white = AnsiColor::White,
                level_name = level.colored_name(),
                color = level.color(),
                message = record.message(),
            )
        } else {
            let class_name = record
                .class_name()
                .map(|name| format!("{name}: "))
                .unwrap_or_default();
            format!(
                "[{timestamp} - {level}] > {class_name}{message}",
                message = record.message(),
            )
        };
        Formatted::Text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Level;
    use chrono::{NaiveDate, NaiveDateTime};

    fn fixed() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 7)
            .and_then(|d| d.and_hms_opt(9, 5, 1))
            .unwrap()
    }

    #[test]
    fn plain_line_with_class_name() {
        let formatter = DefaultFormatter::with_clock(fixed);
        let record = LogRecord::new("hello", Level::INFO, Some("Foo".to_string()));
        let out = formatter.format(&record, false, &LogState::new());
        assert_eq!(out.text(), Some("[07.03.2024|09:05:01 - INFO] > Foo: hello"));
    }

    #[test]
    fn plain_line_without_class_name() {
        let formatter = DefaultFormatter::with_clock(fixed);
        let record = LogRecord::new("hello", Level::ERROR, None);
        let out = formatter.format(&record, false, &LogState::new());
        assert_eq!(out.text(), Some("[07.03.2024|09:05:01 - ERROR] > hello"));
    }

    #[test]
    fn ansi_line() {
        let formatter = DefaultFormatter::with_clock(fixed);
        let record = LogRecord::new("careful", Level::WARNING, Some("Foo".to_string()));
        let out = formatter.format(&record, true, &LogState::new());
        assert_eq!(
            out.text(),
            Some(
                "\u{1b}[37m[07.03.2024|09:05:01 - \u{1b}[33mWARNING\u{1b}[37m] > \u{1b}[33m\u{1b}[3mFoo\u{1b}[23m: careful\u{1b}[37m"
            )
        );
    }

    #[test]
    fn debug_records_need_debug_mode() {
        let formatter = DefaultFormatter::new();
        let state = LogState::new();
        let record = LogRecord::new("details", Level::DEBUG, None);
        assert!(formatter.format(&record, false, &state).is_suppressed());
        assert!(formatter.format(&record, true, &state).is_suppressed());
        state.set_debug_mode(true);
        let out = formatter.format(&record, false, &state);
        assert!(out.text().unwrap().contains("details"));
    }

    #[test]
    fn announcements_name_the_program() {
        let formatter = DefaultFormatter::with_clock(fixed);
        let state = LogState::new();
        state.set_program_name("Crawler");
        assert_eq!(
            formatter.debug_announcement(false, true, &state).text(),
            Some("[07.03.2024|09:05:01 - WARNING] > Logger: Crawler runs in debug mode!")
        );
        assert_eq!(
            formatter.sandbox_announcement(false, false, &state).text(),
            Some("[07.03.2024|09:05:01 - WARNING] > Logger: Crawler no longer runs in sandbox mode!")
        );
        assert!(
            formatter
                .sandbox_warning(false, &state)
                .text()
                .unwrap()
                .ends_with("because we are in sandbox mode.")
        );
    }

    #[test]
    fn same_record_formats_identically() {
        let formatter = DefaultFormatter::with_clock(fixed);
        let state = LogState::new();
        let record = LogRecord::new("again", Level::FATAL, Some("Foo".to_string()));
        assert_eq!(
            formatter.format(&record, true, &state),
            formatter.format(&record, true, &state)
        );
    }
}
