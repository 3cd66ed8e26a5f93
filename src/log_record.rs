// SPDX-License-Identifier: MIT OR Apache-2.0

//! Log record type.
//!
//! A [`LogRecord`] is built fresh for every log call by [`Logger`](crate::Logger),
//! handed to a [`LogFormatter`](crate::LogFormatter), and dropped once the
//! formatted text has been written.
//!
//! # Example
//!
//! ```rust
//! use simplelogging::{Level, LogRecord};
//!
//! let record = LogRecord::new("disk almost full", Level::WARNING, Some("Storage".to_string()));
//! assert_eq!(record.class_name(), Some("Storage"));
//! ```

use crate::Level;
use std::fmt::Display;

/**
A single message on its way to a formatter.

The class name is the display name resolved for the calling code.  When it is
`None` the formatters leave the class-name segment out entirely.
*/
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LogRecord {
    message: String,
    level: Level,
    class_name: Option<String>,
}

impl LogRecord {
    pub fn new(message: impl Into<String>, level: Level, class_name: Option<String>) -> Self {
        Self {
            message: message.into(),
            level,
            class_name,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }
}

impl Display for LogRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.class_name {
            Some(class_name) => write!(f, "{}: {}", class_name, self.message),
            None => f.write_str(&self.message),
        }
    }
}
/*
Boilerplate notes for LogRecord:

IMPLEMENTED:
- Debug, Clone, PartialEq/Eq, Hash: derived
- Display: class name and message, no timestamp or colour

NOT IMPLEMENTED:
- Copy: owns strings
- Default: a record without a message is not meaningful
- Ord/PartialOrd: no meaningful ordering for log records
*/
