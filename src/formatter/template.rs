// SPDX-License-Identifier: MIT OR Apache-2.0
use super::{
    Clock, DATE_FORMAT, Formatted, LogFormatter, TIME_FORMAT, local_now, suppressed_by_debug_mode,
};
use crate::ansi::AnsiColor;
use crate::error::{LogError, Result};
use crate::log_record::LogRecord;
use crate::state::LogState;

/// Template that reproduces the [`DefaultFormatter`](super::DefaultFormatter) layout.
pub const DEFAULT_TEMPLATE: &str = "%ansi:WHITE%[%date%|%time% - %levelcolor%%level%%ansi:WHITE%] > %levelcolor%%ansi:ITALIC%%classname%%ansi:ITALIC_OFF%: %msg%%ansi:WHITE%";

/**
A formatter driven by a template string.

Placeholders are replaced one kind at a time, in this order:

| Token          | Replacement                                               |
|----------------|-----------------------------------------------------------|
| `%date%`       | `dd.mm.yyyy`                                              |
| `%time%`       | `HH:MM:SS`, 24-hour clock                                 |
| `%classname%`  | the resolved class name, or nothing                       |
| `%level%`      | the level name                                            |
| `%levelcolor%` | the level's escape code, or nothing without ANSI          |
| `%msg%`        | the message                                               |
| `%ansi:NAME%`  | the escape code of [`AnsiColor`] `NAME`, or nothing without ANSI |

Unknown tokens are left in place.

Replacement is literal and works on the text produced so far.  A class name or
message that itself contains a later token, such as a message reading `%ansi:RED%`,
will have that token substituted too.

```
use simplelogging::{Level, LogFormatter, LogRecord, LogState, TemplateFormatter};
let formatter = TemplateFormatter::new("%level%:%msg%");
let record = LogRecord::new("hello", Level::INFO, None);
let out = formatter.format(&record, false, &LogState::new());
assert_eq!(out.text(), Some("INFO:hello"));
```

DEBUG records are suppressed while debug mode is off, as with the default formatter.
*/
#[derive(Debug, Clone)]
pub struct TemplateFormatter {
    template: String,
    clock: Clock,
}

impl TemplateFormatter {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            clock: local_now,
        }
    }

    /// Builds a formatter from a template that may be missing.
    pub fn from_template(template: Option<String>) -> Result<Self> {
        template
            .map(Self::new)
            .ok_or(LogError::InvalidArgument("format template can not be missing"))
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn template(&self) -> &str {
        &self.template
    }
}

impl Default for TemplateFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE)
    }
}

impl LogFormatter for TemplateFormatter {
    fn format(&self, record: &LogRecord, ansi: bool, state: &LogState) -> Formatted {
        if suppressed_by_debug_mode(record, state) {
            return Formatted::Suppressed;
        }
        let now = (self.clock)();
        let level = record.level();

        let mut result = self
            .template
            .replace("%date%", &now.format(DATE_FORMAT).to_string());
        result = result.replace("%time%", &now.format(TIME_FORMAT).to_string());
        result = result.replace("%classname%", record.class_name().unwrap_or(""));
        result = result.replace("%level%", level.name());
        let level_color = if ansi { level.color().escape_code() } else { "" };
        result = result.replace("%levelcolor%", level_color);
        result = result.replace("%msg%", record.message());
        for color in AnsiColor::ALL {
            let token = format!("%ansi:{}%", color.name());
            let code = if ansi { color.escape_code() } else { "" };
            result = result.replace(&token, code);
        }
        Formatted::Text(result)
    }
}
