// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::ansi::AnsiColor;
use std::borrow::Cow;
use std::fmt::Display;

/**
A named severity tag with a display colour.

Lower priorities are more severe by convention.  Nothing in this crate orders levels;
they are only compared for equality, and [`Level::DEBUG`] is recognised by name.

Any combination of name, priority and colour is a valid level:

```
use simplelogging::{AnsiColor, Level};
const AUDIT: Level = Level::new_const("AUDIT", 350, AnsiColor::Cyan);
assert_eq!(AUDIT.colored_name(), "\u{1b}[36mAUDIT");
```
*/
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Level {
    name: Cow<'static, str>,
    priority: i32,
    color: AnsiColor,
}

impl Level {
    pub const FATAL: Level = Level::new_const("FATAL", 100, AnsiColor::Red);
    pub const ERROR: Level = Level::new_const("ERROR", 200, AnsiColor::Purple);
    pub const WARNING: Level = Level::new_const("WARNING", 300, AnsiColor::Yellow);
    pub const INFO: Level = Level::new_const("INFO", 400, AnsiColor::White);
    /// Suppressed by the built-in formatters unless debug mode is on.
    pub const DEBUG: Level = Level::new_const("DEBUG", 500, AnsiColor::Green);

    /// A level displayed in white.
    pub fn new(name: impl Into<Cow<'static, str>>, priority: i32) -> Self {
        Self {
            name: name.into(),
            priority,
            color: AnsiColor::White,
        }
    }

    pub const fn new_const(name: &'static str, priority: i32, color: AnsiColor) -> Self {
        Self {
            name: Cow::Borrowed(name),
            priority,
            color,
        }
    }

    pub fn with_color(mut self, color: AnsiColor) -> Self {
        self.color = color;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn color(&self) -> AnsiColor {
        self.color
    }

    /// The name prefixed with the colour's escape code.
    pub fn colored_name(&self) -> String {
        format!("{}{}", self.color, self.name)
    }

    pub(crate) fn is_debug(&self) -> bool {
        self.name == Level::DEBUG.name
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::INFO
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/*
Boilerplate notes.

Clone but not Copy: custom levels may own their name.
PartialOrd/Ord are not derived; priority is informational and two levels with the
same priority are still distinct.
Default is INFO, matching the default level of a fresh Logger.
*/
