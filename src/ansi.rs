// SPDX-License-Identifier: MIT OR Apache-2.0

//! ANSI escape codes used to colour log output.
//!
//! [`AnsiColor`] is a fixed table of escape sequences.  Its [`Display`](std::fmt::Display)
//! implementation writes the raw escape code, so colours can be spliced into a line with
//! `format!`.  Template formatters refer to colours by [`AnsiColor::name`], e.g.
//! `%ansi:RED%`.
//!
//! Whether the console understands these sequences is a process-wide toggle, off by
//! default: see [`set_console_ansi`].

use std::fmt::Display;
use std::sync::atomic::{AtomicBool, Ordering};

static CONSOLE_ANSI: AtomicBool = AtomicBool::new(false);

/// An ANSI escape sequence for colour or text style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnsiColor {
    /// Emits nothing.
    NoChange,
    Reset,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Purple,
    Cyan,
    White,
    Italic,
    ItalicOff,
}

impl AnsiColor {
    /// Every colour, in declaration order.
    pub const ALL: [AnsiColor; 12] = [
        AnsiColor::NoChange,
        AnsiColor::Reset,
        AnsiColor::Black,
        AnsiColor::Red,
        AnsiColor::Green,
        AnsiColor::Yellow,
        AnsiColor::Blue,
        AnsiColor::Purple,
        AnsiColor::Cyan,
        AnsiColor::White,
        AnsiColor::Italic,
        AnsiColor::ItalicOff,
    ];

    pub const fn escape_code(self) -> &'static str {
        match self {
            AnsiColor::NoChange => "",
            AnsiColor::Reset => "\u{1b}[0m",
            AnsiColor::Black => "\u{1b}[30m",
            AnsiColor::Red => "\u{1b}[31m",
            AnsiColor::Green => "\u{1b}[32m",
            AnsiColor::Yellow => "\u{1b}[33m",
            AnsiColor::Blue => "\u{1b}[34m",
            AnsiColor::Purple => "\u{1b}[35m",
            AnsiColor::Cyan => "\u{1b}[36m",
            AnsiColor::White => "\u{1b}[37m",
            AnsiColor::Italic => "\u{1b}[3m",
            AnsiColor::ItalicOff => "\u{1b}[23m",
        }
    }

    /// The upper-case name used in `%ansi:NAME%` template tokens.
    pub const fn name(self) -> &'static str {
        match self {
            AnsiColor::NoChange => "NOCHANGE",
            AnsiColor::Reset => "RESET",
            AnsiColor::Black => "BLACK",
            AnsiColor::Red => "RED",
            AnsiColor::Green => "GREEN",
            AnsiColor::Yellow => "YELLOW",
            AnsiColor::Blue => "BLUE",
            AnsiColor::Purple => "PURPLE",
            AnsiColor::Cyan => "CYAN",
            AnsiColor::White => "WHITE",
            AnsiColor::Italic => "ITALIC",
            AnsiColor::ItalicOff => "ITALIC_OFF",
        }
    }

    /// Looks a colour up by its [`name`](Self::name).
    pub fn from_name(name: &str) -> Option<AnsiColor> {
        AnsiColor::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Returns `self` when the console accepts ANSI codes, [`AnsiColor::NoChange`] otherwise.
    pub fn if_console_ansi(self) -> AnsiColor {
        if console_ansi() { self } else { AnsiColor::NoChange }
    }
}

impl Display for AnsiColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.escape_code())
    }
}

/// Whether [`ConsoleWriter`](crate::ConsoleWriter) emits ANSI escape codes.
pub fn console_ansi() -> bool {
    CONSOLE_ANSI.load(Ordering::Relaxed)
}

/// Turns ANSI output on stdout on or off for every console writer in the process.
pub fn set_console_ansi(enabled: bool) {
    CONSOLE_ANSI.store(enabled, Ordering::Relaxed);
}
