//SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# simplelogging

simplelogging is a small, synchronous logging library.

# The pieces

* A [`Level`] is a named, coloured severity tag.  FATAL, ERROR, WARNING, INFO and DEBUG
  are predefined; any other combination is fine too.
* A [`LogFormatter`] turns a [`LogRecord`] into a line of text, or suppresses it.
  [`DefaultFormatter`] and the template-driven [`TemplateFormatter`] are provided.
* A [`LogWriter`] puts lines somewhere: [`ConsoleWriter`], [`FileWriter`], or
  [`InMemoryWriter`] for tests.
* A [`Logger`] pairs one formatter with one writer and announces mode changes.
* The [`Log`] façade broadcasts each call to its loggers, in order, and holds the
  shared [`LogState`].

Every call is formatted and written on the calling thread before it returns.
Nothing is buffered.

# Modes

*Debug mode* unlocks DEBUG lines and, by default, error reports.  *Sandbox mode*
means actions are only simulated; a caller can ask for a warning line after its
message to say so.  When either mode changes, each logger announces the change
once, on its next call:

```text
------------------------------- New Logger Initiation! Program (re-)start? -------------------------------
[24.12.2025|18:30:00 - WARNING] > Logger: Crawler runs in sandbox mode!
[24.12.2025|18:30:00 - INFO] > Fetcher: would delete 3 files
[24.12.2025|18:30:00 - WARNING] > Logger: The last logged action didn't go through, because we are in sandbox mode.
```

# Class names

Log calls carry the path of the calling code, which the macros fill in with
`module_path!()`.  A path can be given a display name with [`register_class_name!`]
or [`Log::register_class_name`].  Callers without a display name are shown without a
class name unless the logger opts into showing raw paths.

# The API

```rust
use simplelogging::global_logger::global;

global().set_program_name("Crawler");
global().set_sandbox_mode(true);
simplelogging::register_class_name!("Fetcher");
simplelogging::info!(sandbox_warning = true, "would delete {} files", 3)?;
# Ok::<(), simplelogging::LogError>(())
```

Libraries that already use the [`log`](https://docs.rs/log) crate can be routed
through here with [`LogBridge`].

# Multithreading

The façade, its loggers and their transition flags are all safe to share between
threads.  Each logger decides which announcements it owes under a lock, so a mode
change is announced exactly once per logger, but lines from different threads may
interleave.
*/

mod ansi;
mod bridge;
mod console_writer;
mod error;
mod facade;
mod file_writer;
mod formatter;
pub mod global_logger;
mod inmemory_writer;
mod level;
mod log_record;
mod logger;
mod macros;
mod settings;
mod spinlock;
mod state;
mod writer;

pub use ansi::{AnsiColor, console_ansi, set_console_ansi};
pub use bridge::{LogBridge, from_log_level};
pub use console_writer::ConsoleWriter;
pub use error::{LogError, Result};
pub use facade::Log;
pub use file_writer::FileWriter;
pub use formatter::{
    Clock, DEFAULT_TEMPLATE, DefaultFormatter, Formatted, LOGGER_CLASS_NAME, LogFormatter,
    SANDBOX_WARNING, TemplateFormatter, local_now, suppressed_by_debug_mode,
};
pub use global_logger::{add_global_logger, global_loggers, set_global_loggers};
pub use inmemory_writer::InMemoryWriter;
pub use level::Level;
pub use log_record::LogRecord;
pub use logger::{DEFAULT_INITIATION_MESSAGE, Logger};
pub use settings::LogSettings;
pub use state::{DEFAULT_PROGRAM_NAME, LogState};
pub use writer::{LogWriter, StackTraceGate, render_stack_trace};
