// SPDX-License-Identifier: MIT OR Apache-2.0

//! A writer that appends to a file.

use crate::error::{LogError, Result};
use crate::state::LogState;
use crate::writer::{LogWriter, StackTraceGate, render_stack_trace};
use std::error::Error;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/**
Appends one line per message to a file, creating it if needed.

The file is opened once, at construction, in append mode.  Missing parent directories
are created on a best-effort basis; if that fails the open reports the real problem.

ANSI output is on by default since log files are usually read with `less -R` or `tail`.

```no_run
use simplelogging::{FileWriter, Logger, TemplateFormatter};
let writer = FileWriter::new("logs/app.log")?;
let logger = Logger::new(TemplateFormatter::default(), writer);
# Ok::<(), simplelogging::LogError>(())
```
*/
#[derive(Debug)]
pub struct FileWriter {
    path: PathBuf,
    ansi: bool,
    file: Mutex<File>,
    gate: StackTraceGate,
}

impl FileWriter {
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        Self::with_ansi(path, true)
    }

    pub fn with_ansi(path: impl AsRef<Path>, ansi: bool) -> Result<Self> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(LogError::InvalidArgument("file path can not be empty"));
        }
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            // best effort; open() reports anything that matters
            let _ = std::fs::create_dir_all(parent);
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            ansi,
            file: Mutex::new(file),
            gate: StackTraceGate::default(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn stack_trace_gate(&self) -> &StackTraceGate {
        &self.gate
    }

    fn append(&self, text: &str) -> Result<()> {
        let mut file = self.file.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        writeln!(file, "{text}")?;
        Ok(())
    }
}

impl LogWriter for FileWriter {
    fn write(&self, text: &str) -> Result<()> {
        self.append(text)
    }

    fn is_ansi(&self) -> bool {
        self.ansi
    }

    fn write_stack_trace(&self, error: &(dyn Error + 'static), state: &LogState) -> Result<()> {
        if !self.gate.permits(state) {
            return Ok(());
        }
        self.append(&render_stack_trace(error))
    }
}
