// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::error::Result;
use crate::state::LogState;
use crate::writer::{LogWriter, StackTraceGate, render_stack_trace};
use std::error::Error;

/**
A writer that prints to stdout, one line per message.

ANSI support is not a property of the writer but a process-wide toggle, see
[`set_console_ansi`](crate::set_console_ansi).  Error reports go to stdout as well and
are dropped outside debug mode unless the gate is opened.

On `wasm32` output goes to the browser console.
*/
#[derive(Debug, Default)]
pub struct ConsoleWriter {
    gate: StackTraceGate,
}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// - Debug/Default: derived; the default gate only prints errors in debug mode
// - Clone: NOT implemented - the gate is runtime-configurable per writer
// - PartialEq/Eq/Hash: NOT implemented - no meaningful identity for a console
// - Send/Sync: automatic, the gate is an atomic

impl ConsoleWriter {
    pub const fn new() -> Self {
        Self {
            gate: StackTraceGate::new(true),
        }
    }

    /// `debug_only_stack_traces = false` prints error reports regardless of debug mode.
    pub const fn with_stack_trace_gate(debug_only_stack_traces: bool) -> Self {
        Self {
            gate: StackTraceGate::new(debug_only_stack_traces),
        }
    }

    pub fn stack_trace_gate(&self) -> &StackTraceGate {
        &self.gate
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn emit(&self, text: &str) -> Result<()> {
        use std::io::Write;
        let mut lock = std::io::stdout().lock();
        writeln!(lock, "{text}")?;
        lock.flush()?;
        Ok(())
    }

    #[cfg(target_arch = "wasm32")]
    fn emit(&self, text: &str) -> Result<()> {
        web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(text));
        Ok(())
    }
}

impl LogWriter for ConsoleWriter {
    fn write(&self, text: &str) -> Result<()> {
        self.emit(text)
    }

    fn is_ansi(&self) -> bool {
        crate::ansi::console_ansi()
    }

    fn write_stack_trace(&self, error: &(dyn Error + 'static), state: &LogState) -> Result<()> {
        if !self.gate.permits(state) {
            return Ok(());
        }
        self.emit(&render_stack_trace(error))
    }
}
