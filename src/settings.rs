// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mode settings that can be applied to a [`LogState`] in one step.
//!
//! Settings are programmatic: build a [`LogSettings`] and hand it to
//! [`Log::apply_settings`](crate::Log::apply_settings).  [`LogSettings::from_env`]
//! reads the same values from the process environment; the global façade does this
//! once when it is first created.  Nothing is ever written back.
//!
//! | Variable                      | Effect                                   |
//! |-------------------------------|------------------------------------------|
//! | `SIMPLELOGGING_DEBUG`         | debug mode                               |
//! | `SIMPLELOGGING_SANDBOX`       | sandbox mode                             |
//! | `SIMPLELOGGING_PROGRAM_NAME`  | program name used in announcements       |
//! | `SIMPLELOGGING_ANSI`          | ANSI output of console writers           |
//!
//! Flags accept `1`, `true`, `yes` and `on` as true and `0`, `false`, `no` and `off`
//! as false, ignoring case.  Any other value leaves the setting untouched.

use crate::state::LogState;

pub const DEBUG_VAR: &str = "SIMPLELOGGING_DEBUG";
pub const SANDBOX_VAR: &str = "SIMPLELOGGING_SANDBOX";
pub const PROGRAM_NAME_VAR: &str = "SIMPLELOGGING_PROGRAM_NAME";
pub const ANSI_VAR: &str = "SIMPLELOGGING_ANSI";

/// A partial set of mode settings.  `None` fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogSettings {
    pub debug_mode: Option<bool>,
    pub sandbox_mode: Option<bool>,
    pub program_name: Option<String>,
    pub console_ansi: Option<bool>,
}

impl LogSettings {
    /// Settings that overwrite all three modes of a [`LogState`].
    pub fn new(sandbox_mode: bool, debug_mode: bool, program_name: impl Into<String>) -> Self {
        Self {
            debug_mode: Some(debug_mode),
            sandbox_mode: Some(sandbox_mode),
            program_name: Some(program_name.into()),
            console_ansi: None,
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            debug_mode: lookup(DEBUG_VAR).as_deref().and_then(parse_flag),
            sandbox_mode: lookup(SANDBOX_VAR).as_deref().and_then(parse_flag),
            program_name: lookup(PROGRAM_NAME_VAR).filter(|name| !name.is_empty()),
            console_ansi: lookup(ANSI_VAR).as_deref().and_then(parse_flag),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub(crate) fn apply_to(&self, state: &LogState) {
        if let Some(debug_mode) = self.debug_mode {
            state.set_debug_mode(debug_mode);
        }
        if let Some(sandbox_mode) = self.sandbox_mode {
            state.set_sandbox_mode(sandbox_mode);
        }
        if let Some(program_name) = &self.program_name {
            state.set_program_name(program_name.clone());
        }
        if let Some(ansi) = self.console_ansi {
            crate::ansi::set_console_ansi(ansi);
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn parses_flags() {
        let settings = LogSettings::from_lookup(lookup(&[
            (DEBUG_VAR, "Yes"),
            (SANDBOX_VAR, "off"),
            (PROGRAM_NAME_VAR, "Crawler"),
        ]));
        assert_eq!(settings.debug_mode, Some(true));
        assert_eq!(settings.sandbox_mode, Some(false));
        assert_eq!(settings.program_name.as_deref(), Some("Crawler"));
        assert_eq!(settings.console_ansi, None);
    }

    #[test]
    fn unknown_values_are_ignored() {
        let settings =
            LogSettings::from_lookup(lookup(&[(DEBUG_VAR, "maybe"), (PROGRAM_NAME_VAR, "")]));
        assert!(settings.is_empty());
    }

    #[test]
    fn apply_leaves_unset_fields_alone() {
        let state = LogState::new();
        state.set_program_name("Kept");
        LogSettings {
            debug_mode: Some(true),
            ..LogSettings::default()
        }
        .apply_to(&state);
        assert!(state.debug_mode());
        assert!(!state.sandbox_mode());
        assert_eq!(state.program_name(), "Kept");
    }
}
