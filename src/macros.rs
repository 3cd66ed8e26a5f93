// SPDX-License-Identifier: MIT OR Apache-2.0

//! Logging macros.
//!
//! The macros log through the [global façade](crate::global_logger::global) and pass
//! `module_path!()` as the caller, so a translation registered with
//! [`register_class_name!`] from a module names every line logged from that module.
//!
//! All of them take `format!`-style arguments and return
//! [`Result<()>`](crate::Result): the first logger that fails to write stops the
//! broadcast and its error is returned.
//!
//! | Macro        | Level                      |
//! |--------------|----------------------------|
//! | [`log!`]     | each logger's default      |
//! | [`log_at!`]  | any [`Level`](crate::Level)|
//! | [`fatal!`]   | FATAL                      |
//! | [`error!`]   | ERROR                      |
//! | [`warning!`] | WARNING                    |
//! | [`info!`]    | INFO                       |
//! | [`debug!`]   | DEBUG                      |
//!
//! Each accepts a leading `sandbox_warning = <bool>,` to override the loggers'
//! default sandbox-warning flag for that call.
//!
//! ```
//! simplelogging::register_class_name!("Checkout");
//! simplelogging::info!("charged {} cents", 1250)?;
//! simplelogging::warning!(sandbox_warning = true, "refund of {} cents skipped", 300)?;
//! # Ok::<(), simplelogging::LogError>(())
//! ```

/// Logs at each logger's default level.
#[macro_export]
macro_rules! log {
    (sandbox_warning = $flag:expr, $($arg:tt)+) => {
        $crate::global_logger::global().log_with(
            ::std::module_path!(),
            ::std::option::Option::None,
            &::std::format!($($arg)+),
            ::std::option::Option::Some($flag),
        )
    };
    ($($arg:tt)+) => {
        $crate::global_logger::global().log(::std::module_path!(), &::std::format!($($arg)+))
    };
}

/// Logs at an explicit level: `log_at!(Level::WARNING, "...")`.
#[macro_export]
macro_rules! log_at {
    ($level:expr, sandbox_warning = $flag:expr, $($arg:tt)+) => {
        $crate::global_logger::global().log_with(
            ::std::module_path!(),
            ::std::option::Option::Some(&$level),
            &::std::format!($($arg)+),
            ::std::option::Option::Some($flag),
        )
    };
    ($level:expr, $($arg:tt)+) => {
        $crate::global_logger::global().log_at(
            ::std::module_path!(),
            &$level,
            &::std::format!($($arg)+),
        )
    };
}

#[macro_export]
macro_rules! fatal {
    ($($arg:tt)+) => { $crate::log_at!($crate::Level::FATAL, $($arg)+) };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => { $crate::log_at!($crate::Level::ERROR, $($arg)+) };
}

#[macro_export]
macro_rules! warning {
    ($($arg:tt)+) => { $crate::log_at!($crate::Level::WARNING, $($arg)+) };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => { $crate::log_at!($crate::Level::INFO, $($arg)+) };
}

/// Only printed by the built-in formatters while debug mode is on.
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => { $crate::log_at!($crate::Level::DEBUG, $($arg)+) };
}

/// Shows lines logged from the current module under `name`.
#[macro_export]
macro_rules! register_class_name {
    ($name:expr) => {
        $crate::global_logger::global().register_class_name(::std::module_path!(), $name)
    };
}

/// Forgets the current module's display name, returning it.
#[macro_export]
macro_rules! remove_class_name {
    () => {
        $crate::global_logger::global().remove_class_name(::std::module_path!())
    };
}

/// The display name registered for the current module, if any.
#[macro_export]
macro_rules! class_name {
    () => {
        $crate::global_logger::global().class_name(::std::module_path!())
    };
}
