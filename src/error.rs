// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error type for fallible logging operations.

use thiserror::Error;

/// Errors raised while constructing sinks or writing log output.
#[derive(Error, Debug)]
pub enum LogError {
    /// A constructor was given an argument it cannot work with.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The sink failed to write.
    #[error("log sink I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = LogError> = std::result::Result<T, E>;
