/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Processor error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A bibliography source could not be parsed; holds the format name and
    /// the parser's message.
    #[error("failed to parse {0} bibliography: {1}")]
    ParseError(String, String),

    #[error("unsupported bibliography format \"{0}\"")]
    UnsupportedFormat(String),

    #[error("entry \"{key}\" is missing required field \"{field}\"")]
    MissingField { key: String, field: &'static str },
}
