#![allow(non_shorthand_field_patterns)]
#![doc = "Error handling primitives shared across the reference renderer."]
// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! The derive emitted by [`masterror::Error`] expands pattern matches that
//! trigger the `non_shorthand_field_patterns` lint. The lint is disabled for
//! the module to keep the generated implementations warning-free.

use std::path::{Path, PathBuf};

/// Unified error type returned by the document builder, the configuration
/// loader and the CLI.
///
/// Rendering itself never fails; every variant originates from constructing
/// an [`ApiReference`](crate::ApiReference) or from the binary's file
/// handling.
#[derive(Debug, masterror::Error)]
pub enum Error {
    /// Returned when the caller supplied an unusable spec location.
    #[error("invalid input: {message}")]
    InvalidInput {
        /// Human readable message describing the rejected input.
        message: String
    },
    /// Wraps I/O errors that occur while reading a spec or configuration file.
    #[error("failed to read {path:?}: {source}")]
    Io {
        /// Location of the file that could not be read.
        path:   PathBuf,
        /// Underlying I/O error, untouched.
        source: std::io::Error
    },
    /// Wraps JSON serialization errors raised while encoding the widget
    /// configuration.
    #[error("failed to serialize configuration: {source}")]
    Serialize {
        /// Source encoding error from serde_json.
        source: serde_json::Error
    },
    /// Wraps YAML decoding errors raised while loading a configuration file.
    #[error("failed to parse configuration: {source}")]
    Parse {
        /// Source decoding error from serde_yaml.
        source: serde_yaml::Error
    },
    /// Wraps I/O errors that occur while writing the rendered document.
    #[error("failed to write document to {path:?}: {source}")]
    Output {
        /// Destination of the rendered HTML.
        path:   PathBuf,
        /// Underlying I/O error reported by the operating system.
        source: std::io::Error
    }
}

impl Error {
    /// Constructs an invalid input error from the provided message.
    ///
    /// # Parameters
    ///
    /// * `message` - Human-readable description of the rejected input.
    pub fn invalid_input<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::InvalidInput {
            message: message.into()
        }
    }

    /// Formats the error for diagnostics without the variant name.
    ///
    /// Intended for CLI contexts. The returned string matches the
    /// [`std::fmt::Display`] implementation.
    pub fn to_display_string(&self) -> String {
        format!("{self}")
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Self::Serialize {
            source
        }
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(source: serde_yaml::Error) -> Self {
        Self::Parse {
            source
        }
    }
}

/// Creates an [`Error::Io`] variant capturing the failing path and source.
///
/// # Parameters
///
/// * `path` - Location of the file that triggered the error.
/// * `source` - I/O error reported by the operating system.
pub fn io_error(path: &Path, source: std::io::Error) -> Error {
    Error::Io {
        path: path.to_path_buf(),
        source
    }
}

/// Creates an [`Error::Output`] variant capturing the failing path and source.
///
/// # Parameters
///
/// * `path` - Destination of the rendered document.
/// * `source` - I/O error reported by the operating system.
pub fn output_error(path: &Path, source: std::io::Error) -> Error {
    Error::Output {
        path: path.to_path_buf(),
        source
    }
}
