// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Resolution of the OpenAPI document shown by the reference page.
//!
//! A location starting with `http` is handed to the widget as a URL and never
//! fetched. Anything else names a local file whose contents are embedded into
//! the page verbatim.

use std::{fs, path::Path};

use serde::Serialize;
use tracing::debug;

use crate::error::{self, Error};

/// Prefix that marks a spec location as remote.
const REMOTE_PREFIX: &str = "http";

/// Where the widget obtains the spec from.
#[derive(Debug, Clone, PartialEq, Eq,)]
pub enum SpecSource
{
    /// Spec fetched by the widget at runtime.
    Remote
    {
        /// Location exactly as supplied by the caller.
        url: String,
    },
    /// Spec embedded into the page body.
    Inline
    {
        /// File contents decoded as text.
        content: String,
    },
}

/// `spec` object merged into the serialized widget configuration.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq,)]
pub struct SpecDescriptor<'source,>
{
    /// URL the widget downloads the spec from.
    pub url: &'source str,
}

impl SpecSource
{
    /// Resolves a spec location into a source.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] when `location` is empty and
    /// [`Error::Io`] carrying the untouched I/O error when a local file cannot
    /// be read.
    ///
    /// # Examples
    ///
    /// ```
    /// use scalar_reference::SpecSource;
    ///
    /// let source = SpecSource::resolve("https://example.com/openapi.json",).expect("remote spec",);
    /// assert_eq!(source.inline_content(), "");
    /// ```
    pub fn resolve(location: &str,) -> Result<Self, Error,>
    {
        if location.is_empty() {
            return Err(Error::invalid_input("spec URL or content is required",),);
        }

        if location.starts_with(REMOTE_PREFIX,) {
            debug!("Using remote spec at {}", location);
            return Ok(Self::Remote {
                url: location.to_owned(),
            },);
        }

        let path = Path::new(location,);
        let bytes = fs::read(path,).map_err(|source| error::io_error(path, source,),)?;
        debug!("Embedding {} bytes of spec content from {}", bytes.len(), path.display());

        Ok(Self::Inline {
            content: String::from_utf8_lossy(&bytes,).into_owned(),
        },)
    }

    /// Returns the `spec` object for the widget configuration, present only
    /// for remote sources.
    pub fn descriptor(&self,) -> Option<SpecDescriptor<'_,>,>
    {
        match self {
            Self::Remote {
                url,
            } => Some(SpecDescriptor {
                url: url.as_str(),
            },),
            Self::Inline {
                ..
            } => None,
        }
    }

    /// Returns the text embedded into the page body, empty for remote sources.
    pub fn inline_content(&self,) -> &str
    {
        match self {
            Self::Remote {
                ..
            } => "",
            Self::Inline {
                content,
            } => content.as_str(),
        }
    }
}
