//! Standalone HTML pages for the Scalar API reference widget.
//!
//! The library resolves an OpenAPI document location, serializes the widget
//! options described by [`Config`] and renders a self-contained page that
//! loads the widget from a CDN. Remote specs are referenced by URL while
//! local files are embedded into the page body.
//!
//! ```
//! use scalar_reference::{ApiReference, Config, DEFAULT_TITLE};
//!
//! let reference = ApiReference::new("https://example.com/openapi.json", &Config::default(),)
//!     .expect("remote spec",);
//! assert!(reference.render_html().contains(DEFAULT_TITLE));
//! ```

mod config;
mod error;
mod reference;
mod source;
mod template;

pub use config::{
    Config, ForceDarkModeState, HttpClient, HttpClientState, Layout, PathRouting, Server, Theme,
    load_config, parse_config,
};
pub use error::{Error, io_error, output_error};
pub use reference::{ApiReference, DEFAULT_CDN, DEFAULT_TITLE, render_html};
pub use source::{SpecDescriptor, SpecSource};
pub use template::escape_quotes;
