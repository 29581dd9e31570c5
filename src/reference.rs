// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Builder for standalone API reference pages.
//!
//! [`ApiReference::new`] performs all the work that can fail: it resolves the
//! spec source, picks the page defaults and serializes the widget
//! configuration. Rendering afterwards is plain string interpolation.

use serde::Serialize;
use tracing::{debug, info};

use crate::{
    config::Config,
    error::Error,
    source::{SpecDescriptor, SpecSource},
    template,
};

/// Page title used when the configuration does not provide one.
pub const DEFAULT_TITLE: &str = "Scalar API Reference";
/// Widget bundle loaded when the configuration does not provide a CDN URL.
pub const DEFAULT_CDN: &str = "https://cdn.jsdelivr.net/npm/@scalar/api-reference";

/// Widget configuration merged with the optional `spec` object.
#[derive(Serialize,)]
struct WidgetConfiguration<'a,>
{
    #[serde(flatten)]
    config: &'a Config,
    #[serde(skip_serializing_if = "Option::is_none")]
    spec:   Option<SpecDescriptor<'a,>,>,
}

/// Render-ready API reference page.
///
/// All values are resolved at construction and never change afterwards, so
/// an instance can be rendered any number of times and shared across
/// threads.
///
/// # Examples
///
/// ```
/// use scalar_reference::{ApiReference, Config, Theme};
///
/// let config = Config {
///     theme: Some(Theme::Moon,), ..Config::default()
/// };
/// let reference =
///     ApiReference::new("https://example.com/openapi.json", &config,).expect("remote spec",);
/// let html = reference.render_html();
/// assert!(html.contains(
///     "data-configuration=\"{&quot;theme&quot;:&quot;moon&quot;,&quot;spec&quot;:{&quot;url&quot;:&quot;https://example.com/openapi.json&quot;}}\"></script>"
/// ));
/// ```
#[derive(Debug, Clone, PartialEq, Eq,)]
pub struct ApiReference
{
    title:         String,
    cdn:           String,
    custom_css:    String,
    configuration: String,
    content:       String,
}

impl ApiReference
{
    /// Builds a page for the spec at `location` using `config`.
    ///
    /// Locations starting with `http` are passed to the widget as a URL;
    /// anything else is read from the local filesystem and embedded into the
    /// page. When `config` selects a theme its custom CSS is dropped.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidInput`] when `location` is empty.
    /// * [`Error::Io`] when the local spec cannot be read.
    /// * [`Error::Serialize`] when the configuration cannot be encoded.
    pub fn new(location: &str, config: &Config,) -> Result<Self, Error,>
    {
        let source = SpecSource::resolve(location,)?;

        let title = non_empty(config.title.as_deref(),).unwrap_or(DEFAULT_TITLE,).to_owned();
        let cdn = non_empty(config.cdn.as_deref(),).unwrap_or(DEFAULT_CDN,).to_owned();

        let custom_css = match (config.active_theme(), config.custom_css.as_deref(),) {
            (Some(theme,), Some(css,),) if !css.is_empty() => {
                debug!("Theme {} overrides {} bytes of custom CSS", theme, css.len());
                String::new()
            }
            (Some(_,), _,) => String::new(),
            (None, css,) => css.unwrap_or_default().to_owned(),
        };

        let json = serde_json::to_string(&WidgetConfiguration {
            config,
            spec: source.descriptor(),
        },)?;

        info!("Prepared API reference page \"{}\"", title);

        Ok(Self {
            title,
            cdn,
            custom_css,
            configuration: template::escape_quotes(&json,),
            content: source.inline_content().to_owned(),
        },)
    }

    /// Renders the complete HTML document.
    ///
    /// The output contains, in order: the doctype, a head with the title,
    /// charset and viewport meta tags and the custom CSS `<style>` block, and
    /// a body holding the JSON configuration `<script>` followed by the
    /// widget `<script src>`.
    #[must_use]
    pub fn render_html(&self,) -> String
    {
        template::render_page(
            &self.title,
            &self.custom_css,
            &self.configuration,
            &self.content,
            &self.cdn,
        )
    }

    /// Page title.
    pub fn title(&self,) -> &str
    {
        &self.title
    }

    /// URL of the widget script.
    pub fn cdn(&self,) -> &str
    {
        &self.cdn
    }

    /// Stylesheet placed in the `<style>` block, empty when a theme is set.
    pub fn custom_css(&self,) -> &str
    {
        &self.custom_css
    }

    /// Serialized widget configuration with double quotes escaped.
    pub fn configuration(&self,) -> &str
    {
        &self.configuration
    }

    /// Embedded spec contents, empty for remote specs.
    pub fn content(&self,) -> &str
    {
        &self.content
    }
}

/// Builds and renders a page in one step.
///
/// # Errors
///
/// Propagates every error of [`ApiReference::new`].
pub fn render_html(location: &str, config: &Config,) -> Result<String, Error,>
{
    Ok(ApiReference::new(location, config,)?.render_html(),)
}

fn non_empty(value: Option<&str,>,) -> Option<&str,>
{
    value.filter(|candidate| !candidate.is_empty(),)
}
