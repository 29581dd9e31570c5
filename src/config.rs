// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Configuration types understood by the embedded API reference widget.
//!
//! The types in this module are passive data carriers. Every option is
//! optional and absent options are omitted from the serialized JSON rather
//! than emitted as `null`, so the widget falls back to its own defaults.
//! Enumerated options accept values outside their documented catalog: the
//! widget is the one that decides whether an identifier is meaningful.

use std::{collections::BTreeMap, fmt, fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{self, Error};

/// Declares a string-backed enumeration with a pass-through `Other` variant.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident
        {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $value:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize,)]
        #[serde(from = "String", into = "String")]
        pub enum $name
        {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
            /// Identifier outside the known catalog, forwarded untouched.
            Other(String,),
        }

        impl $name
        {
            /// Returns the identifier written into the widget configuration.
            pub fn as_str(&self,) -> &str
            {
                match self {
                    $(Self::$variant => $value,)+
                    Self::Other(value,) => value.as_str(),
                }
            }
        }

        impl From<String,> for $name
        {
            fn from(value: String,) -> Self
            {
                match value.as_str() {
                    $($value => Self::$variant,)+
                    _ => Self::Other(value,),
                }
            }
        }

        impl From<&str,> for $name
        {
            fn from(value: &str,) -> Self
            {
                Self::from(value.to_owned(),)
            }
        }

        impl From<$name,> for String
        {
            fn from(value: $name,) -> Self
            {
                match value {
                    $name::Other(raw,) => raw,
                    known => known.as_str().to_owned(),
                }
            }
        }

        impl AsRef<str,> for $name
        {
            fn as_ref(&self,) -> &str
            {
                self.as_str()
            }
        }

        impl fmt::Display for $name
        {
            fn fmt(&self, formatter: &mut fmt::Formatter<'_,>,) -> fmt::Result
            {
                formatter.write_str(self.as_str(),)
            }
        }
    };
}

string_enum! {
    /// Color presets shipped with the widget.
    ///
    /// Selecting any non-empty theme, including [`Theme::None`], suppresses
    /// the custom CSS block of the rendered page.
    Theme
    {
        /// The `alternate` preset.
        Alternate => "alternate",
        /// The widget's default preset.
        Default => "default",
        /// The `moon` preset.
        Moon => "moon",
        /// The `purple` preset.
        Purple => "purple",
        /// The `solarized` preset.
        Solarized => "solarized",
        /// The `bluePlanet` preset.
        BluePlanet => "bluePlanet",
        /// The `deepSpace` preset.
        DeepSpace => "deepSpace",
        /// The `saturn` preset.
        Saturn => "saturn",
        /// The `kepler` preset.
        Kepler => "kepler",
        /// The `elysiajs` preset.
        Elysiajs => "elysiajs",
        /// The `fastify` preset.
        Fastify => "fastify",
        /// The `mars` preset.
        Mars => "mars",
        /// Disables the bundled presets entirely.
        None => "none",
    }
}

string_enum! {
    /// Page layouts supported by the widget.
    Layout
    {
        /// Single column layout.
        Classic => "classic",
        /// Sidebar driven layout.
        Modern => "modern",
    }
}

string_enum! {
    /// Color scheme the widget is pinned to regardless of user preference.
    ForceDarkModeState
    {
        /// Always render in dark mode.
        Dark => "dark",
        /// Always render in light mode.
        Light => "light",
    }
}

string_enum! {
    /// Code snippet generators offered by the widget's API client, written as
    /// `target/client` pairs.
    HttpClient
    {
        /// `c/libcurl`
        CLibcurl => "c/libcurl",
        /// `clojure/clj_http`
        ClojureCljHttp => "clojure/clj_http",
        /// `csharp/httpclient`
        CSharpHttpClient => "csharp/httpclient",
        /// `csharp/restsharp`
        CSharpRestSharp => "csharp/restsharp",
        /// `go/native`
        GoNative => "go/native",
        /// `http/http1.1`
        Http11 => "http/http1.1",
        /// `java/asynchttp`
        JavaAsyncHttp => "java/asynchttp",
        /// `java/nethttp`
        JavaNetHttp => "java/nethttp",
        /// `java/okhttp`
        JavaOkHttp => "java/okhttp",
        /// `java/unirest`
        JavaUnirest => "java/unirest",
        /// `js/axios`
        JsAxios => "js/axios",
        /// `js/fetch`
        JsFetch => "js/fetch",
        /// `js/jquery`
        JsJquery => "js/jquery",
        /// `js/ofetch`
        JsOfetch => "js/ofetch",
        /// `js/xhr`
        JsXhr => "js/xhr",
        /// `kotlin/okhttp`
        KotlinOkHttp => "kotlin/okhttp",
        /// `node/axios`
        NodeAxios => "node/axios",
        /// `node/fetch`
        NodeFetch => "node/fetch",
        /// `node/ofetch`
        NodeOfetch => "node/ofetch",
        /// `node/undici`
        NodeUndici => "node/undici",
        /// `objc/nsurlsession`
        ObjcNsUrlSession => "objc/nsurlsession",
        /// `ocaml/cohttp`
        OcamlCohttp => "ocaml/cohttp",
        /// `php/curl`
        PhpCurl => "php/curl",
        /// `php/guzzle`
        PhpGuzzle => "php/guzzle",
        /// `powershell/restmethod`
        PowerShellRestMethod => "powershell/restmethod",
        /// `powershell/webrequest`
        PowerShellWebRequest => "powershell/webrequest",
        /// `python/python3`
        PythonPython3 => "python/python3",
        /// `python/requests`
        PythonRequests => "python/requests",
        /// `r/httr`
        RHttr => "r/httr",
        /// `ruby/native`
        RubyNative => "ruby/native",
        /// `shell/curl`
        ShellCurl => "shell/curl",
        /// `shell/httpie`
        ShellHttpie => "shell/httpie",
        /// `shell/wget`
        ShellWget => "shell/wget",
        /// `swift/nsurlsession`
        SwiftNsUrlSession => "swift/nsurlsession",
        /// `dart/http`
        DartHttp => "dart/http",
    }
}

/// Snippet generator selected when the API client opens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize,)]
#[serde(rename_all = "camelCase")]
pub struct HttpClientState
{
    /// Language or platform key, e.g. `shell`.
    pub target_key: String,
    /// Library key within the target, e.g. `curl`.
    pub client_key: String,
}

/// Path based routing settings. The hosting server must route every subpath
/// of `base_path` to the rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize,)]
#[serde(rename_all = "camelCase")]
pub struct PathRouting
{
    /// Path prefix the reference is mounted under.
    pub base_path: String,
}

/// Server entry overriding the servers declared by the spec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize,)]
pub struct Server
{
    /// Base URL of the server.
    pub url:         String,
    /// Optional label displayed next to the URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String,>,
}

/// Options forwarded to the API reference widget.
///
/// Every field is optional. Unset fields, and string options set to an empty
/// string, are skipped during serialization so the widget applies its own
/// defaults. `title` and `cdn` only affect the
/// surrounding HTML page and are never part of the serialized configuration.
///
/// # Examples
///
/// ```
/// use scalar_reference::{Config, Theme};
///
/// let config = Config {
///     theme: Some(Theme::Moon,), ..Config::default()
/// };
/// let json = serde_json::to_string(&config,).expect("serializable configuration",);
/// assert_eq!(json, r#"{"theme":"moon"}"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize,)]
#[serde(default, rename_all = "camelCase")]
pub struct Config
{
    /// Color preset. Suppresses [`custom_css`](Self::custom_css) when set.
    #[serde(skip_serializing_if = "is_blank")]
    pub theme: Option<Theme,>,

    /// Page layout.
    #[serde(skip_serializing_if = "is_blank")]
    pub layout: Option<Layout,>,

    /// URL of a request proxy used by the API client.
    #[serde(skip_serializing_if = "is_blank")]
    pub proxy_url: Option<String,>,

    /// Whether the spec input is editable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_editable: Option<bool,>,

    /// Whether the sidebar is shown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_sidebar: Option<bool,>,

    /// Whether models are hidden from the sidebar, search and content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_models: Option<bool,>,

    /// Whether the "Download OpenAPI Document" button is hidden.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_download_button: Option<bool,>,

    /// Whether the "Test Request" button is hidden.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_test_request_button: Option<bool,>,

    /// Whether the sidebar search bar is hidden.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_search: Option<bool,>,

    /// Initial dark mode state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_mode: Option<bool,>,

    /// Pins the color scheme no matter what the reader picks.
    #[serde(skip_serializing_if = "is_blank")]
    pub force_dark_mode_state: Option<ForceDarkModeState,>,

    /// Whether the dark mode toggle is hidden.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_dark_mode_toggle: Option<bool,>,

    /// Key combined with CTRL/CMD to open the search modal, one of `a-z`.
    #[serde(skip_serializing_if = "is_blank")]
    pub search_hot_key: Option<String,>,

    /// Entries injected into the document head by the widget.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<BTreeMap<String, String,>,>,

    /// Path to a favicon image, e.g. `/favicon.svg`.
    #[serde(skip_serializing_if = "is_blank")]
    pub favicon: Option<String,>,

    /// Snippet generators hidden from the clients menu. An empty list shows
    /// every client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden_clients: Option<Vec<HttpClient,>,>,

    /// Snippet generator selected by default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_http_client: Option<HttpClientState,>,

    /// Stylesheet injected into the page `<style>` block.
    #[serde(skip_serializing_if = "is_blank")]
    pub custom_css: Option<String,>,

    /// Authentication prefill, passed to the widget as an opaque object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication: Option<serde_json::Map<String, serde_json::Value,>,>,

    /// Route using paths instead of hashes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_routing: Option<PathRouting,>,

    /// Base URL used to resolve relative spec servers, e.g.
    /// `http://localhost:3000`.
    #[serde(rename = "baseServerURL", skip_serializing_if = "is_blank")]
    pub base_server_url: Option<String,>,

    /// Servers overriding the ones declared by the spec.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servers: Option<Vec<Server,>,>,

    /// Whether the widget loads its bundled fonts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_default_fonts: Option<bool,>,

    /// Whether every tag starts expanded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_open_all_tags: Option<bool,>,

    /// Whether the client button is hidden from the sidebar and modal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_client_button: Option<bool,>,

    /// Title of the rendered page.
    #[serde(skip_serializing)]
    pub title: Option<String,>,

    /// URL of the widget script.
    #[serde(skip_serializing)]
    pub cdn: Option<String,>,
}

impl Config
{
    /// Returns the selected theme, treating an empty identifier as unset.
    pub fn active_theme(&self,) -> Option<&Theme,>
    {
        self.theme.as_ref().filter(|theme| !theme.as_str().is_empty(),)
    }
}

/// Empty strings are omitted like unset values.
fn is_blank<T: AsRef<str,>,>(value: &Option<T,>,) -> bool
{
    value.as_ref().is_none_or(|inner| inner.as_ref().is_empty(),)
}

/// Loads a widget configuration from a YAML file.
///
/// # Errors
///
/// Returns [`Error::Io`] when the file cannot be read and [`Error::Parse`]
/// when its contents are not a valid configuration document.
pub fn load_config(path: &Path,) -> Result<Config, Error,>
{
    debug!("Reading configuration from {}", path.display());
    let contents = fs::read_to_string(path,).map_err(|source| error::io_error(path, source,),)?;
    parse_config(&contents,)
}

/// Parses a widget configuration from a YAML document.
///
/// Keys use the widget's camelCase names. Unknown keys are ignored and an
/// empty document yields [`Config::default`].
///
/// # Errors
///
/// Propagates [`Error::Parse`] when the YAML cannot be decoded.
///
/// # Examples
///
/// ```
/// use scalar_reference::{Layout, parse_config};
///
/// let config = parse_config("layout: classic\nshowSidebar: false\n",).expect("valid document",);
/// assert_eq!(config.layout, Some(Layout::Classic));
/// assert_eq!(config.show_sidebar, Some(false));
/// ```
pub fn parse_config(contents: &str,) -> Result<Config, Error,>
{
    if contents.trim().is_empty() {
        return Ok(Config::default(),);
    }

    let config: Config = serde_yaml::from_str(contents,)?;
    Ok(config,)
}
