//! Command-line interface for the scalar-reference binary.
//!
//! Renders an API reference page for a spec location and writes it to stdout
//! or to a file. Diagnostics go to stderr and are filtered through
//! `RUST_LOG`.

use std::{
    fs, io,
    io::Write,
    path::{Path, PathBuf},
    process,
};

use clap::Parser;
use scalar_reference::{ApiReference, Config, Error, Theme, load_config, output_error};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line interface for rendering API reference pages.
#[derive(Debug, Parser,)]
#[command(name = "scalar-reference", version, about = "Render a Scalar API reference page")]
struct Cli
{
    /// Spec URL (starting with `http`) or path to a local OpenAPI document.
    #[arg(long = "spec", value_name = "LOCATION", env = "SCALAR_SPEC")]
    spec: String,

    /// Path to a YAML file with widget options.
    #[arg(long = "config", value_name = "PATH", env = "SCALAR_CONFIG")]
    config: Option<PathBuf,>,

    /// Page title, overriding the configuration file.
    #[arg(long = "title", value_name = "TITLE")]
    title: Option<String,>,

    /// Widget script URL, overriding the configuration file.
    #[arg(long = "cdn", value_name = "URL")]
    cdn: Option<String,>,

    /// Color preset, overriding the configuration file.
    #[arg(long = "theme", value_name = "THEME")]
    theme: Option<String,>,

    /// File receiving the rendered page. Defaults to stdout.
    #[arg(long = "output", value_name = "PATH")]
    output: Option<PathBuf,>,
}

/// Entry point that reports errors and sets the appropriate exit status.
fn main()
{
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env(),)
        .with_writer(io::stderr,)
        .init();

    if let Err(error,) = run(Cli::parse(),) {
        eprintln!("{}", error.to_display_string());
        process::exit(1,);
    }
}

/// Renders the page described by the parsed arguments.
///
/// # Errors
///
/// Propagates configuration loading, spec resolution and output errors.
fn run(cli: Cli,) -> Result<(), Error,>
{
    let config = resolve_config(&cli,)?;
    let html = ApiReference::new(&cli.spec, &config,)?.render_html();

    match cli.output.as_deref() {
        Some(path,) => write_to_file(path, &html,),
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(html.as_bytes(),)
                .map_err(|source| output_error(Path::new("<stdout>",), source,),)
        }
    }
}

fn resolve_config(cli: &Cli,) -> Result<Config, Error,>
{
    let mut config = match cli.config.as_deref() {
        Some(path,) => load_config(path,)?,
        None => Config::default(),
    };

    if let Some(title,) = cli.title.as_ref() {
        config.title = Some(title.clone(),);
    }
    if let Some(cdn,) = cli.cdn.as_ref() {
        config.cdn = Some(cdn.clone(),);
    }
    if let Some(theme,) = cli.theme.as_deref() {
        config.theme = Some(Theme::from(theme,),).filter(|theme| !theme.as_str().is_empty(),);
    }

    Ok(config,)
}

fn write_to_file(path: &Path, html: &str,) -> Result<(), Error,>
{
    if let Some(parent,) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent,).map_err(|source| output_error(path, source,),)?;
    }

    fs::write(path, html,).map_err(|source| output_error(path, source,),)?;
    info!("Wrote API reference page to {}", path.display());
    Ok((),)
}

#[cfg(test)]
mod tests
{
    use std::fs;

    use clap::Parser;
    use scalar_reference::{DEFAULT_TITLE, Error, Theme};
    use tempfile::tempdir;

    use super::{Cli, resolve_config, run};

    #[test]
    fn theme_flag_accepts_unknown_presets()
    {
        let cli = Cli::try_parse_from([
            env!("CARGO_PKG_NAME"),
            "--spec",
            "https://example.com/openapi.json",
            "--theme",
            "laserwave",
        ],)
        .expect("failed to parse CLI",);

        let config = resolve_config(&cli,).expect("expected configuration",);
        assert_eq!(config.theme, Some(Theme::Other("laserwave".to_owned(),)));
        assert!(cli.output.is_none());
    }

    #[test]
    fn empty_theme_flag_does_not_suppress_css()
    {
        let cli = Cli::try_parse_from([
            env!("CARGO_PKG_NAME"),
            "--spec",
            "https://example.com/openapi.json",
            "--theme",
            "",
        ],)
        .expect("failed to parse CLI",);

        let config = resolve_config(&cli,).expect("expected configuration",);
        assert!(config.theme.is_none());
    }

    #[test]
    fn overrides_apply_on_top_of_config_file()
    {
        let temp = tempdir().expect("failed to create tempdir",);
        let config_path = temp.path().join("scalar.yaml",);
        fs::write(&config_path, "title: From File\ntheme: saturn\nhideSearch: true\n",)
            .expect("failed to write config",);

        let cli = Cli::try_parse_from([
            env!("CARGO_PKG_NAME"),
            "--spec",
            "https://example.com/openapi.json",
            "--config",
            config_path.to_str().expect("utf8",),
            "--title",
            "From Flag",
        ],)
        .expect("failed to parse CLI",);

        let config = resolve_config(&cli,).expect("expected configuration",);
        assert_eq!(config.title.as_deref(), Some("From Flag"));
        assert_eq!(config.theme, Some(Theme::Saturn));
        assert_eq!(config.hide_search, Some(true));
    }

    #[test]
    fn run_writes_page_to_output_file()
    {
        let temp = tempdir().expect("failed to create tempdir",);
        let spec_path = temp.path().join("openapi.json",);
        let output_path = temp.path().join("site/index.html",);
        fs::write(&spec_path, "{\"openapi\":\"3.1.0\"}",).expect("failed to write spec",);

        let cli = Cli::try_parse_from([
            env!("CARGO_PKG_NAME"),
            "--spec",
            spec_path.to_str().expect("utf8",),
            "--output",
            output_path.to_str().expect("utf8",),
        ],)
        .expect("failed to parse CLI",);

        run(cli,).expect("expected page to render",);

        let html = fs::read_to_string(&output_path,).expect("failed to read output",);
        assert!(html.contains(&format!("<title>{DEFAULT_TITLE}</title>")));
        assert!(html.contains(">{\"openapi\":\"3.1.0\"}</script>"));
    }

    #[test]
    fn run_reports_missing_config_file()
    {
        let temp = tempdir().expect("failed to create tempdir",);
        let cli = Cli::try_parse_from([
            env!("CARGO_PKG_NAME"),
            "--spec",
            "https://example.com/openapi.json",
            "--config",
            temp.path().join("missing.yaml",).to_str().expect("utf8",),
        ],)
        .expect("failed to parse CLI",);

        let error = run(cli,).expect_err("expected missing config error",);
        assert!(matches!(error, Error::Io { .. }));
    }
}
