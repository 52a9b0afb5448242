//! signpost: turn a web page into signposted content.
//!
//! ```text
//! signpost https://example.com/paris --client LeShuttle --keyword "paris=12,100"
//! signpost https://example.com/paris --html saved.html --format json
//! curl -s https://example.com/ | signpost --html - --template report.txt --out-dir out/
//! ```

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rs_signpost::config::{LogFormat, LoggingConfig};
use rs_signpost::encoding;
use rs_signpost::fetch::{FetchError, Fetcher, MANUAL_PASTE_HELP};
use rs_signpost::report::{document_file_name, format_keywords, Keyword};
use rs_signpost::template::{self, TemplateFields};
use rs_signpost::{extract, Config, ExtractOptions, Extraction};
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Exit status when the page has to be pasted in by hand.
const EXIT_MANUAL_PASTE: u8 = 2;

#[derive(Parser)]
#[command(name = "signpost")]
#[command(about = "Extract signposted headings, paragraphs and images from a web page")]
#[command(version)]
struct Cli {
    /// Page URL. Fetched unless --html is given.
    url: Option<String>,

    /// Read the page source from a file instead of fetching ("-" for stdin)
    #[arg(long, value_name = "PATH")]
    html: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, env = "SIGNPOST_CONFIG")]
    config: Option<PathBuf>,

    /// Comma-separated exclusion selectors, replacing the configured list
    #[arg(long, value_name = "CSV")]
    exclude: Option<String>,

    /// Render links as "text (→ href)"
    #[arg(long)]
    annotate_links: bool,

    /// Drop everything before the first <h1>
    #[arg(long)]
    remove_before_h1: bool,

    /// Add src to image lines
    #[arg(long)]
    include_img_src: bool,

    /// Keep JSON-LD schema in the output
    #[arg(long)]
    include_schema: bool,

    /// Agency name for the report header
    #[arg(long)]
    agency: Option<String>,

    /// Client name for the report header and file name
    #[arg(long)]
    client: Option<String>,

    /// Target keyword with search volume, repeatable
    #[arg(long = "keyword", value_name = "KW=VOL")]
    keywords: Vec<Keyword>,

    /// Render this template and write the report into --out-dir
    #[arg(long, value_name = "PATH")]
    template: Option<PathBuf>,

    /// Directory for rendered reports
    #[arg(long, value_name = "DIR", default_value = ".")]
    out_dir: PathBuf,

    /// Output format for stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if err
                .downcast_ref::<FetchError>()
                .is_some_and(FetchError::needs_manual_paste)
            {
                eprintln!("{MANUAL_PASTE_HELP}");
                return ExitCode::from(EXIT_MANUAL_PASTE);
            }
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref()).context("failed to load config")?;
    apply_overrides(&mut config, &cli);
    init_logging(&config.logging, cli.verbose)?;

    let (html, url) = load_page(&cli, &config).await?;
    let mut result = extract(&html, &url, &config.extract);
    if !config.report.include_schema {
        result.meta.schema_lines.clear();
    }
    info!(page = %result.meta.page, lines = result.lines.len(), "extracted");

    let keywords = format_keywords(&cli.keywords);

    if let Some(path) = &cli.template {
        write_report(path, &cli.out_dir, &config, &result, &keywords)?;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Text => print_text(&mut out, &result, &keywords)?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?,
    }
    Ok(())
}

/// Command-line flags win over the config file.
fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(csv) = &cli.exclude {
        config.extract.exclude_selectors = ExtractOptions::parse_selector_list(csv);
    }
    config.extract.annotate_links |= cli.annotate_links;
    config.extract.remove_before_h1 |= cli.remove_before_h1;
    config.extract.include_img_src |= cli.include_img_src;
    config.report.include_schema |= cli.include_schema;
    if let Some(agency) = &cli.agency {
        config.report.agency.clone_from(agency);
    }
    if let Some(client) = &cli.client {
        config.report.client_name.clone_from(client);
    }
}

fn init_logging(logging: &LoggingConfig, verbose: u8) -> Result<()> {
    let level = logging.level.more_verbose(verbose);
    let env_filter = if verbose > 0 {
        EnvFilter::new(level.as_str())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()))
    };

    let registry = tracing_subscriber::registry().with(env_filter);
    match logging.format {
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(io::stderr).with_target(false))
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(io::stderr))
            .try_init(),
    }
    .map_err(|e| anyhow::anyhow!("tracing setup failed: {e}"))
}

/// Page source and the URL to report it under.
async fn load_page(cli: &Cli, config: &Config) -> Result<(String, String)> {
    if let Some(path) = &cli.html {
        let bytes = read_source(path)?;
        let url = cli.url.clone().unwrap_or_default();
        return Ok((encoding::decode_html(&bytes, None), url));
    }

    let url = cli
        .url
        .as_deref()
        .context("either a URL or --html is required")?;
    let fetcher = Fetcher::new(&config.fetch)?;
    let page = fetcher.fetch(url).await?;
    Ok((page.text(), page.final_url.to_string()))
}

fn read_source(path: &Path) -> Result<Vec<u8>> {
    if path == Path::new("-") {
        let mut bytes = Vec::new();
        io::stdin()
            .read_to_end(&mut bytes)
            .context("failed to read HTML from stdin")?;
        Ok(bytes)
    } else {
        fs::read(path).with_context(|| format!("failed to read {}", path.display()))
    }
}

fn write_report(
    template_path: &Path,
    out_dir: &Path,
    config: &Config,
    result: &Extraction,
    keywords: &str,
) -> Result<()> {
    let template_text = fs::read_to_string(template_path)
        .with_context(|| format!("failed to read template {}", template_path.display()))?;

    let fields = TemplateFields {
        agency: config.report.agency.clone(),
        client_name: config.report.client_name.clone(),
        keywords: keywords.to_string(),
        ..TemplateFields::new(result.meta.clone())
    };
    let rendered = template::render(&template_text, &fields, &result.lines);
    for placeholder in &rendered.missing {
        warn!(%placeholder, "template has no placeholder for this block, content not placed");
    }

    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;
    let path = out_dir.join(document_file_name(
        &result.meta.page,
        &config.report.client_name,
        "txt",
    ));
    fs::write(&path, rendered.text).with_context(|| format!("failed to write {}", path.display()))?;
    eprintln!("Wrote {}", path.display());
    Ok(())
}

fn print_text(out: &mut impl Write, result: &Extraction, keywords: &str) -> io::Result<()> {
    let meta = &result.meta;
    writeln!(out, "Page: {}", meta.page)?;
    writeln!(out, "Date: {}", meta.date)?;
    writeln!(out, "URL: {}", meta.url)?;
    writeln!(out, "Title: {} ({} characters)", meta.title, meta.title_len)?;
    writeln!(
        out,
        "Description: {} ({} characters)",
        meta.description, meta.description_len
    )?;
    if !keywords.is_empty() {
        writeln!(out, "Keywords: {keywords}")?;
    }
    writeln!(out)?;
    for line in &result.lines {
        writeln!(out, "{line}")?;
    }
    if !meta.schema_lines.is_empty() {
        writeln!(out)?;
        writeln!(out, "Schema:")?;
        for line in &meta.schema_lines {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}
