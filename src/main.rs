//! CLI entry point for the access map tool.
//!
//! Fetches a published spreadsheet CSV of points of interest, parses it
//! into validated records, and renders them as an interactive marker map.

use access_map::{
    fetch::{BasicClient, fetch_text},
    output::{print_json, print_pretty, require_non_empty},
    parser::parse_locations,
    render::{HtmlMap, render_locations},
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "access_map")]
#[command(about = "Render a published location feed as an accessibility map", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the location feed and write an HTML marker map
    Render {
        /// CSV source: URL or local file path (defaults to $SHEET_URL)
        #[arg(value_name = "FILE_OR_URL")]
        source: Option<String>,

        /// HTML file to write the map to
        #[arg(short, long, default_value = "map.html")]
        output: String,

        /// Page title for the generated document
        #[arg(short, long, default_value = "Accessibility map")]
        title: String,
    },
    /// Fetch the location feed and print the parsed records
    List {
        /// CSV source: URL or local file path (defaults to $SHEET_URL)
        #[arg(value_name = "FILE_OR_URL")]
        source: Option<String>,

        /// Print records as pretty JSON instead of debug output
        #[arg(short, long, default_value_t = false)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/access_map.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("access_map.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            source,
            output,
            title,
        } => {
            let source = resolve_source(source)?;
            let text = fetcher(&source).await.context("Failed to load data.")?;
            let records = parse_locations(&text);
            info!(record_count = records.len(), "Feed parsed");

            let mut map = HtmlMap::new(&title);
            let placed = render_locations(&mut map, &records)?;

            std::fs::write(&output, map.into_document())?;
            info!(markers = placed, output, "Map written");
        }
        Commands::List { source, json } => {
            let source = resolve_source(source)?;
            let text = fetcher(&source).await.context("Failed to load data.")?;
            let records = parse_locations(&text);
            info!(record_count = records.len(), "Feed parsed");
            require_non_empty(&records)?;

            if json {
                print_json(&records)?;
            } else {
                print_pretty(&records);
            }
        }
    }

    Ok(())
}

/// Resolves the CSV source from the CLI argument or the SHEET_URL
/// environment variable. The endpoint is explicit configuration, never a
/// baked-in constant.
fn resolve_source(arg: Option<String>) -> Result<String> {
    match arg {
        Some(source) => Ok(source),
        None => std::env::var("SHEET_URL")
            .context("No source given and SHEET_URL is not set"),
    }
}

/// Loads the feed text from a local file path or fetches it over HTTP.
#[tracing::instrument(fields(source = %source))]
async fn fetcher(source: &str) -> Result<String> {
    let text = if source.starts_with("http") {
        let client = BasicClient::new();
        fetch_text(&client, source).await?
    } else {
        std::fs::read_to_string(source)?
    };
    Ok(text)
}
