use anyhow::Result;
use clap::Parser;
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

use catalog_parser::config::Settings;
use catalog_parser::{parse_pages_concurrent, CatalogParser, ParseRequest};

/// Extract book availability from saved library catalog result pages.
#[derive(Debug, Parser)]
#[command(name = "catalog-parser", version)]
struct Args {
    /// Saved HTML result page; repeat for multi-page results, in page order
    #[arg(long = "path", required = true)]
    paths: Vec<PathBuf>,

    /// District the pages belong to (seocho, songpa, gangnam, ...)
    #[arg(long)]
    place: Option<String>,

    /// Write records here as JSON Lines instead of the dated default path
    #[arg(long)]
    out_jsonl: Option<PathBuf>,

    /// Parse pages concurrently
    #[arg(long)]
    concurrent: bool,

    /// Skip writing the JSON Lines file
    #[arg(long)]
    no_save: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let settings = Settings::load()?;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(settings.log_filter.parse()?),
        )
        .init();

    info!("Starting catalog parser");

    let request = ParseRequest::new(args.paths).with_place(args.place.clone());
    let parser = Arc::new(CatalogParser::default());

    let mut outcome = if args.concurrent || settings.concurrent {
        parse_pages_concurrent(parser, &request).await
    } else {
        parser.parse_pages(&request)
    };

    if let Some(error) = &outcome.error {
        warn!("Parse finished with errors: {}", error);
    }

    let mut saved = Vec::new();
    if settings.save && !args.no_save {
        let out_path = args
            .out_jsonl
            .unwrap_or_else(|| settings.today_output_path(args.place.as_deref()));
        if let Some(path) = outcome.save_jsonl(&out_path) {
            saved.push(json!(["jsonl", path.display().to_string()]));
        }
    }

    let samples: Vec<_> = outcome.records.iter().take(settings.sample_count).collect();
    let summary = json!({
        "ok": outcome.success,
        "error": outcome.error,
        "count": outcome.records.len(),
        "saved": saved,
        "samples": samples,
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
