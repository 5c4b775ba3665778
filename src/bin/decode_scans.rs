//! Batch telemetry decoder
//! Decodes a JSON Lines file of scan records and writes the telemetry found

use clue_rs::formats::{export_jsonl, load_scans, write_jsonl};
use clue_rs::ingest::{decode_batch_parallel, IngestConfig};
use std::env;
use tracing_subscriber::{fmt::format::FmtSpan, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    let format_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_span_events(FmtSpan::NONE);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(format_layer)
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 4 {
        eprintln!("Usage: {} <scans.jsonl> [output.jsonl] [workers]", args[0]);
        eprintln!("\nEach input line is one scan record with base64 raw_data.");
        eprintln!("Decoded telemetry goes to stdout when no output file is given.");
        std::process::exit(1);
    }

    let input = &args[1];
    let output = args.get(2).filter(|s| s.as_str() != "-");

    let mut config = IngestConfig::default();
    if let Some(workers) = args.get(3) {
        config = config.with_workers(workers.parse()?);
    }

    tracing::info!("Reading scan records from {}", input);
    let scans = load_scans(input)?;
    tracing::info!("Loaded {} scan records", scans.len());

    let report = decode_batch_parallel(scans, &config).await?;

    match output {
        Some(path) => {
            export_jsonl(path, &report.decoded)?;
            tracing::info!("Wrote {} telemetry records to {}", report.decoded.len(), path);
        }
        None => write_jsonl(std::io::stdout().lock(), &report.decoded)?,
    }

    for (kind, count) in report.failure_counts() {
        match kind {
            Some(kind) => tracing::warn!("{} records failed: {}", count, kind),
            None => tracing::warn!("{} records failed before decoding", count),
        }
    }

    Ok(())
}
