//! Decode a single advertisement
//! Prints the advertising fields and the decoded telemetry of one hex buffer

use clue_rs::advdata::iter_fields;
use clue_rs::telemetry::ManufacturerPayload;
use clue_rs::{collect_fields, decode_fields, AdType};
use std::env;
use tracing_subscriber::{fmt::format::FmtSpan, prelude::*, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    let format_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(format_layer)
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <hex_bytes> <mac_address>", args[0]);
        eprintln!("Example: {} 0201060309515407FFC000C08040C8 AA:BB:CC:DD:EE:FF", args[0]);
        std::process::exit(1);
    }

    let hex_input: String = args[1]
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':')
        .collect();
    let mac = &args[2];

    let raw = hex::decode(&hex_input)?;
    println!("Loaded {} bytes\n", raw.len());

    println!("=== Advertising Fields ===\n");
    let mut iter = iter_fields(&raw);
    loop {
        let offset = iter.offset();
        let Some(field) = iter.next() else { break };
        let field = field?;
        println!(
            "  @{:<3} len={:<3} {:<45} {}",
            offset,
            field.encoded_len(),
            field.ad_type.to_string(),
            hex::encode_upper(field.value)
        );
    }
    println!();

    let fields = collect_fields(&raw)?;
    let types: Vec<String> = fields.types().iter().map(ToString::to_string).collect();
    println!("Distinct field types: {}\n", types.join(", "));

    if let Some(data) = fields.get(AdType::MANUFACTURER_SPECIFIC_DATA) {
        if let Ok(payload) = ManufacturerPayload::try_from(data) {
            println!("=== Manufacturer Payload ===\n");
            println!("  Bytes:        {}", hex::encode_upper(payload.bytes()));
            println!("  Color code:   {}", payload.color_code());
            println!("  Mode code:    {}", payload.mode_code());
            println!("  Battery raw:  {} ({} mV)", payload.battery_raw(), payload.battery_millivolts());
            println!();
        }
    }

    let record = decode_fields(&fields, mac)?;
    println!("=== Telemetry ===\n");
    println!("{}", serde_json::to_string_pretty(&record)?);

    Ok(())
}
