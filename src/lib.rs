// CLUE-RS: decoder for QT device telemetry in BLE advertisements
// Copyright 2024 - Licensed under GPLv3

pub mod advdata;
pub mod bitwise;
pub mod core;
pub mod formats;
pub mod ingest;
pub mod telemetry;

// Re-export commonly used types
pub use advdata::{collect_fields, iter_fields, parse_fields, AdField, AdFieldMap, AdType};
pub use self::core::{DeviceColor, DeviceMode, RangeError, TelemetryRecord};
pub use formats::{load_scans, ScanError, ScanRecord};
pub use ingest::{decode_batch, decode_batch_parallel, BatchReport, IngestConfig};
pub use telemetry::{decode_advertisement, decode_fields, ErrorKind, TelemetryError};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
