// Telemetry decoder for QT device advertisements
//
// Takes the collected advertising fields plus the MAC address reported by the
// scanner and produces a TelemetryRecord. Every failure is returned, never
// replaced by a default.

use super::payload::ManufacturerPayload;
use crate::advdata::{collect_fields, AdFieldMap, AdType, AdvDataError};
use crate::core::constants::MAC_ADDRESS_LEN;
use crate::core::{RangeError, TelemetryRecord};
use std::fmt;
use std::str::Utf8Error;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TelemetryError {
    #[error(transparent)]
    BufferMalformed(#[from] AdvDataError),

    #[error("Required field missing: {0}")]
    FieldMissing(AdType),

    #[error("Invalid {field} size: expected {expected} bytes, got {actual}")]
    SizeMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Device name is not valid UTF-8: {0}")]
    Encoding(#[from] Utf8Error),

    #[error(transparent)]
    Range(#[from] RangeError),

    #[error("Invalid MAC address length: expected {expected} characters, got {length}")]
    InvalidMacAddress { expected: usize, length: usize },
}

pub type Result<T> = std::result::Result<T, TelemetryError>;

/// Coarse classification of a decode failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ErrorKind {
    BufferMalformed,
    FieldMissing,
    SizeMismatch,
    Encoding,
    Range,
    InvalidMacAddress,
}

impl ErrorKind {
    /// True for failures caused by an unrecognised hardware variant rather
    /// than damaged input
    pub fn is_unknown_variant(&self) -> bool {
        matches!(self, ErrorKind::Range)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::BufferMalformed => "buffer malformed",
            ErrorKind::FieldMissing => "field missing",
            ErrorKind::SizeMismatch => "size mismatch",
            ErrorKind::Encoding => "encoding error",
            ErrorKind::Range => "range error",
            ErrorKind::InvalidMacAddress => "invalid MAC address",
        };
        write!(f, "{}", s)
    }
}

impl TelemetryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TelemetryError::BufferMalformed(_) => ErrorKind::BufferMalformed,
            TelemetryError::FieldMissing(_) => ErrorKind::FieldMissing,
            TelemetryError::SizeMismatch { .. } => ErrorKind::SizeMismatch,
            TelemetryError::Encoding(_) => ErrorKind::Encoding,
            TelemetryError::Range(_) => ErrorKind::Range,
            TelemetryError::InvalidMacAddress { .. } => ErrorKind::InvalidMacAddress,
        }
    }
}

/// Decode telemetry from already collected advertising fields
///
/// Checks run in a fixed order: MAC length, name present, manufacturer data
/// present, manufacturer data size, name encoding, color, mode.
pub fn decode_fields(fields: &AdFieldMap, mac_address: &str) -> Result<TelemetryRecord> {
    let mac_length = mac_address.chars().count();
    if mac_length != MAC_ADDRESS_LEN {
        return Err(TelemetryError::InvalidMacAddress {
            expected: MAC_ADDRESS_LEN,
            length: mac_length,
        });
    }

    let name_bytes = fields
        .get(AdType::COMPLETE_LOCAL_NAME)
        .ok_or(TelemetryError::FieldMissing(AdType::COMPLETE_LOCAL_NAME))?;

    let manufacturer_data = fields
        .get(AdType::MANUFACTURER_SPECIFIC_DATA)
        .ok_or(TelemetryError::FieldMissing(AdType::MANUFACTURER_SPECIFIC_DATA))?;

    let payload = ManufacturerPayload::try_from(manufacturer_data)?;
    let name = std::str::from_utf8(name_bytes)?;

    let record = TelemetryRecord {
        name: name.to_string(),
        mac_address: mac_address.to_string(),
        color: payload.color()?,
        mode: payload.mode()?,
        armed: payload.armed(),
        snow_mode: payload.snow_mode(),
        battery_voltage: payload.battery_voltage(),
    };

    tracing::debug!("Decoded telemetry: {}", record);

    Ok(record)
}

/// Parse raw advertising data and decode its telemetry in one step
pub fn decode_advertisement(raw: &[u8], mac_address: &str) -> Result<TelemetryRecord> {
    let fields = collect_fields(raw)?;
    decode_fields(&fields, mac_address)
}
