// Scan records as submitted by field scanners
//
// One JSON object per captured advertisement. `raw_data` holds the
// advertising bytes base64-encoded; everything the decoder does not need
// (position, timestamps, speed) is carried through untouched in `extra`.

use crate::core::TelemetryRecord;
use crate::telemetry::{decode_advertisement, ErrorKind, TelemetryError};
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse scan record JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Scan record has no raw advertising data")]
    MissingRawData,

    #[error("Failed to decode base64 raw data: {0}")]
    Base64(String),

    #[error("Telemetry decode failed: {0}")]
    Telemetry(#[from] TelemetryError),
}

impl ScanError {
    /// Telemetry error kind, if the failure came from the decoder
    pub fn telemetry_kind(&self) -> Option<ErrorKind> {
        match self {
            ScanError::Telemetry(e) => Some(e.kind()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScanError>;

/// One captured advertisement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanRecord {
    pub mac: String,

    #[serde(default)]
    pub rssi: Option<i32>,

    /// Name reported by the scanner's platform API
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub local_name: Option<String>,

    #[serde(default)]
    pub manufacturer_id: Option<u16>,

    /// Base64-encoded advertising data
    #[serde(default)]
    pub raw_data: Option<String>,

    /// Upload batch the record arrived in
    #[serde(default)]
    pub blob_name: Option<String>,

    /// Additional properties
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl ScanRecord {
    /// Create a record from a MAC address and raw advertising bytes
    pub fn new(mac: impl Into<String>, raw: &[u8]) -> Self {
        Self {
            mac: mac.into(),
            rssi: None,
            name: None,
            local_name: None,
            manufacturer_id: None,
            raw_data: Some(STANDARD.encode(raw)),
            blob_name: None,
            extra: HashMap::new(),
        }
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize from JSON
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Decoded advertising bytes
    pub fn raw_bytes(&self) -> Result<Vec<u8>> {
        let encoded = self.raw_data.as_deref().ok_or(ScanError::MissingRawData)?;
        STANDARD
            .decode(encoded.trim())
            .map_err(|e| ScanError::Base64(e.to_string()))
    }

    /// Decode the device telemetry carried by this advertisement
    pub fn decode(&self) -> Result<TelemetryRecord> {
        let raw = self.raw_bytes()?;
        Ok(decode_advertisement(&raw, &self.mac)?)
    }
}
