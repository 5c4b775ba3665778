// QT device telemetry decoding
pub mod decoder;
pub mod payload;

pub use decoder::{decode_advertisement, decode_fields, ErrorKind, Result, TelemetryError};
pub use payload::ManufacturerPayload;
