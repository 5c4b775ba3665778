// Core data structures for decoded device telemetry
pub mod constants;
pub mod device;
pub mod record;

// Re-export commonly used types
pub use constants::*;
pub use device::{DeviceColor, DeviceMode, RangeError};
pub use record::TelemetryRecord;
