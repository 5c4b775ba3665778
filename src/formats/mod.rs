// File and wire formats around the decoder
pub mod jsonl;
pub mod scan;

pub use jsonl::{export_jsonl, load_scans, read_scans, write_jsonl};
pub use scan::{ScanError, ScanRecord};
