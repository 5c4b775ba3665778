// Batch ingestion of captured scan records
pub mod batch;
pub mod config;

pub use batch::{
    decode_batch, decode_batch_parallel, BatchReport, DecodedScan, FailedScan, IngestError,
};
pub use config::IngestConfig;
