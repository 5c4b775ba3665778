// Batch decoding of scan records
//
// Failures are collected next to the successes instead of aborting the batch;
// each result keeps the index of the scan record it came from.

use super::config::IngestConfig;
use crate::core::TelemetryRecord;
use crate::formats::{ScanError, ScanRecord};
use crate::telemetry::ErrorKind;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinSet;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Decode worker failed: {0}")]
    Worker(String),
}

pub type Result<T> = std::result::Result<T, IngestError>;

/// Telemetry decoded from one scan record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedScan {
    /// Position of the scan record in the input batch
    pub source_index: usize,

    /// Upload batch of the originating scan record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blob_name: Option<String>,

    pub telemetry: TelemetryRecord,
}

/// A scan record that could not be decoded
#[derive(Debug)]
pub struct FailedScan {
    pub source_index: usize,
    pub mac: String,
    pub error: ScanError,
}

/// Outcome of decoding a batch, ordered by source index
#[derive(Debug, Default)]
pub struct BatchReport {
    pub decoded: Vec<DecodedScan>,
    pub failed: Vec<FailedScan>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.decoded.len() + self.failed.len()
    }

    /// Failure counts grouped by telemetry error kind
    ///
    /// Failures that happened before telemetry decoding (missing or bad raw
    /// data) are counted under `None`.
    pub fn failure_counts(&self) -> BTreeMap<Option<ErrorKind>, usize> {
        let mut counts = BTreeMap::new();
        for failed in &self.failed {
            *counts.entry(failed.error.telemetry_kind()).or_insert(0) += 1;
        }
        counts
    }

    fn merge(&mut self, other: BatchReport) {
        self.decoded.extend(other.decoded);
        self.failed.extend(other.failed);
    }

    fn sort(&mut self) {
        self.decoded.sort_by_key(|d| d.source_index);
        self.failed.sort_by_key(|f| f.source_index);
    }
}

fn decode_one(index: usize, scan: &ScanRecord, report: &mut BatchReport) {
    match scan.decode() {
        Ok(telemetry) => report.decoded.push(DecodedScan {
            source_index: index,
            blob_name: scan.blob_name.clone(),
            telemetry,
        }),
        Err(error) => {
            tracing::warn!("Skipping scan {} ({}): {}", index, scan.mac, error);
            report.failed.push(FailedScan {
                source_index: index,
                mac: scan.mac.clone(),
                error,
            });
        }
    }
}

fn decode_range(scans: &[ScanRecord], start: usize) -> BatchReport {
    let mut report = BatchReport::default();
    for (offset, scan) in scans.iter().enumerate() {
        decode_one(start + offset, scan, &mut report);
    }
    report
}

/// Decode a batch of scan records on the current thread
pub fn decode_batch(scans: &[ScanRecord]) -> BatchReport {
    let report = decode_range(scans, 0);
    tracing::info!(
        "Decoded {} of {} scan records",
        report.decoded.len(),
        report.total()
    );
    report
}

/// Decode a batch of scan records across a pool of blocking workers
///
/// At most `config.workers` chunks are in flight at once. The report is
/// ordered by source index regardless of which worker finished first.
pub async fn decode_batch_parallel(
    scans: Vec<ScanRecord>,
    config: &IngestConfig,
) -> Result<BatchReport> {
    let scans = Arc::new(scans);
    let chunk_size = config.effective_chunk_size(scans.len());
    let workers = config.workers.max(1);

    let mut report = BatchReport::default();
    let mut tasks = JoinSet::new();
    let mut start = 0;

    while start < scans.len() || !tasks.is_empty() {
        while start < scans.len() && tasks.len() < workers {
            let end = (start + chunk_size).min(scans.len());
            let scans = Arc::clone(&scans);
            tracing::debug!("Dispatching scan records {}..{}", start, end);
            tasks.spawn_blocking(move || decode_range(&scans[start..end], start));
            start = end;
        }

        if let Some(joined) = tasks.join_next().await {
            let chunk = joined.map_err(|e| IngestError::Worker(e.to_string()))?;
            report.merge(chunk);
        }
    }

    report.sort();
    tracing::info!(
        "Decoded {} of {} scan records with {} workers",
        report.decoded.len(),
        report.total(),
        workers
    );
    Ok(report)
}
