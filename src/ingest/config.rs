// Batch ingestion configuration

use std::num::NonZeroUsize;

/// Worker pool settings for batch decoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestConfig {
    /// Number of blocking worker tasks decoding in parallel
    pub workers: usize,

    /// Scan records handed to a worker at a time
    pub chunk_size: usize,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            workers: std::thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(4),
            chunk_size: 256,
        }
    }
}

impl IngestConfig {
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Chunk size that spreads `total` records across the workers
    pub fn effective_chunk_size(&self, total: usize) -> usize {
        let workers = self.workers.max(1);
        let per_worker = total.div_ceil(workers).max(1);
        per_worker.min(self.chunk_size.max(1))
    }
}
