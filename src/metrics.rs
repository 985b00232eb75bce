//! Metric names and recording helpers for the mapping pipeline.
//!
//! Everything goes through the `metrics` facade; without an installed
//! recorder the calls are no-ops.

use std::fmt;

/// All metric names emitted by this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricName {
    MappingRecordsMapped,
    MappingRecordsSkipped,
    MappingDateFallbacks,
    MappingBatchesProcessed,
    MappingBatchSize,
}

impl MetricName {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricName::MappingRecordsMapped => "mapper_records_mapped_total",
            MetricName::MappingRecordsSkipped => "mapper_records_skipped_total",
            MetricName::MappingDateFallbacks => "mapper_date_fallbacks_total",
            MetricName::MappingBatchesProcessed => "mapper_batches_total",
            MetricName::MappingBatchSize => "mapper_batch_size",
        }
    }
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Mapping Metrics
// ============================================================================

pub mod mapping {
    use super::MetricName;

    /// Record records that made it into the output batch
    pub fn records_mapped(source_id: &str, count: usize) {
        ::metrics::counter!(MetricName::MappingRecordsMapped.as_str(), "source_id" => source_id.to_string())
            .increment(count as u64);
    }

    /// Record a record dropped at the batch boundary
    pub fn record_skipped(source_id: &str, error_type: &str) {
        ::metrics::counter!(MetricName::MappingRecordsSkipped.as_str(),
            "source_id" => source_id.to_string(),
            "error_type" => error_type.to_string()
        )
        .increment(1);
    }

    /// Record a date field replaced by the null sentinel after a parse failure
    pub fn date_fallback(field: &'static str) {
        ::metrics::counter!(MetricName::MappingDateFallbacks.as_str(), "field" => field).increment(1);
    }

    /// Record a processed batch and its input size
    pub fn batch_processed(source_id: &str, size: usize) {
        ::metrics::counter!(MetricName::MappingBatchesProcessed.as_str(), "source_id" => source_id.to_string())
            .increment(1);
        ::metrics::histogram!(MetricName::MappingBatchSize.as_str(), "source_id" => source_id.to_string())
            .record(size as f64);
    }
}
