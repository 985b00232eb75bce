use crate::error::Result;
use crate::mapping::batch;
use crate::types::{BatchReport, NormalizedEvent, RawRecord};

/// Contract shared by all source-specific mappers
pub trait EventMapper: Send + Sync {
    /// Map one raw record into the uniform schema
    fn map_event(&self, record: &RawRecord) -> Result<NormalizedEvent>;

    /// Get the source ID this mapper handles
    fn source_id(&self) -> &str;

    /// Get a human-readable name for this mapper
    fn name(&self) -> &str;

    /// Map a batch, dropping records that fail
    fn map_batch(&self, records: &[RawRecord]) -> Vec<NormalizedEvent> {
        batch::map_batch(self, records)
    }

    /// Map a batch and keep track of what was dropped
    fn map_batch_with_report(&self, records: &[RawRecord]) -> BatchReport {
        batch::map_batch_with_report(self, records)
    }
}
