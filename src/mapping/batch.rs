use tracing::{error, info};

use super::fields::present_text;
use super::mappers::EventMapper;
use crate::metrics;
use crate::types::{BatchReport, NormalizedEvent, RawRecord, RecordFailure};

/// Map every record, keeping only the ones that succeed, in input order
pub fn map_batch<M: EventMapper + ?Sized>(mapper: &M, records: &[RawRecord]) -> Vec<NormalizedEvent> {
    map_batch_with_report(mapper, records).events
}

/// Map every record and report the failures alongside the surviving events.
///
/// A failing record is logged and skipped; the batch itself never fails.
pub fn map_batch_with_report<M: EventMapper + ?Sized>(mapper: &M, records: &[RawRecord]) -> BatchReport {
    let source_id = mapper.source_id();
    info!(
        adapter = mapper.name(),
        source_id,
        total = records.len(),
        "Starting to map events"
    );

    let mut report = BatchReport {
        events: Vec::with_capacity(records.len()),
        failures: Vec::new(),
    };

    for (index, record) in records.iter().enumerate() {
        match mapper.map_event(record) {
            Ok(event) => report.events.push(event),
            Err(e) => {
                let record_id = record_identifier(record, index);
                error!(
                    adapter = mapper.name(),
                    source_id,
                    record_id = %record_id,
                    record = %record,
                    error_type = e.kind(),
                    error = %e,
                    "Error mapping event"
                );
                metrics::mapping::record_skipped(source_id, e.kind());
                report.failures.push(RecordFailure {
                    index,
                    record_id,
                    error: e.to_string(),
                });
            }
        }
    }

    metrics::mapping::records_mapped(source_id, report.events.len());
    metrics::mapping::batch_processed(source_id, records.len());

    info!(
        adapter = mapper.name(),
        source_id,
        total = records.len(),
        mapped = report.events.len(),
        skipped = report.failures.len(),
        "Finished mapping events"
    );

    report
}

/// Best-effort identifier for diagnostics: `id`, then `slug`, then position
pub fn record_identifier(record: &RawRecord, index: usize) -> String {
    present_text(record, "id")
        .or_else(|| present_text(record, "slug"))
        .map(|id| id.into_owned())
        .unwrap_or_else(|| format!("#{index}"))
}
