use std::collections::HashMap;

use super::mappers::{EbiletMapper, EventMapper};
use crate::constants::EBILET_SOURCE;
use crate::error::{MapperError, Result};
use crate::types::{BatchReport, NormalizedEvent, RawRecord};

/// Registry of source-specific mappers keyed by source id
pub struct MapperRegistry {
    mappers: HashMap<String, Box<dyn EventMapper>>,
}

impl MapperRegistry {
    /// Create a registry with the built-in mappers
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(EBILET_SOURCE, Box::new(EbiletMapper::new()));
        registry
    }

    /// Create a registry with no mappers
    pub fn empty() -> Self {
        Self {
            mappers: HashMap::new(),
        }
    }

    /// Register a mapper for a specific source, replacing any previous one
    pub fn register(&mut self, source_id: impl Into<String>, mapper: Box<dyn EventMapper>) {
        self.mappers.insert(source_id.into(), mapper);
    }

    /// Get the mapper for a source
    pub fn get_mapper(&self, source_id: &str) -> Option<&dyn EventMapper> {
        self.mappers.get(source_id).map(|m| m.as_ref())
    }

    /// Map a batch with the mapper registered for `source_id`
    pub fn map_batch(&self, source_id: &str, records: &[RawRecord]) -> Result<Vec<NormalizedEvent>> {
        Ok(self.lookup(source_id)?.map_batch(records))
    }

    /// Same as [`map_batch`](Self::map_batch), keeping the failure report
    pub fn map_batch_with_report(&self, source_id: &str, records: &[RawRecord]) -> Result<BatchReport> {
        Ok(self.lookup(source_id)?.map_batch_with_report(records))
    }

    /// List all registered source IDs, sorted
    pub fn list_sources(&self) -> Vec<&str> {
        let mut sources: Vec<&str> = self.mappers.keys().map(|k| k.as_str()).collect();
        sources.sort_unstable();
        sources
    }

    fn lookup(&self, source_id: &str) -> Result<&dyn EventMapper> {
        self.get_mapper(source_id)
            .ok_or_else(|| MapperError::UnknownSource(source_id.to_string()))
    }
}

impl Default for MapperRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_registry_has_built_in_mappers() {
        let registry = MapperRegistry::new();
        assert_eq!(registry.list_sources(), vec!["ebilet"]);

        let mapper = registry.get_mapper("ebilet").unwrap();
        assert_eq!(mapper.source_id(), "ebilet");
    }

    #[test]
    fn test_registry_returns_error_for_unknown_source() {
        let registry = MapperRegistry::new();
        let records = vec![json!({"title": "Test Event"})];

        let result = registry.map_batch("unknown_source", &records);
        assert!(matches!(result, Err(MapperError::UnknownSource(id)) if id == "unknown_source"));
    }

    #[test]
    fn test_register_under_alias() {
        let mut registry = MapperRegistry::empty();
        assert!(registry.list_sources().is_empty());

        registry.register("ebilet_staging", Box::new(EbiletMapper::new()));
        assert!(registry.get_mapper("ebilet_staging").is_some());
        assert!(registry.get_mapper("ebilet").is_none());
    }

    #[test]
    fn test_map_batch_through_registry_drops_bad_records() {
        let registry = MapperRegistry::new();
        let records = vec![json!({"id": "no-title"})];

        let report = registry.map_batch_with_report("ebilet", &records).unwrap();
        assert!(report.events.is_empty());
        assert_eq!(report.failures[0].record_id, "no-title");
    }
}
