use tracing::warn;

use super::base::EventMapper;
use crate::constants::{
    EBILET_BASE_SITE, EBILET_MEDIA_BASE, EBILET_SOURCE, EBILET_SOURCE_LABEL, NULL_SENTINEL,
    UNKNOWN_ARTIST, UNKNOWN_CITY, UNKNOWN_PLACE,
};
use crate::error::Result;
use crate::mapping::fields::{
    ensure_object, nested_text_or, present_text, required_text, string_list,
};
use crate::mapping::{dates, tags, urls};
use crate::metrics;
use crate::types::{NormalizedEvent, RawRecord};

const PLACE_FIELD: &str = "nextEventPlace";

// Joined in this order before tag normalization
const TAG_FIELDS: [&str; 3] = ["subcategoryName", "category", "subcategory"];

/// Mapper for eBilet (ebilet.pl) event listings
pub struct EbiletMapper {
    base_site: String,
    media_base: String,
}

impl EbiletMapper {
    pub fn new() -> Self {
        Self::with_base_urls(EBILET_BASE_SITE, EBILET_MEDIA_BASE)
    }

    /// Mapper that builds links and thumbnails under other hosts
    pub fn with_base_urls(base_site: impl Into<String>, media_base: impl Into<String>) -> Self {
        Self {
            base_site: base_site.into(),
            media_base: media_base.into(),
        }
    }

    /// Epoch seconds for a date field, or the null sentinel.
    ///
    /// Field-level failures fall back; anything else fails the record.
    fn epoch_or_null(&self, record: &RawRecord, field: &'static str) -> Result<String> {
        let Some(raw) = present_text(record, field) else {
            return Ok(NULL_SENTINEL.to_string());
        };

        match dates::to_epoch_seconds(&raw) {
            Ok(epoch) => Ok(epoch),
            Err(e) if e.is_field_level() => {
                warn!(adapter = self.name(), field, value = %raw, error = %e, "Invalid date format");
                metrics::mapping::date_fallback(field);
                Ok(NULL_SENTINEL.to_string())
            }
            Err(e) => Err(e),
        }
    }
}

impl Default for EbiletMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl EventMapper for EbiletMapper {
    fn map_event(&self, record: &RawRecord) -> Result<NormalizedEvent> {
        ensure_object(record)?;

        let event_name = required_text(record, "title")?;

        let artists = match string_list(record, "artists")? {
            Some(names) => names.join(", "),
            None => UNKNOWN_ARTIST.to_string(),
        };

        let start_date = self.epoch_or_null(record, "dateFrom")?;
        let end_date = self.epoch_or_null(record, "dateTo")?;

        let thumbnail = format!("{}{}", self.media_base, required_text(record, "imageLandscape")?);
        let url = urls::resolve_url(record, &self.base_site)?;

        let location = nested_text_or(record, PLACE_FIELD, "city", UNKNOWN_CITY);
        let place = nested_text_or(record, PLACE_FIELD, "customName", UNKNOWN_PLACE);

        let category = required_text(record, "categoryName")?;

        let tag_source = TAG_FIELDS
            .iter()
            .filter_map(|field| present_text(record, field))
            .collect::<Vec<_>>()
            .join(", ");
        let tags = tags::normalize_tags(tag_source.as_str());

        let description = required_text(record, "metaDescription")?;

        Ok(NormalizedEvent {
            event_name,
            artists,
            start_date,
            end_date,
            thumbnail,
            url,
            location,
            place,
            category,
            tags,
            description,
            source: EBILET_SOURCE_LABEL.to_string(),
        })
    }

    fn source_id(&self) -> &str {
        EBILET_SOURCE
    }

    fn name(&self) -> &str {
        "eBilet Event Mapper"
    }
}
