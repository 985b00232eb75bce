//! Source identifiers and fixed values shared across mappers

// Source ids (used in CLI and registry lookups)
pub const EBILET_SOURCE: &str = "ebilet";

// Value written to the `source` field of every eBilet event
pub const EBILET_SOURCE_LABEL: &str = "eBilet";

pub const EBILET_BASE_SITE: &str = "https://www.ebilet.pl/";
pub const EBILET_MEDIA_BASE: &str = "https://www.ebilet.pl/media";

// Sentinel fallbacks
pub const NULL_SENTINEL: &str = "null";
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";
pub const UNKNOWN_CITY: &str = "Unknown City";
pub const UNKNOWN_PLACE: &str = "Unknown Place";

