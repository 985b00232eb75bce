//! Normalizes raw ticketing-source event records into a uniform event schema.

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod mapping;
pub mod metrics;
pub mod types;

pub use error::{MapperError, Result};
pub use mapping::{EbiletMapper, EventMapper, MapperRegistry};
pub use types::{BatchReport, NormalizedEvent, RawRecord, RecordFailure};
