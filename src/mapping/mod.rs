//! Per-record mapping from raw source records to the uniform event schema.

pub mod batch;
pub mod dates;
pub mod fields;
pub mod mappers;
pub mod registry;
pub mod tags;
pub mod urls;

pub use batch::{map_batch, map_batch_with_report};
pub use mappers::{EbiletMapper, EventMapper};
pub use registry::MapperRegistry;
