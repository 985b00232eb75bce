// Base trait for source-specific mappers
pub mod base;

// Individual mapper implementations
pub mod ebilet;

// Re-export the main components
pub use base::EventMapper;
pub use ebilet::EbiletMapper;
