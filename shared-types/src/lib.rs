pub mod extraction;
pub mod format;
pub mod record;

pub use format::SourceFormat;
pub use record::ExtractedRecord;

// Re-export extraction types
pub use extraction::*;
