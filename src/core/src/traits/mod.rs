//! Shared traits for the Carelink platform

pub mod resolver;

// Re-export commonly used traits
pub use resolver::{EntityQuery, EntityResolver, SortOrder, SortSpec};
