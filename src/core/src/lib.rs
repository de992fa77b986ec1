//! # Carelink Core
//!
//! Shared types, traits, and error handling for the Carelink platform.
//! This package holds the domain model the access-control engine and the
//! platform's resolver layers both depend on.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{AceError, Result};
pub use traits::{EntityQuery, EntityResolver, SortOrder};
pub use types::{Caller, EntityProjection, OrgRef, Role};

// Identifier aliases shared across the platform
pub use types::{EntityId, HandlerId, MemberId, OrgId};
