//! # Carelink ACE Engine
//!
//! Per-request authorization for the Carelink platform: combines
//! role-based bypasses with ownership checks that may resolve indirect
//! relationships between a target entity, a member record, and an
//! organization.
//!
//! ## Features
//!
//! - **Single boolean decisions** from [`AceGuard::can_activate`] (denial
//!   is never an error)
//! - **Fail-closed resolution** for unresolved member ids, missing
//!   entities, and resolver failures
//! - **Closed strategy set** ([`AceStrategy`]) dispatched by exhaustive
//!   match, no string tags
//! - **Static handler registry** built at startup, no runtime reflection
//! - **Stateless checks** with no shared mutable state across requests
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use carelink_ace::{
//!     AceConfig, AceGuard, AceStrategy, Caller, HandlerMeta, HandlerRegistry,
//!     InMemoryEntityResolver, RequestContext, Role, MEMBER_ENTITY_NAME,
//! };
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() {
//!     let registry = HandlerRegistry::new().with_handler(
//!         "getMember",
//!         HandlerMeta::new().with_ace(
//!             AceConfig::new(AceStrategy::ByMember, MEMBER_ENTITY_NAME)
//!                 .with_id_locator("memberId"),
//!         ),
//!     );
//!
//!     let resolver = InMemoryEntityResolver::new();
//!     let guard = AceGuard::new(Arc::new(registry), Arc::new(resolver));
//!
//!     let caller = Caller::new("m1").with_role(Role::Member);
//!     let mut ctx = RequestContext::new(caller, "getMember")
//!         .with_args(json!({ "memberId": "m1" }));
//!
//!     assert!(guard.can_activate(&mut ctx).await);
//! }
//! ```

pub mod config;
pub mod context;
pub mod guard;
pub mod memory;
pub mod metrics;
pub mod registry;
pub mod strategy;

// Re-export the shared platform types the engine's API surfaces
pub use carelink_core::error::{AceError, Result};
pub use carelink_core::traits::{EntityQuery, EntityResolver, SortOrder};
pub use carelink_core::types::{Caller, EntityProjection, OrgRef, Role};

// Re-export commonly used types
pub use config::{
    AceConfig, AceStrategy, DEFAULT_MEMBER_ID_FIELD, MEMBER_ENTITY_NAME, USER_ENTITY_NAME,
};
pub use context::{RequestContext, Transport};
pub use guard::AceGuard;
pub use memory::InMemoryEntityResolver;
pub use metrics::{DecisionMetrics, MetricsCollector};
pub use registry::{HandlerMeta, HandlerRegistry, MetadataProvider};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
