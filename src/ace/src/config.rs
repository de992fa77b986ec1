//! Per-handler access-control configuration

use serde::{Deserialize, Serialize};

pub use carelink_core::types::DEFAULT_MEMBER_ID_FIELD;

/// Logical type tag of the member entity itself.
///
/// When a config names this entity, the extracted argument id *is* the
/// member id and resolution takes zero lookups.
pub const MEMBER_ENTITY_NAME: &str = "Member";

/// Logical type tag of the user directory entity (ByUser strategy)
pub const USER_ENTITY_NAME: &str = "User";

/// Decision strategy declared on a handler
///
/// A closed set dispatched by exhaustive match; adding a variant forces
/// every dispatch site to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AceStrategy {
    /// Ownership check through the target entity's owning member
    ByMember,
    /// Org-scoped check over request-supplied organization ids
    ByOrg,
    /// Read-only check against another user-directory record
    ByUser,
    /// Defer to the token layer; no entity-based check here
    ByToken,
    /// Defer to the role check alone
    Rbac,
    /// Resolver performs its own custom check
    Custom,
}

impl AceStrategy {
    /// True for the skip family: strategies that opt out of entity-based
    /// authorization at this layer and always pass
    pub fn is_skip(&self) -> bool {
        matches!(self, AceStrategy::ByToken | AceStrategy::Rbac | AceStrategy::Custom)
    }
}

/// Access-control configuration declared on a handler
///
/// Immutable once registered; supplied to the guard by the metadata
/// provider on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AceConfig {
    /// Decision strategy
    pub strategy: AceStrategy,

    /// Logical type tag of the target entity (e.g. "Member", "Journey")
    pub entity_name: String,

    /// Name of the request argument holding the target id; absent means
    /// the handler relies on another mechanism
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_locator: Option<String>,

    /// Field on the resolved entity holding its owning member id
    #[serde(default = "default_member_id_locator")]
    pub entity_member_id_locator: String,

    /// Public handlers bypass all checks
    #[serde(default)]
    pub is_public: bool,
}

fn default_member_id_locator() -> String {
    DEFAULT_MEMBER_ID_FIELD.to_string()
}

impl AceConfig {
    /// Create a config for a strategy and entity type, with the default
    /// member-id locator and no id locator
    pub fn new(strategy: AceStrategy, entity_name: impl Into<String>) -> Self {
        Self {
            strategy,
            entity_name: entity_name.into(),
            id_locator: None,
            entity_member_id_locator: default_member_id_locator(),
            is_public: false,
        }
    }

    /// Name the request argument holding the target id
    pub fn with_id_locator(mut self, locator: impl Into<String>) -> Self {
        self.id_locator = Some(locator.into());
        self
    }

    /// Override the field holding the entity's owning member id
    pub fn with_member_id_locator(mut self, locator: impl Into<String>) -> Self {
        self.entity_member_id_locator = locator.into();
        self
    }

    /// Mark the handler public
    pub fn public(mut self) -> Self {
        self.is_public = true;
        self
    }

    /// True when the config targets the member entity itself
    pub fn targets_member_entity(&self) -> bool {
        self.entity_name == MEMBER_ENTITY_NAME
    }
}
