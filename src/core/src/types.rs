//! Core domain types for authorization decisions

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Member identifier (document-store object id)
pub type MemberId = String;

/// Organization identifier
pub type OrgId = String;

/// Generic entity identifier
pub type EntityId = String;

/// Handler identifier (GraphQL resolver / route name)
pub type HandlerId = String;

/// Default field name holding an entity's owning member id.
///
/// Kept as an explicit constant so the one-hop resolution chain stays
/// auditable; configs that omit `entity_member_id_locator` read this field.
pub const DEFAULT_MEMBER_ID_FIELD: &str = "memberId";

/// Checks whether a string is a syntactically valid document-store object
/// id (24 hexadecimal characters).
pub fn is_object_id(id: &str) -> bool {
    id.len() == 24 && id.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Caller role
///
/// Two disjoint families: staff roles (internal operators) and the member
/// role (the end-user being cared for). `Admin` is the highest staff tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    /// End-user being cared for
    Member,
    /// Staff: care coach
    Coach,
    /// Staff: clinical nurse
    Nurse,
    /// Staff: platform administrator (highest tier)
    Admin,
}

impl Role {
    /// True for any role in the staff family
    pub fn is_staff(&self) -> bool {
        !matches!(self, Role::Member)
    }

    /// True for the highest-privilege staff tier
    pub fn is_admin_tier(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

/// Authenticated principal making the request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Caller {
    /// Caller identifier
    pub id: String,

    /// Assigned roles; a caller always has at least one role family
    pub roles: HashSet<Role>,

    /// Organizations this caller is provisioned to operate on
    #[serde(default)]
    pub provisioned_org_ids: Vec<OrgId>,
}

impl Caller {
    /// Create a new caller with no roles or provisioned orgs
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            roles: HashSet::new(),
            provisioned_org_ids: Vec::new(),
        }
    }

    /// Add a role to the caller
    pub fn with_role(mut self, role: Role) -> Self {
        self.roles.insert(role);
        self
    }

    /// Add a provisioned organization
    pub fn with_org(mut self, org_id: impl Into<OrgId>) -> Self {
        self.provisioned_org_ids.push(org_id.into());
        self
    }

    /// True iff the member role is present
    pub fn is_member(&self) -> bool {
        self.roles.contains(&Role::Member)
    }

    /// True iff any assigned role is in the highest staff tier
    pub fn is_admin_tier(&self) -> bool {
        self.roles.iter().any(Role::is_admin_tier)
    }
}

/// Reference to an organization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgRef {
    /// Organization identifier
    pub id: OrgId,
}

impl OrgRef {
    pub fn new(id: impl Into<OrgId>) -> Self {
        Self { id: id.into() }
    }
}

/// Minimal projection of a stored entity, as returned by an
/// [`EntityResolver`](crate::traits::EntityResolver)
///
/// Not all fields are populated for all entity types; a missing field
/// means "unknown", never "empty".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityProjection {
    /// Entity identifier
    pub id: EntityId,

    /// Owning member, when the entity is member-linked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_id: Option<MemberId>,

    /// Owning organization, when projected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org: Option<OrgRef>,

    /// Roles held by the entity (populated for user-directory entities)
    #[serde(default)]
    pub roles: Vec<Role>,

    /// Organizations the entity belongs to (populated for user-directory
    /// entities)
    #[serde(default)]
    pub org_ids: Vec<OrgId>,

    /// Additional projected fields, keyed by field name; alternate
    /// member-id locators read from here
    #[serde(default)]
    pub attributes: HashMap<String, String>,
}

impl EntityProjection {
    /// Create a projection with only the id populated
    pub fn new(id: impl Into<EntityId>) -> Self {
        Self {
            id: id.into(),
            member_id: None,
            org: None,
            roles: Vec::new(),
            org_ids: Vec::new(),
            attributes: HashMap::new(),
        }
    }

    /// Set the owning member id
    pub fn with_member_id(mut self, member_id: impl Into<MemberId>) -> Self {
        self.member_id = Some(member_id.into());
        self
    }

    /// Set the owning organization
    pub fn with_org(mut self, org_id: impl Into<OrgId>) -> Self {
        self.org = Some(OrgRef::new(org_id));
        self
    }

    /// Add a role (user-directory projections)
    pub fn with_role(mut self, role: Role) -> Self {
        self.roles.push(role);
        self
    }

    /// Add an organization membership (user-directory projections)
    pub fn with_org_membership(mut self, org_id: impl Into<OrgId>) -> Self {
        self.org_ids.push(org_id.into());
        self
    }

    /// Add a projected field
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Read the owning member id through a configured locator.
    ///
    /// The default locator reads the typed `member_id` field; any other
    /// locator reads the projected attribute of that name.
    pub fn member_id_at(&self, locator: &str) -> Option<MemberId> {
        if locator == DEFAULT_MEMBER_ID_FIELD {
            self.member_id.clone()
        } else {
            self.attributes.get(locator).cloned()
        }
    }

    /// True iff the entity holds any admin-tier role
    pub fn is_admin_tier(&self) -> bool {
        self.roles.iter().any(Role::is_admin_tier)
    }
}
