//! Entity resolver contract
//!
//! Stateless adapter over the document store: given an entity-type tag and
//! an id, fetch a minimal projection of that entity. The access-control
//! engine consumes this read-only; it never writes.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::Result;
use crate::types::EntityProjection;

/// Sort direction for multi-entity queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Sort specification for multi-entity queries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    /// Projected field to sort on
    pub field: String,
    /// Sort direction
    pub order: SortOrder,
}

/// Query shape for [`EntityResolver::get_entities`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityQuery {
    /// Equality filter over projected fields
    #[serde(default)]
    pub filter: HashMap<String, String>,

    /// Optional sort
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortSpec>,

    /// Optional result cap
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

impl EntityQuery {
    /// Add an equality filter on a projected field
    pub fn with_filter(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.filter.insert(field.into(), value.into());
        self
    }

    /// Sort results by a projected field
    pub fn with_sort(mut self, field: impl Into<String>, order: SortOrder) -> Self {
        self.sort = Some(SortSpec {
            field: field.into(),
            order,
        });
        self
    }

    /// Cap the number of results
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Entity resolver trait
///
/// Implementations adapt the platform's storage layer. A lookup that hits
/// a transient storage failure should surface an error; the engine treats
/// it as "not found" and fails closed.
#[async_trait]
pub trait EntityResolver: Send + Sync {
    /// Fetch one entity by type tag and id; `None` when not found
    async fn get_entity_by_id(
        &self,
        entity_name: &str,
        id: &str,
    ) -> Result<Option<EntityProjection>>;

    /// Fetch entities of a type matching a query (filter/sort/limit)
    async fn get_entities(
        &self,
        entity_name: &str,
        query: &EntityQuery,
    ) -> Result<Vec<EntityProjection>>;
}
