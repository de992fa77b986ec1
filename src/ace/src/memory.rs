//! In-memory entity resolver
//!
//! Backs tests, benches, and embedders that run without a document store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use carelink_core::error::Result;
use carelink_core::traits::{EntityQuery, EntityResolver, SortOrder};
use carelink_core::types::EntityProjection;

use crate::config::DEFAULT_MEMBER_ID_FIELD;

/// Entity store keyed by (entity name, entity id)
#[derive(Clone, Default)]
pub struct InMemoryEntityResolver {
    entities: Arc<RwLock<HashMap<(String, String), EntityProjection>>>,
}

impl InMemoryEntityResolver {
    /// Create an empty resolver
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a projection under an entity type tag
    pub async fn insert(&self, entity_name: impl Into<String>, projection: EntityProjection) {
        let mut entities = self.entities.write().await;
        entities.insert((entity_name.into(), projection.id.clone()), projection);
    }

    /// Remove a projection; returns it when present
    pub async fn remove(&self, entity_name: &str, id: &str) -> Option<EntityProjection> {
        let mut entities = self.entities.write().await;
        entities.remove(&(entity_name.to_string(), id.to_string()))
    }

    /// Number of stored projections across all entity types
    pub async fn len(&self) -> usize {
        self.entities.read().await.len()
    }

    /// True when no projections are stored
    pub async fn is_empty(&self) -> bool {
        self.entities.read().await.is_empty()
    }
}

/// Read a queryable field off a projection by name
fn field_value(projection: &EntityProjection, field: &str) -> Option<String> {
    match field {
        "id" => Some(projection.id.clone()),
        DEFAULT_MEMBER_ID_FIELD => projection.member_id.clone(),
        "orgId" => projection.org.as_ref().map(|org| org.id.clone()),
        other => projection.attributes.get(other).cloned(),
    }
}

#[async_trait]
impl EntityResolver for InMemoryEntityResolver {
    async fn get_entity_by_id(
        &self,
        entity_name: &str,
        id: &str,
    ) -> Result<Option<EntityProjection>> {
        let entities = self.entities.read().await;
        Ok(entities
            .get(&(entity_name.to_string(), id.to_string()))
            .cloned())
    }

    async fn get_entities(
        &self,
        entity_name: &str,
        query: &EntityQuery,
    ) -> Result<Vec<EntityProjection>> {
        let entities = self.entities.read().await;

        let mut matches: Vec<EntityProjection> = entities
            .iter()
            .filter(|((name, _), _)| name.as_str() == entity_name)
            .map(|(_, projection)| projection)
            .filter(|projection| {
                query
                    .filter
                    .iter()
                    .all(|(field, expected)| {
                        field_value(projection, field).as_deref() == Some(expected.as_str())
                    })
            })
            .cloned()
            .collect();

        if let Some(sort) = &query.sort {
            matches.sort_by(|a, b| {
                let left = field_value(a, &sort.field);
                let right = field_value(b, &sort.field);
                match sort.order {
                    SortOrder::Asc => left.cmp(&right),
                    SortOrder::Desc => right.cmp(&left),
                }
            });
        } else {
            matches.sort_by(|a, b| a.id.cmp(&b.id));
        }

        if let Some(limit) = query.limit {
            matches.truncate(limit);
        }

        Ok(matches)
    }
}
