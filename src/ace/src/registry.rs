//! Handler metadata registry
//!
//! The platform attaches a [`HandlerMeta`] to each handler at registration
//! time, building an explicit map from handler identity to configuration.
//! The guard reads it through the [`MetadataProvider`] trait so embedders
//! can substitute their own source.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use carelink_core::types::{Caller, HandlerId, Role};

use crate::config::AceConfig;

/// Per-handler declarations: public flag, required roles, ACE config
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlerMeta {
    /// Public handlers bypass authorization entirely
    #[serde(default)]
    pub is_public: bool,

    /// Roles the RBAC layer requires before the ACE check runs; empty
    /// means any authenticated caller
    #[serde(default)]
    pub roles: Vec<Role>,

    /// Entity-based access-control configuration, when declared
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ace: Option<AceConfig>,
}

impl HandlerMeta {
    /// Create empty metadata (non-public, no role requirement, no ACE)
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the handler public
    pub fn public(mut self) -> Self {
        self.is_public = true;
        self
    }

    /// Require a role
    pub fn with_role(mut self, role: Role) -> Self {
        self.roles.push(role);
        self
    }

    /// Attach an ACE config
    pub fn with_ace(mut self, ace: AceConfig) -> Self {
        self.ace = Some(ace);
        self
    }

    /// True when either the handler or its ACE config is declared public
    pub fn is_public(&self) -> bool {
        self.is_public || self.ace.as_ref().map(|a| a.is_public).unwrap_or(false)
    }

    /// RBAC pre-check applied by the framework before the ACE guard runs
    pub fn permits_roles(&self, caller: &Caller) -> bool {
        self.roles.is_empty() || self.roles.iter().any(|r| caller.roles.contains(r))
    }
}

/// Metadata provider consumed by the guard, resolved once per call
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Fetch the metadata declared for a handler; `None` when the handler
    /// was never registered
    async fn get(&self, handler: &str) -> Option<HandlerMeta>;
}

/// Statically-built handler registry
///
/// Populated at startup from route declarations, read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct HandlerRegistry {
    handlers: HashMap<HandlerId, HandlerMeta>,
}

impl HandlerRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler's metadata, builder style
    pub fn with_handler(mut self, handler: impl Into<HandlerId>, meta: HandlerMeta) -> Self {
        self.handlers.insert(handler.into(), meta);
        self
    }

    /// Register a handler's metadata
    pub fn insert(&mut self, handler: impl Into<HandlerId>, meta: HandlerMeta) {
        self.handlers.insert(handler.into(), meta);
    }

    /// Number of registered handlers
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// True when no handlers are registered
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

#[async_trait]
impl MetadataProvider for HandlerRegistry {
    async fn get(&self, handler: &str) -> Option<HandlerMeta> {
        self.handlers.get(handler).cloned()
    }
}
