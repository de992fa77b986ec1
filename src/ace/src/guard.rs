//! Decision orchestrator
//!
//! The single entry point framework code calls before executing a
//! handler. Reads caller identity and handler metadata, applies the
//! bypass rules, then dispatches to the declared strategy. Produces one
//! boolean; denial is `false`, never an error.

use std::sync::Arc;

use tracing::{debug, info, warn};

use carelink_core::EntityResolver;

use crate::config::AceStrategy;
use crate::context::{RequestContext, Transport};
use crate::metrics::{Bypass, DecisionMetrics, MetricsCollector};
use crate::registry::{HandlerMeta, MetadataProvider};
use crate::strategy;
use crate::strategy::by_member::extract_id;

/// Access-control guard
///
/// Stateless across requests: every check is evaluated fresh against the
/// metadata provider and entity resolver it was built with. Performs no
/// writes; at most two resolver reads per decision.
pub struct AceGuard {
    /// Per-handler metadata source
    metadata: Arc<dyn MetadataProvider>,

    /// Entity projection source
    resolver: Arc<dyn EntityResolver>,

    /// Decision counters
    metrics: MetricsCollector,
}

impl AceGuard {
    /// Create a guard over a metadata provider and an entity resolver
    pub fn new(metadata: Arc<dyn MetadataProvider>, resolver: Arc<dyn EntityResolver>) -> Self {
        Self {
            metadata,
            resolver,
            metrics: MetricsCollector::new(),
        }
    }

    /// Snapshot the guard's decision counters
    pub async fn metrics(&self) -> DecisionMetrics {
        self.metrics.snapshot().await
    }

    /// Decide whether the request may proceed.
    ///
    /// Strict short-circuit order: internal channel, public handler,
    /// admin-tier caller, then the declared strategy. Resolver failures
    /// degrade to "not found" and deny; no error crosses this boundary.
    pub async fn can_activate(&self, ctx: &mut RequestContext) -> bool {
        // Internal calls are pre-authorized elsewhere.
        if ctx.transport == Transport::Internal {
            debug!(handler = %ctx.handler, "internal channel; bypassing");
            self.metrics.record_bypass(Bypass::Internal).await;
            self.metrics.record_decision(true).await;
            return true;
        }

        let meta = match self.metadata.get(&ctx.handler).await {
            Some(meta) => meta,
            None => {
                warn!(handler = %ctx.handler, "handler has no registered metadata");
                HandlerMeta::new()
            }
        };

        if meta.is_public() {
            debug!(handler = %ctx.handler, "public handler; bypassing");
            self.metrics.record_bypass(Bypass::Public).await;
            self.metrics.record_decision(true).await;
            return true;
        }

        // Absolute bypass, evaluated before any entity resolution.
        if ctx.caller.is_admin_tier() {
            debug!(handler = %ctx.handler, caller = %ctx.caller.id, "admin-tier caller; bypassing");
            self.metrics.record_bypass(Bypass::AdminTier).await;
            self.metrics.record_decision(true).await;
            return true;
        }

        let allowed = self.dispatch(ctx, &meta).await;

        info!(
            handler = %ctx.handler,
            caller = %ctx.caller.id,
            allowed,
            "access decision"
        );
        self.metrics.record_decision(allowed).await;
        allowed
    }

    /// Execute the strategy the handler declared
    async fn dispatch(&self, ctx: &mut RequestContext, meta: &HandlerMeta) -> bool {
        let Some(config) = &meta.ace else {
            // Missing ACE config on a non-public handler: members fall
            // back to self-scope, staff are denied fail-closed.
            if ctx.caller.is_member() {
                return true;
            }
            warn!(
                handler = %ctx.handler,
                "non-public handler without ACE config; denying staff caller (fail-closed)"
            );
            self.metrics.record_unresolved_denial().await;
            return false;
        };

        match config.strategy {
            AceStrategy::ByMember => {
                strategy::by_member(self.resolver.as_ref(), &ctx.caller, Some(config), &ctx.args)
                    .await
            }
            AceStrategy::ByOrg => strategy::by_org(&ctx.caller, &mut ctx.org_ids),
            AceStrategy::ByUser => {
                let Some(locator) = config.id_locator.as_deref() else {
                    warn!(handler = %ctx.handler, "byUser config without id locator; denying");
                    return false;
                };
                let Some(user_id) = extract_id(&ctx.args, locator) else {
                    debug!(handler = %ctx.handler, "no target user id in arguments; denying");
                    return false;
                };
                strategy::by_user(self.resolver.as_ref(), &ctx.caller, &user_id).await
            }
            // Skip family: the handler opted out of entity-based
            // authorization at this layer.
            AceStrategy::ByToken | AceStrategy::Rbac | AceStrategy::Custom => true,
        }
    }
}
