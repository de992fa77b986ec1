//! Per-request decision context

use serde::{Deserialize, Serialize};

use carelink_core::types::{Caller, HandlerId, OrgId};

/// Transport the request arrived on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    /// Trusted service-to-service channel; pre-authorized elsewhere
    Internal,
    /// External client-facing channel
    External,
}

/// Everything the guard needs from one incoming request
///
/// Built per call from already-authenticated context; discarded after the
/// decision. `org_ids` is the one mutable slot: the ByOrg strategy
/// populates it with the caller's provisioned orgs when the request
/// supplies none.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Transport the request arrived on
    pub transport: Transport,

    /// Authenticated principal
    pub caller: Caller,

    /// Handler the request targets
    pub handler: HandlerId,

    /// Raw request arguments (flat or nested input-object shape)
    pub args: serde_json::Value,

    /// Organization ids supplied on org-scoped operations
    pub org_ids: Vec<OrgId>,
}

impl RequestContext {
    /// Create an external-transport context with empty arguments
    pub fn new(caller: Caller, handler: impl Into<HandlerId>) -> Self {
        Self {
            transport: Transport::External,
            caller,
            handler: handler.into(),
            args: serde_json::Value::Null,
            org_ids: Vec::new(),
        }
    }

    /// Set the raw request arguments
    pub fn with_args(mut self, args: serde_json::Value) -> Self {
        self.args = args;
        self
    }

    /// Set the supplied organization ids
    pub fn with_org_ids(mut self, org_ids: Vec<OrgId>) -> Self {
        self.org_ids = org_ids;
        self
    }

    /// Mark the request as arriving on the internal trusted channel
    pub fn internal(mut self) -> Self {
        self.transport = Transport::Internal;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carelink_core::types::Role;
    use serde_json::json;

    #[test]
    fn test_context_defaults() {
        let caller = Caller::new("u1").with_role(Role::Coach);
        let ctx = RequestContext::new(caller, "getMember");

        assert_eq!(ctx.transport, Transport::External);
        assert!(ctx.args.is_null());
        assert!(ctx.org_ids.is_empty());

        let internal = RequestContext::new(Caller::new("svc"), "syncJourneys")
            .with_args(json!({"memberId": "m1"}))
            .internal();
        assert_eq!(internal.transport, Transport::Internal);
    }
}
