//! ByMember strategy: ownership through the target entity's owning member
//!
//! Members may only act on themselves; non-admin staff may act on members
//! whose organization they are provisioned for.

use serde_json::Value;
use tracing::{debug, warn};

use carelink_core::types::{is_object_id, Caller, MemberId};
use carelink_core::EntityResolver;

use crate::config::{AceConfig, MEMBER_ENTITY_NAME};

/// Decide whether the caller may touch the member-linked entity named by
/// the config and request arguments.
///
/// `config = None` means the handler declared no ACE config: resolution
/// yields no member id, which permits a member caller (self-scope default)
/// and denies staff (fail-closed).
pub async fn by_member(
    resolver: &dyn EntityResolver,
    caller: &Caller,
    config: Option<&AceConfig>,
    args: &Value,
) -> bool {
    let member_id = resolve_member_id(resolver, config, args).await;

    if caller.is_member() {
        // A request without explicit targeting is scoped to self elsewhere.
        return match &member_id {
            None => true,
            Some(id) => *id == caller.id,
        };
    }

    // Staff, non-admin tier: the member's org must be provisioned.
    let Some(member_id) = member_id else {
        warn!(
            caller = %caller.id,
            "no member id resolved for staff caller; denying (fail-closed)"
        );
        return false;
    };

    if !is_object_id(&member_id) {
        debug!(%member_id, "resolved member id is not a valid object id; denying");
        return false;
    }

    match resolver.get_entity_by_id(MEMBER_ENTITY_NAME, &member_id).await {
        Ok(Some(member)) => match member.org {
            Some(org) => caller.provisioned_org_ids.contains(&org.id),
            None => {
                debug!(%member_id, "member has no owning org; denying");
                false
            }
        },
        Ok(None) => {
            debug!(%member_id, "member not found; denying");
            false
        }
        Err(e) => {
            warn!(%member_id, error = %e, "member lookup failed; denying");
            false
        }
    }
}

/// Resolve the affected member id from the config and raw arguments.
///
/// Zero lookups when the config targets the member entity itself, exactly
/// one when it targets a member-linked entity. The chain is one hop by
/// design; configs needing deeper indirection must point at a
/// member-linked entity directly.
pub async fn resolve_member_id(
    resolver: &dyn EntityResolver,
    config: Option<&AceConfig>,
    args: &Value,
) -> Option<MemberId> {
    let config = config?;
    let locator = config.id_locator.as_deref()?;
    let raw_id = extract_id(args, locator)?;

    if config.targets_member_entity() {
        return Some(raw_id);
    }

    match resolver.get_entity_by_id(&config.entity_name, &raw_id).await {
        Ok(Some(entity)) => entity.member_id_at(&config.entity_member_id_locator),
        Ok(None) => {
            debug!(entity = %config.entity_name, id = %raw_id, "entity not found");
            None
        }
        Err(e) => {
            warn!(entity = %config.entity_name, id = %raw_id, error = %e, "entity lookup failed");
            None
        }
    }
}

/// Extract the raw target id from the argument bag.
///
/// Supports both call shapes uniformly: a flat bag (exactly one key) reads
/// `args[locator]` directly; a multi-key bag reads
/// `args[first_param][locator]` for the nested input-object shape, where
/// the first param is the handler's first declared parameter (argument
/// bags preserve insertion order). Bare scalars and arrays carry no
/// named id.
pub(crate) fn extract_id(args: &Value, locator: &str) -> Option<String> {
    let bag = args.as_object()?;

    let slot = if bag.len() == 1 {
        bag.get(locator)
    } else {
        bag.values().next().and_then(|first| first.get(locator))
    };

    slot.and_then(Value::as_str).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_id_flat_shape() {
        let args = json!({"memberId": "m1"});
        assert_eq!(extract_id(&args, "memberId"), Some("m1".to_string()));
        assert_eq!(extract_id(&args, "journeyId"), None);
    }

    #[test]
    fn test_extract_id_nested_shape() {
        let args = json!({
            "updateJourneyParams": {"journeyId": "j1", "title": "x"},
            "dryRun": true
        });
        assert_eq!(extract_id(&args, "journeyId"), Some("j1".to_string()));
    }

    #[test]
    fn test_extract_id_bare_values() {
        assert_eq!(extract_id(&json!("m1"), "memberId"), None);
        assert_eq!(extract_id(&json!(["m1", "m2"]), "memberId"), None);
        assert_eq!(extract_id(&Value::Null, "memberId"), None);
    }

    #[test]
    fn test_extract_id_non_string_value() {
        let args = json!({"memberId": 42});
        assert_eq!(extract_id(&args, "memberId"), None);
    }
}
