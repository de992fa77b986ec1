//! ByUser strategy: read-only queries about other users
//!
//! Intended for queries only, never mutations (a usage constraint on the
//! declaring handler, not enforced here).

use tracing::{debug, warn};

use carelink_core::types::Caller;
use carelink_core::EntityResolver;

use crate::config::USER_ENTITY_NAME;

/// Decide whether the caller may read the user-directory record `user_id`.
///
/// Admin-tier users are visible to any staff caller; otherwise the caller
/// and target must share at least one organization.
pub async fn by_user(resolver: &dyn EntityResolver, caller: &Caller, user_id: &str) -> bool {
    let user = match resolver.get_entity_by_id(USER_ENTITY_NAME, user_id).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            debug!(%user_id, "target user not found; denying");
            return false;
        }
        Err(e) => {
            warn!(%user_id, error = %e, "user lookup failed; denying");
            return false;
        }
    };

    // The staff directory is visible to other staff.
    if user.is_admin_tier() && !caller.is_member() {
        return true;
    }

    user.org_ids
        .iter()
        .any(|org| caller.provisioned_org_ids.contains(org))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryEntityResolver;
    use carelink_core::types::{EntityProjection, Role};

    async fn directory() -> InMemoryEntityResolver {
        let resolver = InMemoryEntityResolver::new();
        resolver
            .insert(
                USER_ENTITY_NAME,
                EntityProjection::new("admin-1").with_role(Role::Admin),
            )
            .await;
        resolver
            .insert(
                USER_ENTITY_NAME,
                EntityProjection::new("coach-1")
                    .with_role(Role::Coach)
                    .with_org_membership("org-a"),
            )
            .await;
        resolver
    }

    #[tokio::test]
    async fn test_admin_target_visible_to_staff() {
        let resolver = directory().await;
        let staff = Caller::new("u1").with_role(Role::Nurse); // no shared org
        assert!(by_user(&resolver, &staff, "admin-1").await);
    }

    #[tokio::test]
    async fn test_admin_target_not_visible_to_member_without_overlap() {
        let resolver = directory().await;
        let member = Caller::new("m1").with_role(Role::Member);
        assert!(!by_user(&resolver, &member, "admin-1").await);
    }

    #[tokio::test]
    async fn test_org_overlap_required_for_non_admin_target() {
        let resolver = directory().await;

        let provisioned = Caller::new("u2").with_role(Role::Coach).with_org("org-a");
        assert!(by_user(&resolver, &provisioned, "coach-1").await);

        let elsewhere = Caller::new("u3").with_role(Role::Coach).with_org("org-b");
        assert!(!by_user(&resolver, &elsewhere, "coach-1").await);
    }

    #[tokio::test]
    async fn test_unknown_user_denies() {
        let resolver = directory().await;
        let staff = Caller::new("u1").with_role(Role::Coach).with_org("org-a");
        assert!(!by_user(&resolver, &staff, "ghost").await);
    }
}
