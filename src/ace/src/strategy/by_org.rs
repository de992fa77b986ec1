//! ByOrg strategy: org-scoped operations
//!
//! The request carries zero or more organization ids rather than an
//! entity id. Supplying none defaults the operation to the caller's own
//! provisioned orgs.

use std::collections::HashSet;

use tracing::debug;

use carelink_core::types::{Caller, OrgId};

/// Decide whether the caller may run an org-scoped operation over
/// `org_ids`, populating them with the caller's provisioned orgs when the
/// request supplied none.
///
/// Set semantics are order-independent: a member caller must supply
/// exactly their provisioned set; a staff caller may supply any subset of
/// theirs.
pub fn by_org(caller: &Caller, org_ids: &mut Vec<OrgId>) -> bool {
    if org_ids.is_empty() {
        debug!(caller = %caller.id, "no org ids supplied; defaulting to caller's provisioned orgs");
        org_ids.extend(caller.provisioned_org_ids.iter().cloned());
        return true;
    }

    let supplied: HashSet<&str> = org_ids.iter().map(String::as_str).collect();
    let provisioned: HashSet<&str> = caller
        .provisioned_org_ids
        .iter()
        .map(String::as_str)
        .collect();

    if caller.is_member() {
        supplied == provisioned
    } else {
        supplied.is_subset(&provisioned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carelink_core::types::Role;

    fn staff(orgs: &[&str]) -> Caller {
        let mut caller = Caller::new("u1").with_role(Role::Coach);
        for org in orgs {
            caller = caller.with_org(*org);
        }
        caller
    }

    fn member(orgs: &[&str]) -> Caller {
        let mut caller = Caller::new("m1").with_role(Role::Member);
        for org in orgs {
            caller = caller.with_org(*org);
        }
        caller
    }

    #[test]
    fn test_empty_supplied_populates_provisioned() {
        let caller = staff(&["org-a", "org-b"]);
        let mut org_ids = Vec::new();

        assert!(by_org(&caller, &mut org_ids));
        assert_eq!(org_ids, vec!["org-a", "org-b"]);

        // idempotent: a second empty call populates the same set
        let mut again = Vec::new();
        assert!(by_org(&caller, &mut again));
        assert_eq!(again, org_ids);
    }

    #[test]
    fn test_member_requires_exact_set() {
        let caller = member(&["org-a", "org-b"]);

        let mut exact_reordered = vec!["org-b".to_string(), "org-a".to_string()];
        assert!(by_org(&caller, &mut exact_reordered));

        let mut subset = vec!["org-a".to_string()];
        assert!(!by_org(&caller, &mut subset));

        let mut superset = vec!["org-a".to_string(), "org-b".to_string(), "org-c".to_string()];
        assert!(!by_org(&caller, &mut superset));
    }

    #[test]
    fn test_staff_requires_subset() {
        let caller = staff(&["org-a", "org-b"]);

        let mut subset = vec!["org-a".to_string()];
        assert!(by_org(&caller, &mut subset));

        let mut full = vec!["org-b".to_string(), "org-a".to_string()];
        assert!(by_org(&caller, &mut full));

        let mut foreign = vec!["org-a".to_string(), "org-z".to_string()];
        assert!(!by_org(&caller, &mut foreign));
    }

    #[test]
    fn test_unprovisioned_caller() {
        let caller = staff(&[]);
        let mut empty = Vec::new();
        assert!(by_org(&caller, &mut empty));
        assert!(empty.is_empty());

        let mut supplied = vec!["org-a".to_string()];
        assert!(!by_org(&caller, &mut supplied));
    }
}
