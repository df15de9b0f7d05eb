//! Static role-to-permission table.
//!
//! This table is the single authorization enforcement point: every gated
//! handler and render decision goes through [`has_permission`]. Inline role
//! comparisons outside this module are considered bugs.

use crate::roles::Role;

// Admin capabilities.
pub const PERM_READ_ALL: &str = "read_all";
pub const PERM_WRITE_ALL: &str = "write_all";
pub const PERM_APPROVE_CLAIMS: &str = "approve_claims";
pub const PERM_MANAGE_USERS: &str = "manage_users";
pub const PERM_DELETE_RECORDS: &str = "delete_records";

// Supervisor capabilities.
pub const PERM_CREATE_SITE_LOGS: &str = "create_site_logs";
pub const PERM_VIEW_PROJECTS: &str = "view_projects";
pub const PERM_VIEW_PERMITS: &str = "view_permits";
pub const PERM_READ_OWN_LOGS: &str = "read_own_logs";

// Subcontractor capabilities.
pub const PERM_SUBMIT_CLAIMS: &str = "submit_claims";
pub const PERM_READ_OWN_CLAIMS: &str = "read_own_claims";

// Shared subcontractor/client capabilities.
pub const PERM_VIEW_ASSIGNED_PROJECTS: &str = "view_assigned_projects";

// Client capabilities.
pub const PERM_VIEW_LOGS: &str = "view_logs";
pub const PERM_VIEW_PAYMENT_STATUS: &str = "view_payment_status";

/// The ordered permission set granted to a role. Compiled-in and constant
/// for the process lifetime.
pub fn permissions_for(role: Role) -> &'static [&'static str] {
    match role {
        Role::Admin => &[
            PERM_READ_ALL,
            PERM_WRITE_ALL,
            PERM_APPROVE_CLAIMS,
            PERM_MANAGE_USERS,
            PERM_DELETE_RECORDS,
        ],
        Role::Supervisor => &[
            PERM_CREATE_SITE_LOGS,
            PERM_VIEW_PROJECTS,
            PERM_VIEW_PERMITS,
            PERM_READ_OWN_LOGS,
        ],
        Role::Subcontractor => &[
            PERM_SUBMIT_CLAIMS,
            PERM_READ_OWN_CLAIMS,
            PERM_VIEW_ASSIGNED_PROJECTS,
        ],
        Role::Client => &[
            PERM_VIEW_ASSIGNED_PROJECTS,
            PERM_VIEW_LOGS,
            PERM_VIEW_PAYMENT_STATUS,
        ],
    }
}

/// Whether `role` grants `permission`.
///
/// A `None` role (unauthenticated, or unresolved after a lookup timeout)
/// is never granted anything. Unknown permission strings yield `false`.
pub fn has_permission(role: Option<Role>, permission: &str) -> bool {
    match role {
        Some(role) => permissions_for(role).contains(&permission),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::ALL_ROLES;

    #[test]
    fn test_permission_iff_in_static_set() {
        for role in ALL_ROLES {
            for perm in permissions_for(role) {
                assert!(has_permission(Some(role), perm), "{role} must have {perm}");
            }
        }
        assert!(!has_permission(Some(Role::Supervisor), PERM_APPROVE_CLAIMS));
        assert!(!has_permission(Some(Role::Client), PERM_SUBMIT_CLAIMS));
        assert!(!has_permission(Some(Role::Subcontractor), PERM_MANAGE_USERS));
    }

    #[test]
    fn test_null_role_has_nothing() {
        for role in ALL_ROLES {
            for perm in permissions_for(role) {
                assert!(!has_permission(None, perm));
            }
        }
    }

    #[test]
    fn test_unknown_permission_is_false() {
        for role in ALL_ROLES {
            assert!(!has_permission(Some(role), "launch_rockets"));
            assert!(!has_permission(Some(role), ""));
        }
    }

    #[test]
    fn test_shared_tag_spans_roles() {
        assert!(has_permission(
            Some(Role::Subcontractor),
            PERM_VIEW_ASSIGNED_PROJECTS
        ));
        assert!(has_permission(Some(Role::Client), PERM_VIEW_ASSIGNED_PROJECTS));
    }
}
