//! Role-filtered navigation.
//!
//! The desktop sidebar and the mobile bottom bar each carry their own static,
//! ordered entry list. [`visible_entries`] is a pure function of an entry
//! list and the current role; the server returns the filtered lists so
//! clients never duplicate the gating logic.

use serde::Serialize;

use crate::roles::Role;

/// Hard cap on mobile bottom-bar entries.
pub const MOBILE_NAV_MAX_ITEMS: usize = 5;

/// One navigation entry. `icon` is the client-side icon identifier.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct NavEntry {
    pub title: &'static str,
    pub path: &'static str,
    pub icon: &'static str,
    pub roles: &'static [Role],
}

/// Desktop sidebar entries, in render order.
pub const SIDEBAR_NAV: &[NavEntry] = &[
    NavEntry {
        title: "Dashboard",
        path: "/",
        icon: "layout-dashboard",
        roles: &[Role::Admin, Role::Supervisor],
    },
    NavEntry {
        title: "Projects",
        path: "/projects",
        icon: "folder-kanban",
        roles: &[Role::Admin, Role::Supervisor],
    },
    NavEntry {
        title: "Permits",
        path: "/permits",
        icon: "file-warning",
        roles: &[Role::Admin, Role::Supervisor],
    },
    NavEntry {
        title: "Analytics",
        path: "/admin",
        icon: "bar-chart-3",
        roles: &[Role::Admin],
    },
    NavEntry {
        title: "User Management",
        path: "/admin/users",
        icon: "user-circle",
        roles: &[Role::Admin],
    },
    NavEntry {
        title: "Claims Management",
        path: "/claims",
        icon: "banknote",
        roles: &[Role::Admin],
    },
    NavEntry {
        title: "My Claims Portal",
        path: "/subcontractor",
        icon: "user-circle",
        roles: &[Role::Subcontractor],
    },
    NavEntry {
        title: "Project Progress",
        path: "/client",
        icon: "eye",
        roles: &[Role::Client],
    },
];

/// Mobile bottom-bar entries, in render order.
pub const BOTTOM_NAV: &[NavEntry] = &[
    NavEntry {
        title: "Home",
        path: "/",
        icon: "layout-dashboard",
        roles: &[Role::Admin, Role::Supervisor],
    },
    NavEntry {
        title: "Projects",
        path: "/projects",
        icon: "folder-kanban",
        roles: &[Role::Admin, Role::Supervisor, Role::Subcontractor],
    },
    NavEntry {
        title: "Permits",
        path: "/permits",
        icon: "file-warning",
        roles: &[Role::Admin, Role::Supervisor],
    },
    NavEntry {
        title: "Claims",
        path: "/claims",
        icon: "banknote",
        roles: &[Role::Admin],
    },
    NavEntry {
        title: "My Claims",
        path: "/subcontractor",
        icon: "user-circle",
        roles: &[Role::Subcontractor],
    },
    NavEntry {
        title: "Progress",
        path: "/client",
        icon: "eye",
        roles: &[Role::Client],
    },
];

/// Filter `entries` down to those visible to `role`, preserving source order.
///
/// No role means no navigation at all (hidden, not disabled).
pub fn visible_entries(role: Option<Role>, entries: &'static [NavEntry]) -> Vec<&'static NavEntry> {
    let Some(role) = role else {
        return Vec::new();
    };
    entries
        .iter()
        .filter(|entry| entry.roles.contains(&role))
        .collect()
}

/// The mobile bottom-bar list for `role`, capped at [`MOBILE_NAV_MAX_ITEMS`].
pub fn mobile_entries(role: Option<Role>) -> Vec<&'static NavEntry> {
    let mut entries = visible_entries(role, BOTTOM_NAV);
    entries.truncate(MOBILE_NAV_MAX_ITEMS);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_role_hides_navigation() {
        assert!(visible_entries(None, SIDEBAR_NAV).is_empty());
        assert!(mobile_entries(None).is_empty());
    }

    #[test]
    fn test_entries_preserve_source_order() {
        let titles: Vec<_> = visible_entries(Some(Role::Admin), SIDEBAR_NAV)
            .iter()
            .map(|e| e.title)
            .collect();
        assert_eq!(
            titles,
            vec![
                "Dashboard",
                "Projects",
                "Permits",
                "Analytics",
                "User Management",
                "Claims Management",
            ]
        );
    }

    #[test]
    fn test_membership_is_exact() {
        for role in crate::roles::ALL_ROLES {
            for entry in visible_entries(Some(role), SIDEBAR_NAV) {
                assert!(entry.roles.contains(&role));
            }
            let visible: Vec<_> = visible_entries(Some(role), SIDEBAR_NAV)
                .iter()
                .map(|e| e.path)
                .collect();
            for entry in SIDEBAR_NAV {
                assert_eq!(entry.roles.contains(&role), visible.contains(&entry.path));
            }
        }
    }

    #[test]
    fn test_mobile_list_is_capped() {
        for role in crate::roles::ALL_ROLES {
            assert!(mobile_entries(Some(role)).len() <= MOBILE_NAV_MAX_ITEMS);
        }
    }

    #[test]
    fn test_single_entry_roles() {
        let client: Vec<_> = mobile_entries(Some(Role::Client))
            .iter()
            .map(|e| e.path)
            .collect();
        assert_eq!(client, vec!["/client"]);

        let sub: Vec<_> = mobile_entries(Some(Role::Subcontractor))
            .iter()
            .map(|e| e.path)
            .collect();
        assert_eq!(sub, vec!["/projects", "/subcontractor"]);
    }
}
