//! Role-aware navigation entries for the member shell.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::routes;
use crate::state::auth::Roles;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub path: &'static str,
    pub label: &'static str,
}

const MEMBER_LINKS: [NavLink; 5] = [
    NavLink { path: routes::DASHBOARD, label: "Signals" },
    NavLink { path: routes::ANALYSIS, label: "Analysis" },
    NavLink { path: routes::PERFORMANCE, label: "Performance" },
    NavLink { path: routes::CALCULATOR, label: "Risk Calculator" },
    NavLink { path: routes::ALERTS, label: "Alerts" },
];

const ADMIN_LINK: NavLink = NavLink { path: routes::ADMIN, label: "Admin Panel" };

/// Links shown in the header; the admin panel only for admins.
pub fn nav_links(roles: Roles) -> Vec<NavLink> {
    let mut links = MEMBER_LINKS.to_vec();
    if roles.admin {
        links.push(ADMIN_LINK);
    }
    links
}

pub fn tier_label(roles: Roles) -> &'static str {
    if roles.admin {
        "Admin"
    } else if roles.premium {
        "Pro"
    } else {
        "Free"
    }
}

pub fn shows_upgrade(roles: Roles) -> bool {
    roles.authenticated && !roles.premium
}

/// Whether `link` should be highlighted for `pathname`.
pub fn is_active(link: NavLink, pathname: &str) -> bool {
    pathname == link.path || pathname.strip_prefix(link.path).is_some_and(|rest| rest.starts_with('/'))
}
