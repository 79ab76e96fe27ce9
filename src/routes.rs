//! Route paths and their access requirements.
//!
//! SYSTEM CONTEXT
//! ==============
//! `access_for` is the requirement table the route gate consults on every
//! navigation. `app::App` registers a view for each path listed here.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

pub const LANDING: &str = "/";
pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const AUTH_CALLBACK: &str = "/auth/callback";
pub const DASHBOARD: &str = "/dashboard";
pub const ANALYSIS: &str = "/analysis";
pub const PERFORMANCE: &str = "/performance";
pub const CALCULATOR: &str = "/calculator";
pub const ALERTS: &str = "/alerts";
pub const SUBSCRIPTION: &str = "/subscription";
pub const SUBSCRIPTION_SUCCESS: &str = "/subscription/success";
pub const SETTINGS: &str = "/settings";
pub const INSIGHTS: &str = "/insights";
pub const ADMIN: &str = "/admin";

/// What a visitor needs before a view may render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Anyone.
    Public,
    /// Only visitors who are not signed in (login, registration).
    GuestOnly,
    Authenticated,
    /// Premium or admin.
    Premium,
    Admin,
}

/// Access requirement for `path`, or `None` for an unknown path.
///
/// Query strings, fragments and a trailing slash are ignored.
pub fn access_for(path: &str) -> Option<Access> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let path = match path.trim_end_matches('/') {
        "" => LANDING,
        trimmed => trimmed,
    };

    let access = match path {
        LANDING | AUTH_CALLBACK => Access::Public,
        LOGIN | REGISTER => Access::GuestOnly,
        DASHBOARD | ANALYSIS | PERFORMANCE | CALCULATOR | ALERTS | SUBSCRIPTION | SUBSCRIPTION_SUCCESS
        | SETTINGS => Access::Authenticated,
        INSIGHTS => Access::Premium,
        ADMIN => Access::Admin,
        other => {
            let pair = other.strip_prefix("/analysis/")?;
            if pair.is_empty() || pair.contains('/') {
                return None;
            }
            Access::Authenticated
        }
    };
    Some(access)
}
