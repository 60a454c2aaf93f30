//! Route table and navigation guard.
//!
//! ARCHITECTURE
//! ============
//! `route` turns a requested location into a typed [`route::AppRoute`] and
//! its access group; `guard` combines that with the session to decide
//! whether the navigation proceeds or is redirected. Neither touches the
//! network or the DOM, so both are exercised directly by host tests.

pub mod guard;
pub mod route;

/// Where unauthenticated users are sent.
pub const LOGIN_PATH: &str = "/login";

/// Authenticated landing page.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Query parameter carrying the originally requested location.
pub const REDIRECT_PARAM: &str = "redirect";
