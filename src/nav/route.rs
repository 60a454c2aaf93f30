//! Typed route table for every client-side destination.
//!
//! DESIGN
//! ======
//! Routes are grouped by who may see them: `Auth` screens are for signed-out
//! users, `Protected` screens need a session, `Public` screens are open to
//! everyone. The Leptos `<Routes>` declaration in `app` mirrors this table.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

use std::fmt;
use std::str::FromStr;

use super::DASHBOARD_PATH;

/// Access group of a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteGroup {
    Auth,
    Protected,
    Public,
}

/// Tabs of the settings screen, selected with `?section=`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SettingsSection {
    #[default]
    Profile,
    Security,
    Notifications,
    General,
    Team,
    Integrations,
    Plans,
}

impl SettingsSection {
    pub const ALL: [Self; 7] = [
        Self::Profile,
        Self::Security,
        Self::Notifications,
        Self::General,
        Self::Team,
        Self::Integrations,
        Self::Plans,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::Security => "security",
            Self::Notifications => "notifications",
            Self::General => "general",
            Self::Team => "team",
            Self::Integrations => "integrations",
            Self::Plans => "plans",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Profile => "Profile",
            Self::Security => "Security",
            Self::Notifications => "Notifications",
            Self::General => "General",
            Self::Team => "Team",
            Self::Integrations => "Integrations",
            Self::Plans => "Plans",
        }
    }

    /// Read the `section` query value; unknown values count as absent.
    pub fn from_query(raw: Option<&str>) -> Option<Self> {
        raw.and_then(|value| value.parse().ok())
    }
}

/// Error for a `section` value outside the known set.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown settings section: {0}")]
pub struct UnknownSection(pub String);

impl FromStr for SettingsSection {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_owned()))
    }
}

/// Every destination the client knows how to render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Login,
    Signup,
    Dashboard,
    Boards,
    Board { id: String },
    Companies,
    Company { id: String },
    Feedbacks,
    Issues,
    Settings { section: Option<SettingsSection> },
    Team,
    PublicBoard { url: String },
}

impl AppRoute {
    /// Match a location (`/path` with optional `?query`) against the table.
    ///
    /// Trailing slashes are ignored. Returns `None` for unknown paths.
    pub fn parse(location: &str) -> Option<Self> {
        let (path, query) = split_location(location);
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let route = match segments.as_slice() {
            ["login"] => Self::Login,
            ["signup"] => Self::Signup,
            ["dashboard"] => Self::Dashboard,
            ["boards"] => Self::Boards,
            ["boards", id] => Self::Board { id: (*id).to_owned() },
            ["companies"] => Self::Companies,
            ["companies", id] => Self::Company { id: (*id).to_owned() },
            ["feedbacks"] => Self::Feedbacks,
            ["issues"] => Self::Issues,
            ["settings"] => Self::Settings {
                section: SettingsSection::from_query(query_param(query, "section").as_deref()),
            },
            ["team"] => Self::Team,
            ["public", "board", url] => Self::PublicBoard { url: (*url).to_owned() },
            _ => return None,
        };
        Some(route)
    }

    pub fn group(&self) -> RouteGroup {
        match self {
            Self::Login | Self::Signup => RouteGroup::Auth,
            Self::PublicBoard { .. } => RouteGroup::Public,
            Self::Dashboard
            | Self::Boards
            | Self::Board { .. }
            | Self::Companies
            | Self::Company { .. }
            | Self::Feedbacks
            | Self::Issues
            | Self::Settings { .. }
            | Self::Team => RouteGroup::Protected,
        }
    }

    /// Canonical location for links.
    pub fn href(&self) -> String {
        match self {
            Self::Login => "/login".to_owned(),
            Self::Signup => "/signup".to_owned(),
            Self::Dashboard => DASHBOARD_PATH.to_owned(),
            Self::Boards => "/boards".to_owned(),
            Self::Board { id } => format!("/boards/{id}"),
            Self::Companies => "/companies".to_owned(),
            Self::Company { id } => format!("/companies/{id}"),
            Self::Feedbacks => "/feedbacks".to_owned(),
            Self::Issues => "/issues".to_owned(),
            Self::Settings { section: None } => "/settings".to_owned(),
            Self::Settings { section: Some(section) } => format!("/settings?section={}", section.as_str()),
            Self::Team => "/team".to_owned(),
            Self::PublicBoard { url } => format!("/public/board/{url}"),
        }
    }
}

impl fmt::Display for AppRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}

/// Split `"/a/b?x=1"` into `("/a/b", "x=1")`.
pub fn split_location(location: &str) -> (&str, &str) {
    location.split_once('?').unwrap_or((location, ""))
}

/// First decoded value of `key` in a raw query string.
pub fn query_param(query: &str, key: &str) -> Option<String> {
    url::form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

/// Where to land after signing in, given the `redirect` query value.
///
/// Only same-origin absolute paths are honoured; anything else, including
/// protocol-relative `//host` values, falls back to the dashboard.
pub fn post_login_target(redirect: Option<&str>) -> String {
    match redirect {
        Some(path) if path.starts_with('/') && !path.starts_with("//") && !path.starts_with("/\\") => {
            path.to_owned()
        }
        _ => DASHBOARD_PATH.to_owned(),
    }
}
