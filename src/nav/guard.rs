//! Navigation guard deciding each route change from the session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Installed once inside the router (see `util::auth`). Every location
//! change is passed through [`guard`]; a redirect decision replaces the
//! current history entry. The decision only reads the injected session, so
//! the backend remains the authority on what a user may actually load.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::route::{AppRoute, RouteGroup};
use super::{DASHBOARD_PATH, LOGIN_PATH, REDIRECT_PARAM};
use crate::state::session::SessionState;

/// Outcome of a navigation attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationDecision {
    /// Render the requested destination.
    Proceed,
    /// Abandon the destination and go to `path` with `query` attached.
    RedirectTo {
        path: String,
        query: Vec<(String, String)>,
    },
}

impl NavigationDecision {
    fn redirect(path: &str) -> Self {
        Self::RedirectTo {
            path: path.to_owned(),
            query: Vec::new(),
        }
    }

    pub fn is_proceed(&self) -> bool {
        matches!(self, Self::Proceed)
    }

    /// Encoded target location for a redirect, `None` when proceeding.
    pub fn location(&self) -> Option<String> {
        match self {
            Self::Proceed => None,
            Self::RedirectTo { path, query } if query.is_empty() => Some(path.clone()),
            Self::RedirectTo { path, query } => {
                let encoded = url::form_urlencoded::Serializer::new(String::new())
                    .extend_pairs(query)
                    .finish();
                Some(format!("{path}?{encoded}"))
            }
        }
    }
}

/// Decide whether navigating to `requested` may proceed.
///
/// `requested` is the full location, query included; it is attached as-is
/// to the login redirect so sign-in can return to it.
pub fn guard(requested: &str, session: &SessionState) -> NavigationDecision {
    let Some(route) = AppRoute::parse(requested) else {
        return NavigationDecision::Proceed;
    };

    let decision = match route.group() {
        RouteGroup::Auth if session.is_authenticated => NavigationDecision::redirect(DASHBOARD_PATH),
        RouteGroup::Protected if !session.is_authenticated => NavigationDecision::RedirectTo {
            path: LOGIN_PATH.to_owned(),
            query: vec![(REDIRECT_PARAM.to_owned(), requested.to_owned())],
        },
        RouteGroup::Auth | RouteGroup::Protected | RouteGroup::Public => NavigationDecision::Proceed,
    };

    if let NavigationDecision::RedirectTo { path, .. } = &decision {
        log::debug!("route guard: {requested} -> {path}");
    }
    decision
}
