//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route guard is installed once inside `<Router>` so every page gets
//! the same redirect behaviour. It wraps the route outlet, so a location the
//! guard rejects is never rendered. Sign-in and sign-out go through the helpers
//! here so the session signal and its persisted copy never diverge.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_location;

use crate::nav::guard::guard;
use crate::nav::route::{post_login_target, query_param, split_location};
use crate::nav::{DASHBOARD_PATH, REDIRECT_PARAM};
use crate::state::session::SessionState;

/// Re-run the route guard on every location or session change.
///
/// Returns whether the current location may render. Callers gate the route
/// outlet on it so a rejected page never mounts; the effect then replaces
/// the rejected history entry with the redirect target.
pub fn install_route_guard<F>(session: RwSignal<SessionState>, navigate: F) -> Memo<bool>
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let location = use_location();
    let (pathname, search) = (location.pathname, location.search);
    let target = Memo::new(move |_| {
        let requested = requested_location(&pathname.get(), &search.get());
        redirect_target(&requested, &session.get())
    });
    Effect::new(move || {
        if let Some(target) = target.get() {
            navigate(
                &target,
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });
    Memo::new(move |_| target.with(Option::is_none))
}

/// Where the guard sends a navigation to `requested`, if anywhere.
///
/// Signing in on an auth screen makes the guard bounce the user to the
/// dashboard; when that screen carries a `redirect` parameter the user goes
/// back to the page that originally sent them to sign in instead.
pub fn redirect_target(requested: &str, session: &SessionState) -> Option<String> {
    let target = guard(requested, session).location()?;
    if target == DASHBOARD_PATH {
        let (_, query) = split_location(requested);
        if let Some(back) = query_param(query, REDIRECT_PARAM) {
            return Some(post_login_target(Some(&back)));
        }
    }
    Some(target)
}

/// Rebuild the full requested location from router parts.
pub fn requested_location(pathname: &str, search: &str) -> String {
    let search = search.trim_start_matches('?');
    if search.is_empty() {
        pathname.to_owned()
    } else {
        format!("{pathname}?{search}")
    }
}

/// Record a freshly issued token and persist it.
pub fn sign_in(session: RwSignal<SessionState>, token: String) {
    session.update(|s| s.login(token));
    session.with_untracked(SessionState::persist);
}

/// Drop the session and its persisted copy.
pub fn sign_out(session: RwSignal<SessionState>) {
    session.update(SessionState::logout);
    session.with_untracked(SessionState::persist);
}
