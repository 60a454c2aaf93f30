//! Top navigation bar shared by every protected page.

#[cfg(test)]
#[path = "app_header_test.rs"]
mod app_header_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::nav::LOGIN_PATH;
use crate::nav::route::AppRoute;
use crate::state::session::SessionState;
use crate::util::auth::sign_out;

/// Links shown in the header, in display order.
pub fn nav_links() -> Vec<(&'static str, AppRoute)> {
    vec![
        ("Dashboard", AppRoute::Dashboard),
        ("Boards", AppRoute::Boards),
        ("Companies", AppRoute::Companies),
        ("Feedbacks", AppRoute::Feedbacks),
        ("Issues", AppRoute::Issues),
        ("Team", AppRoute::Team),
        ("Settings", AppRoute::Settings { section: None }),
    ]
}

/// Whether the link to `href` should be highlighted at `pathname`.
pub fn is_active(href: &str, pathname: &str) -> bool {
    pathname == href || pathname.strip_prefix(href).is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn AppHeader() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    let on_logout = move |_| {
        sign_out(session);
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <header class="app-header toolbar">
            <span class="app-header__brand">"Trackboard"</span>
            <nav class="app-header__nav">
                {nav_links()
                    .into_iter()
                    .map(|(label, route)| {
                        let href = route.href();
                        let active_href = href.clone();
                        view! {
                            <a
                                class="app-header__link"
                                class:app-header__link--active=move || {
                                    is_active(&active_href, &pathname.get())
                                }
                                href=href
                            >
                                {label}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
            <span class="toolbar__spacer"></span>
            <button class="btn app-header__logout" on:click=on_logout title="Logout">
                "Logout"
            </button>
        </header>
    }
}
