//! Workspace member list backed by `GET /users`.

#[cfg(test)]
#[path = "team_test.rs"]
mod team_test;

use leptos::prelude::*;

use crate::components::app_header::AppHeader;
use crate::net::api::Api;
use crate::net::types::User;
use crate::state::session::SessionState;

/// Up to two uppercase initials for the avatar placeholder.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

#[component]
pub fn TeamPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let api = expect_context::<Api>();
    let users = RwSignal::new(Vec::<User>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "csr")]
    {
        let api = api.authorized(session.get_untracked().token);
        leptos::task::spawn_local(async move {
            match api.list_users().await {
                Ok(list) => users.set(list),
                Err(e) => error.set(Some(e.message)),
            }
            loading.set(false);
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (api, session);
        loading.set(false);
    }

    view! {
        <div class="page team-page">
            <AppHeader/>
            <header class="page__header">
                <h1>"Team"</h1>
            </header>
            <Show when=move || error.get().is_some()>
                <p class="page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading members..."</p> }>
                <ul class="team-page__members">
                    <For
                        each=move || users.get()
                        key=|user| user.id
                        children=|user| {
                            let placeholder = user.avatar.is_none().then(|| initials(&user.name));
                            view! {
                                <li class="member">
                                    {user.avatar.map(|src| view! { <img class="member__avatar" src=src alt=""/> })}
                                    {placeholder
                                        .map(|text| {
                                            view! { <span class="member__avatar member__avatar--initials">{text}</span> }
                                        })}
                                    <span class="member__name">{user.name}</span>
                                    <span class="member__email">{user.email}</span>
                                    <span class="member__role">{user.role.unwrap_or_default()}</span>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}
