//! Settings screen with `?section=` tabs.
//!
//! Unknown or missing sections show the profile tab. The security tab hosts
//! the password change form.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::app_header::AppHeader;
use crate::components::text_field::TextField;
use crate::forms::auth::UpdatePasswordSchema;
use crate::forms::binding::FormBinding;
use crate::nav::route::{AppRoute, SettingsSection};
use crate::net::api::Api;
use crate::state::session::SessionState;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let query = use_query_map();
    let section = Memo::new(move |_| {
        query
            .with(|q| SettingsSection::from_query(q.get("section").as_deref()))
            .unwrap_or_default()
    });

    view! {
        <div class="page settings-page">
            <AppHeader/>
            <header class="page__header">
                <h1>"Settings"</h1>
            </header>
            <nav class="settings-page__tabs">
                {SettingsSection::ALL
                    .into_iter()
                    .map(|tab| {
                        let href = AppRoute::Settings { section: Some(tab) }.href();
                        view! {
                            <a
                                class="settings-page__tab"
                                class:settings-page__tab--active=move || section.get() == tab
                                href=href
                            >
                                {tab.label()}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
            <section class="settings-page__panel">
                <Show
                    when=move || section.get() == SettingsSection::Security
                    fallback=move || view! { <h2>{move || section.get().label()}</h2> }
                >
                    <UpdatePasswordForm/>
                </Show>
            </section>
        </div>
    }
}

#[component]
fn UpdatePasswordForm() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let api = expect_context::<Api>();
    let form = RwSignal::new(FormBinding::new(UpdatePasswordSchema));
    let busy = RwSignal::new(false);
    let status = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let Some(Ok(input)) = form.try_update(FormBinding::submit) else {
            return;
        };
        busy.set(true);
        status.set(None);

        #[cfg(feature = "csr")]
        {
            let api = api.authorized(session.get_untracked().token);
            leptos::task::spawn_local(async move {
                match api.update_password(&input).await {
                    Ok(()) => {
                        form.update(FormBinding::reset);
                        status.set(Some("Password updated".to_owned()));
                    }
                    Err(e) => status.set(Some(e.message)),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&api, session, input);
            busy.set(false);
        }
    };

    view! {
        <form class="settings-form" on:submit=on_submit>
            <h2>"Change password"</h2>
            <TextField form=form field="newPassword" label="New password" input_type="password"/>
            <TextField form=form field="confirmNewPassword" label="Confirm new password" input_type="password"/>
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                "Update password"
            </button>
            <Show when=move || status.get().is_some()>
                <p class="page__status">{move || status.get().unwrap_or_default()}</p>
            </Show>
        </form>
    }
}
