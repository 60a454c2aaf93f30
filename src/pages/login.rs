//! Login page with email + password sign-in.
//!
//! SYSTEM CONTEXT
//! ==============
//! On success the page only records the session; the route guard then moves
//! the user off the auth screen, back to the `redirect` target if present.

use leptos::prelude::*;

use crate::components::text_field::TextField;
use crate::forms::auth::LoginSchema;
use crate::forms::binding::FormBinding;
use crate::net::api::Api;
use crate::state::session::SessionState;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let api = expect_context::<Api>();
    let form = RwSignal::new(FormBinding::new(LoginSchema));
    let busy = RwSignal::new(false);
    let request_error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let Some(Ok(input)) = form.try_update(FormBinding::submit) else {
            return;
        };
        busy.set(true);
        request_error.set(None);

        #[cfg(feature = "csr")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.login(&input).await {
                    Ok(issued) => crate::util::auth::sign_in(session, issued.token),
                    Err(e) => request_error.set(Some(e.message)),
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
        <div class="login-page">
            <div class="login-card">
                <h1>"Trackboard"</h1>
                <p class="login-card__subtitle">"Sign in to your workspace"</p>
                <form class="login-form" on:submit=on_submit>
                    <TextField form=form field="email" label="Email" input_type="email" placeholder="you@example.com"/>
                    <TextField form=form field="password" label="Password" input_type="password"/>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <Show when=move || request_error.get().is_some()>
                    <p class="login-message login-message--error">
                        {move || request_error.get().unwrap_or_default()}
                    </p>
                </Show>
                <p class="login-card__footer">
                    "No account yet? "
                    <a href="/signup">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
