//! Sign-up page, optionally redeeming a workspace invitation.
//!
//! An invitation link carries `?token=...`; it is copied into the form's
//! hidden `token` field so the backend can attach the new account.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::text_field::TextField;
use crate::forms::auth::SignupSchema;
use crate::forms::binding::FormBinding;
use crate::net::api::Api;
use crate::state::session::SessionState;

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let api = expect_context::<Api>();
    let query = use_query_map();
    let form = RwSignal::new(FormBinding::new(SignupSchema));
    let busy = RwSignal::new(false);
    let request_error = RwSignal::new(None::<String>);

    let invitation = query.with_untracked(|q| q.get("token")).filter(|t| !t.is_empty());
    let invited = invitation.is_some();
    if let Some(token) = invitation {
        form.update(|f| f.set("token", token));
    }

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
                match api.signup(&input).await {
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
                <h1>"Create your account"</h1>
                <Show when=move || invited>
                    <p class="login-card__subtitle">"You have been invited to join a workspace."</p>
                </Show>
                <form class="login-form" on:submit=on_submit>
                    <TextField form=form field="email" label="Email" input_type="email" placeholder="you@example.com"/>
                    <TextField form=form field="name" label="Name"/>
                    <TextField form=form field="password" label="Password" input_type="password"/>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Sign up" }}
                    </button>
                </form>
                <Show when=move || request_error.get().is_some()>
                    <p class="login-message login-message--error">
                        {move || request_error.get().unwrap_or_default()}
                    </p>
                </Show>
                <p class="login-card__footer">
                    "Already registered? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
