//! Read-only public view of a shared board, reachable without signing in.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::api::Api;
use crate::net::types::Board;

#[component]
pub fn PublicBoardPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let params = use_params_map();
    let board = RwSignal::new(None::<Board>);
    let error = RwSignal::new(None::<String>);

    let slug = move || params.with(|p| p.get("url")).unwrap_or_default();

    #[cfg(feature = "csr")]
    {
        Effect::new(move || {
            let slug = slug();
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.get_public_board(&slug).await {
                    Ok(found) => {
                        error.set(None);
                        board.set(Some(found));
                    }
                    Err(e) => error.set(Some(e.message)),
                }
            });
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = api;
    }

    view! {
        <div class="page public-board-page">
            <header class="page__header">
                <h1>{move || board.get().map_or_else(slug, |b| b.name)}</h1>
                <a class="public-board-page__signin" href="/login">"Sign in"</a>
            </header>
            <Show when=move || error.get().is_some()>
                <p class="page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <p class="public-board-page__description">
                {move || board.get().and_then(|b| b.description).unwrap_or_default()}
            </p>
        </div>
    }
}
