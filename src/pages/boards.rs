//! Board list (with create form) and board detail (with edit form).
//!
//! SYSTEM CONTEXT
//! ==============
//! Both pages share the `BoardsState` context so a board created or renamed
//! here shows up on the dashboard without another round trip.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::app_header::AppHeader;
use crate::components::board_card::BoardCard;
use crate::components::text_field::TextField;
use crate::forms::binding::FormBinding;
use crate::forms::board::{CreateBoardSchema, UpdateBoardSchema};
use crate::net::api::Api;
use crate::net::types::Board;
use crate::state::boards::BoardsState;
use crate::state::session::SessionState;

/// Fetch `/boards` into the shared list state.
pub(crate) fn load_boards(api: &Api, session: RwSignal<SessionState>, boards: RwSignal<BoardsState>) {
    boards.update(BoardsState::begin_load);
    #[cfg(feature = "csr")]
    {
        let api = api.authorized(session.get_untracked().token);
        leptos::task::spawn_local(async move {
            let result = api.list_boards().await.map_err(|e| e.message);
            boards.update(|s| s.finish_load(result));
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (api, session);
        boards.update(|s| s.finish_load(Ok(Vec::new())));
    }
}

#[component]
pub fn BoardsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let boards = expect_context::<RwSignal<BoardsState>>();
    let api = expect_context::<Api>();

    load_boards(&api, session, boards);

    let show_create = RwSignal::new(false);
    let form = RwSignal::new(FormBinding::new(CreateBoardSchema));
    let busy = RwSignal::new(false);
    let request_error = RwSignal::new(None::<String>);

    let on_create = move |_| {
        form.update(FormBinding::reset);
        request_error.set(None);
        show_create.set(true);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let Some(Ok(input)) = form.try_update(FormBinding::submit) else {
            return;
        };
        busy.set(true);

        #[cfg(feature = "csr")]
        {
            let api = api.authorized(session.get_untracked().token);
            leptos::task::spawn_local(async move {
                match api.create_board(&input).await {
                    Ok(board) => {
                        boards.update(|s| s.upsert(board));
                        show_create.set(false);
                    }
                    Err(e) => request_error.set(Some(e.message)),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = input;
            busy.set(false);
        }
    };

    view! {
        <div class="page boards-page">
            <AppHeader/>
            <header class="page__header">
                <h1>"Boards"</h1>
                <button class="btn" on:click=on_create>"+ New Board"</button>
            </header>

            <Show when=move || show_create.get()>
                <form class="dialog board-form" on:submit=on_submit>
                    <TextField form=form field="name" label="Board name" placeholder="Sprint 1"/>
                    <TextField form=form field="description" label="Description" optional=true/>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| show_create.set(false)>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            "Create"
                        </button>
                    </div>
                    <Show when=move || request_error.get().is_some()>
                        <p class="page__error">{move || request_error.get().unwrap_or_default()}</p>
                    </Show>
                </form>
            </Show>

            <Show when=move || boards.get().error.is_some()>
                <p class="page__error">{move || boards.get().error.unwrap_or_default()}</p>
            </Show>
            <Show when=move || !boards.get().loading fallback=|| view! { <p>"Loading boards..."</p> }>
                <div class="boards-page__cards">
                    <For
                        each=move || boards.get().items
                        key=|board| board.id
                        children=|board| view! { <BoardCard board=board/> }
                    />
                </div>
            </Show>
        </div>
    }
}

#[component]
pub fn BoardDetailPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let boards = expect_context::<RwSignal<BoardsState>>();
    let api = expect_context::<Api>();
    let params = use_params_map();

    let board = RwSignal::new(None::<Board>);
    let load_error = RwSignal::new(None::<String>);
    let form = RwSignal::new(FormBinding::new(UpdateBoardSchema));
    let busy = RwSignal::new(false);
    let status = RwSignal::new(None::<String>);

    let board_id = move || params.with(|p| p.get("id")).unwrap_or_default();

    #[cfg(feature = "csr")]
    {
        let api = api.clone();
        Effect::new(move || {
            let id = board_id();
            let api = api.authorized(session.get_untracked().token);
            leptos::task::spawn_local(async move {
                match api.get_board(&id).await {
                    Ok(found) => {
                        load_error.set(None);
                        board.set(Some(found));
                    }
                    Err(e) => load_error.set(Some(e.message)),
                }
            });
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let Some(Ok(patch)) = form.try_update(FormBinding::submit) else {
            return;
        };
        busy.set(true);
        status.set(None);

        #[cfg(feature = "csr")]
        {
            let api = api.authorized(session.get_untracked().token);
            let id = board_id();
            leptos::task::spawn_local(async move {
                match api.update_board(&id, &patch).await {
                    Ok(updated) => {
                        boards.update(|s| s.upsert(updated.clone()));
                        board.set(Some(updated));
                        form.update(FormBinding::reset);
                        status.set(Some("Saved".to_owned()));
                    }
                    Err(e) => status.set(Some(e.message)),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&api, session, boards, patch);
            busy.set(false);
        }
    };

    view! {
        <div class="page board-detail-page">
            <AppHeader/>
            <Show when=move || load_error.get().is_some()>
                <p class="page__error">{move || load_error.get().unwrap_or_default()}</p>
            </Show>
            <header class="page__header">
                <h1>{move || board.get().map_or_else(|| format!("Board {}", board_id()), |b| b.name)}</h1>
            </header>
            <p class="board-detail-page__description">
                {move || board.get().and_then(|b| b.description).unwrap_or_default()}
            </p>
            <form class="board-form" on:submit=on_submit>
                <TextField form=form field="name" label="Rename" optional=true/>
                <TextField form=form field="description" label="Description" optional=true/>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Save changes"
                </button>
                <Show when=move || status.get().is_some()>
                    <p class="page__status">{move || status.get().unwrap_or_default()}</p>
                </Show>
            </form>
        </div>
    }
}
