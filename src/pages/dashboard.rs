//! Dashboard landing page with workspace summary metrics.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It reuses the shared board list
//! and fetches the member list once to fill the metric cards.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::app_header::AppHeader;
use crate::components::board_card::BoardCard;
use crate::components::metric_card::MetricCard;
use crate::net::api::Api;
use crate::net::types::Board;
use crate::pages::boards::load_boards;
use crate::state::boards::BoardsState;
use crate::state::session::SessionState;

/// Boards shown in the "recent" strip.
const RECENT_BOARDS: usize = 4;

/// Number of boards that have a public link.
pub fn public_board_count(boards: &[Board]) -> usize {
    boards.iter().filter(|b| b.url.is_some()).count()
}

/// Most recently listed boards, newest first; the backend lists oldest first.
pub fn recent_boards(boards: &[Board]) -> Vec<Board> {
    boards.iter().rev().take(RECENT_BOARDS).cloned().collect()
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let boards = expect_context::<RwSignal<BoardsState>>();
    let api = expect_context::<Api>();
    let member_count = RwSignal::new(None::<usize>);

    if !boards.get_untracked().loaded {
        load_boards(&api, session, boards);
    }

    #[cfg(feature = "csr")]
    {
        let api = api.authorized(session.get_untracked().token);
        leptos::task::spawn_local(async move {
            if let Ok(users) = api.list_users().await {
                member_count.set(Some(users.len()));
            }
        });
    }

    let board_total = Signal::derive(move || boards.with(|s| s.items.len()).to_string());
    let public_total = Signal::derive(move || boards.with(|s| public_board_count(&s.items)).to_string());
    let members = Signal::derive(move || member_count.get().map_or_else(|| "–".to_owned(), |n| n.to_string()));

    view! {
        <div class="page dashboard-page">
            <AppHeader/>
            <header class="page__header">
                <h1>"Dashboard"</h1>
            </header>
            <section class="dashboard-page__metrics">
                <MetricCard label="Boards" value=board_total/>
                <MetricCard label="Public boards" value=public_total/>
                <MetricCard label="Members" value=members/>
            </section>
            <section class="dashboard-page__recent">
                <h2>"Recent boards"</h2>
                <Show when=move || boards.get().error.is_some()>
                    <p class="page__error">{move || boards.get().error.unwrap_or_default()}</p>
                </Show>
                <div class="dashboard-page__cards">
                    <For
                        each=move || boards.with(|s| recent_boards(&s.items))
                        key=|board| board.id
                        children=|board| view! { <BoardCard board=board/> }
                    />
                </div>
            </section>
        </div>
    }
}
