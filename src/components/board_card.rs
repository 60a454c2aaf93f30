//! Reusable card component for board list items.
//!
//! DESIGN
//! ======
//! Keeps board presentation consistent between the boards list and the
//! dashboard while centralizing the detail and public-link affordances.

use leptos::prelude::*;

use crate::nav::route::AppRoute;
use crate::net::types::Board;

/// A clickable card representing a board.
#[component]
pub fn BoardCard(board: Board) -> impl IntoView {
    let href = AppRoute::Board {
        id: board.id.to_string(),
    }
    .href();
    let public_href = board.url.map(|url| AppRoute::PublicBoard { url }.href());

    view! {
        <a class="board-card" href=href>
            <span class="board-card__name">{board.name}</span>
            {board
                .description
                .map(|text| view! { <span class="board-card__description">{text}</span> })}
            {public_href
                .map(|href| {
                    view! {
                        <span class="board-card__public" title=href>
                            "Public"
                        </span>
                    }
                })}
        </a>
    }
}
