//! Issue tracker screen.

use leptos::prelude::*;

use crate::components::app_header::AppHeader;

#[component]
pub fn IssuesPage() -> impl IntoView {
    view! {
        <div class="page issues-page">
            <AppHeader/>
            <header class="page__header">
                <h1>"Issues"</h1>
            </header>
            <p class="page__empty">"No open issues."</p>
        </div>
    }
}
