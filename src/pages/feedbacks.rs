//! Feedback inbox screen.

use leptos::prelude::*;

use crate::components::app_header::AppHeader;

#[component]
pub fn FeedbacksPage() -> impl IntoView {
    view! {
        <div class="page feedbacks-page">
            <AppHeader/>
            <header class="page__header">
                <h1>"Feedbacks"</h1>
            </header>
            <p class="page__empty">"Feedback submitted on your public boards shows up here."</p>
        </div>
    }
}
