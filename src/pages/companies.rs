//! Company list and company detail screens.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::app_header::AppHeader;

#[component]
pub fn CompaniesPage() -> impl IntoView {
    view! {
        <div class="page companies-page">
            <AppHeader/>
            <header class="page__header">
                <h1>"Companies"</h1>
            </header>
            <p class="page__empty">"Companies linked to your feedback will appear here."</p>
        </div>
    }
}

#[component]
pub fn CompanyDetailPage() -> impl IntoView {
    let params = use_params_map();
    let company_id = move || params.with(|p| p.get("id")).unwrap_or_default();

    view! {
        <div class="page company-detail-page">
            <AppHeader/>
            <header class="page__header">
                <h1>{move || format!("Company {}", company_id())}</h1>
            </header>
            <p class="page__empty">"No activity recorded for this company yet."</p>
        </div>
    }
}
