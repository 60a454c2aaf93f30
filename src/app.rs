//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::hooks::use_navigate;
use leptos_router::{ParamSegment, StaticSegment};

use crate::config::ClientConfig;
use crate::nav::DASHBOARD_PATH;
use crate::net::api::Api;
use crate::pages::boards::{BoardDetailPage, BoardsPage};
use crate::pages::companies::{CompaniesPage, CompanyDetailPage};
use crate::pages::dashboard::DashboardPage;
use crate::pages::feedbacks::FeedbacksPage;
use crate::pages::issues::IssuesPage;
use crate::pages::login::LoginPage;
use crate::pages::public_board::PublicBoardPage;
use crate::pages::settings::SettingsPage;
use crate::pages::signup::SignupPage;
use crate::pages::team::TeamPage;
use crate::state::boards::BoardsState;
use crate::state::session::SessionState;
use crate::util::auth::install_route_guard;

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_env();
    let session = RwSignal::new(SessionState::restore());
    let boards = RwSignal::new(BoardsState::default());

    provide_context(session);
    provide_context(boards);
    provide_context(Api::from_config(&config));

    view! {
        <Title text="Trackboard"/>

        <Router>
            <RouteGuard>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path=DASHBOARD_PATH/> }/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=SignupPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("boards") view=BoardsPage/>
                    <Route path=(StaticSegment("boards"), ParamSegment("id")) view=BoardDetailPage/>
                    <Route path=StaticSegment("companies") view=CompaniesPage/>
                    <Route path=(StaticSegment("companies"), ParamSegment("id")) view=CompanyDetailPage/>
                    <Route path=StaticSegment("feedbacks") view=FeedbacksPage/>
                    <Route path=StaticSegment("issues") view=IssuesPage/>
                    <Route path=StaticSegment("settings") view=SettingsPage/>
                    <Route path=StaticSegment("team") view=TeamPage/>
                    <Route
                        path=(StaticSegment("public"), StaticSegment("board"), ParamSegment("url"))
                        view=PublicBoardPage
                    />
                </Routes>
            </RouteGuard>
        </Router>
    }
}

/// Renders `children` only while the navigation guard lets the current
/// location through; otherwise nothing mounts until the redirect lands.
#[component]
fn RouteGuard(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let cleared = install_route_guard(session, use_navigate());

    view! { <Show when=move || cleared.get()>{children()}</Show> }
}
