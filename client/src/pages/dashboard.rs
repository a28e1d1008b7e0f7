//! Authenticated landing page with the user-management panels.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders nothing but a status line until `AuthSession::resolve` settles.
//! Settling without a user sends the browser back to `/login`.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::batch_import::BatchImport;
use crate::components::generate_users::GenerateUsers;
use crate::components::navbar::Navbar;
use crate::components::profile_card::ProfileCard;
use crate::components::user_search::UserSearch;
use crate::net::client::ApiClient;
use crate::state::auth::{AuthPhase, AuthState};
use crate::state::search::search_visible;
use crate::util::auth::{install_route_guard, install_unauth_redirect};
use crate::util::guard::DASHBOARD_PATH;

/// Placeholder text shown while the dashboard cannot render.
pub fn status_text(state: &AuthState) -> &'static str {
    match state.phase() {
        AuthPhase::Loading => "Loading...",
        AuthPhase::Unauthenticated => "Redirecting to login...",
        AuthPhase::Authenticated => "",
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_route_guard(DASHBOARD_PATH, expect_context::<ApiClient>(), navigate.clone());
    install_unauth_redirect(auth, navigate);

    view! {
        <Show
            when=move || auth.get().is_authenticated()
            fallback=move || {
                view! {
                    <div class="dashboard-page dashboard-page--status">
                        <p>{move || status_text(&auth.get())}</p>
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <Navbar/>
                <main class="dashboard-page__grid">
                    <GenerateUsers/>
                    <BatchImport/>
                    <ProfileCard/>
                    <Show when=move || search_visible(auth.get().user.as_ref())>
                        <UserSearch/>
                    </Show>
                </main>
            </div>
        </Show>
    }
}
