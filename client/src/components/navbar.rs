//! Dashboard header: greeting, role badge, and logout.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::auth_session::AuthSession;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<AuthSession>();

    let greeting = move || {
        auth.get()
            .user
            .map(|u| format!("Welcome, {}", u.full_name()))
            .unwrap_or_default()
    };
    let role = move || auth.get().user.map(|u| u.role.to_string()).unwrap_or_default();
    let badge_class = move || {
        if auth.get().is_admin() { "role-badge role-badge--admin" } else { "role-badge" }
    };

    view! {
        <header class="navbar">
            <span class="navbar__title">"U-Management"</span>
            <span class="navbar__spacer"></span>
            <span class="navbar__greeting">{greeting}</span>
            <span class=badge_class>{role}</span>
            <button class="btn navbar__logout" on:click=move |_| session.logout()>
                "Logout"
            </button>
        </header>
    }
}
