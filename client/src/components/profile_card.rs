//! Current-user profile card.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn ProfileCard() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let field = move |pick: fn(&crate::net::types::User) -> String| {
        move || auth.get().user.as_ref().map(pick).unwrap_or_default()
    };

    view! {
        <section class="card profile-card">
            <h2>"Your Profile"</h2>
            <dl class="field-list">
                <dt>"Full name"</dt>
                <dd>{field(|u| u.full_name())}</dd>
                <dt>"Email"</dt>
                <dd>{field(|u| u.email.clone())}</dd>
                <dt>"Username"</dt>
                <dd>{field(|u| u.username.clone())}</dd>
                <dt>"Role"</dt>
                <dd>{field(|u| u.role.to_string())}</dd>
            </dl>
        </section>
    }
}
