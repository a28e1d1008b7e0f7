//! Admin-only user lookup card.
//!
//! Mounted by the dashboard only when [`search_visible`] holds for the current
//! user; the card never renders for other roles.
//!
//! [`search_visible`]: crate::state::search::search_visible

use leptos::prelude::*;

use super::toasts::notify;
use crate::net::client::ApiClient;
use crate::net::types::User;
use crate::state::notify::{NoticeLevel, NotificationState};
use crate::state::search::{EMPTY_QUERY, SearchBlocked, SearchState};
use crate::util::lifetime::ViewLifetime;

#[component]
pub fn UserSearch() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let notices = expect_context::<RwSignal<NotificationState>>();
    let state = RwSignal::new(SearchState::default());
    let lifetime = ViewLifetime::bind();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let query = match state.try_update(SearchState::try_begin) {
            Some(Ok(query)) => query,
            Some(Err(SearchBlocked::EmptyQuery)) => {
                notify(notices, NoticeLevel::Error, EMPTY_QUERY);
                return;
            }
            Some(Err(SearchBlocked::Busy)) | None => return,
        };

        #[cfg(feature = "hydrate")]
        {
            use crate::state::search::SEARCH_FAILED;

            let api = api.clone();
            let lifetime = lifetime.clone();
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::find_user(&api, &query).await;
                if !lifetime.is_alive() {
                    return;
                }
                let failed = outcome.is_err();
                state.update(|s| s.finish(outcome));
                if failed {
                    notify(notices, NoticeLevel::Error, SEARCH_FAILED);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, &lifetime, query);
            state.update(|s| s.busy = false);
        }
    };

    view! {
        <section class="card card--wide">
            <h2>"User Search (Admin Only)"</h2>
            <p class="card__hint">"Search for a user by username."</p>
            <form class="card__row" on:submit=on_submit>
                <input
                    class="input"
                    type="text"
                    placeholder="Enter username"
                    prop:value=move || state.get().query
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.query = value);
                    }
                />
                <button class="btn" type="submit" disabled=move || state.get().busy>
                    {move || if state.get().busy { "Searching..." } else { "Search" }}
                </button>
            </form>
            {move || state.get().error.map(|message| view! { <p class="card__error">{message}</p> })}
            {move || state.get().result.map(|user| view! { <SearchResult user/> })}
        </section>
    }
}

#[component]
fn SearchResult(user: User) -> impl IntoView {
    let optional = |value: Option<String>| value.unwrap_or_else(|| "-".to_owned());
    let full_name = user.full_name();
    let role = user.role.to_string();
    view! {
        <dl class="field-list field-list--grid">
            <dt>"Full name"</dt>
            <dd>{full_name}</dd>
            <dt>"Email"</dt>
            <dd>{user.email}</dd>
            <dt>"Username"</dt>
            <dd>{user.username}</dd>
            <dt>"Role"</dt>
            <dd>{role}</dd>
            <dt>"Company"</dt>
            <dd>{optional(user.company)}</dd>
            <dt>"Job position"</dt>
            <dd>{optional(user.job_position)}</dd>
        </dl>
    }
}
