//! "Generate Users" card: bounded count input and download trigger.

use leptos::prelude::*;

use super::toasts::notify;
use crate::net::client::ApiClient;
use crate::state::generate::{GenerateState, MAX_COUNT, MIN_COUNT, parse_count};
use crate::state::notify::{NoticeLevel, NotificationState};
use crate::util::lifetime::ViewLifetime;

#[component]
pub fn GenerateUsers() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let notices = expect_context::<RwSignal<NotificationState>>();
    let state = RwSignal::new(GenerateState::default());
    let lifetime = ViewLifetime::bind();

    let on_generate = move |_| {
        let count = match parse_count(&state.get_untracked().count_input) {
            Ok(count) => count,
            Err(message) => {
                notify(notices, NoticeLevel::Error, message);
                return;
            }
        };
        if state.try_update(GenerateState::try_begin) != Some(true) {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            use crate::state::generate::{GENERATE_FAILED, generate_and_save, success_message};
            use crate::util::files::BrowserDownload;

            let api = api.clone();
            let lifetime = lifetime.clone();
            leptos::task::spawn_local(async move {
                let outcome = generate_and_save(&api, &BrowserDownload, count).await;
                if !lifetime.is_alive() {
                    return;
                }
                state.update(GenerateState::finish);
                match outcome {
                    Ok(_) => notify(notices, NoticeLevel::Success, success_message(count)),
                    Err(e) => {
                        leptos::logging::warn!("generate users failed: {e}");
                        notify(notices, NoticeLevel::Error, GENERATE_FAILED);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, &lifetime, count);
            state.update(GenerateState::finish);
        }
    };

    view! {
        <section class="card">
            <h2>"Generate Users"</h2>
            <p class="card__hint">"Generate random users with realistic data."</p>
            <div class="card__row">
                <label for="user-count">"Number of users:"</label>
                <input
                    id="user-count"
                    class="input input--count"
                    type="number"
                    min=MIN_COUNT
                    max=MAX_COUNT
                    prop:value=move || state.get().count_input
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.count_input = value);
                    }
                />
            </div>
            <button class="btn" type="button" on:click=on_generate disabled=move || state.get().busy>
                {move || if state.get().busy { "Generating..." } else { "Generate Users" }}
            </button>
        </section>
    }
}
