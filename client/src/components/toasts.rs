//! Toast stack rendered in the top-right corner.
//!
//! SYSTEM CONTEXT
//! ==============
//! Views call [`notify`] with the context `RwSignal<NotificationState>`. Under
//! hydrate each notice schedules its own dismissal; during SSR notices simply
//! persist until hydration replaces the view.

use leptos::prelude::*;

use crate::state::notify::{NoticeLevel, NotificationState};

/// Push a notice and schedule its dismissal.
pub fn notify(notices: RwSignal<NotificationState>, level: NoticeLevel, message: impl Into<String>) {
    let Some(id) = notices.try_update(|n| n.push(level, message)) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(level.lifetime()).await;
        notices.update(|n| n.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

#[component]
pub fn Toasts() -> impl IntoView {
    let notices = expect_context::<RwSignal<NotificationState>>();

    view! {
        <div class="toasts" role="status" aria-live="polite">
            <For
                each=move || notices.get().items
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div class=format!("toast {}", notice.level.css_modifier())>
                            <span class="toast__message">{notice.message}</span>
                            <button
                                class="toast__close"
                                title="Dismiss"
                                on:click=move |_| notices.update(|n| n.dismiss(id))
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
