//! "Batch Import Users" card: file picker, multipart upload, result summary.
//!
//! The picked `web_sys::File` is not `Send`, so it lives in a local signal
//! next to the serializable `ImportState`.

use leptos::prelude::*;

use super::toasts::notify;
use crate::net::client::ApiClient;
use crate::state::import::{ImportBlocked, ImportState, NO_FILE_SELECTED, summary_lines};
use crate::state::notify::{NoticeLevel, NotificationState};
use crate::util::lifetime::ViewLifetime;

#[component]
pub fn BatchImport() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let notices = expect_context::<RwSignal<NotificationState>>();
    let state = RwSignal::new(ImportState::default());
    let lifetime = ViewLifetime::bind();

    #[cfg(feature = "hydrate")]
    let picked = RwSignal::new_local(None::<web_sys::File>);

    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let file = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            state.update(|s| s.select(file.as_ref().map(web_sys::File::name)));
            picked.set(file);
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let on_upload = move |_| {
        match state.try_update(ImportState::try_begin) {
            Some(Ok(())) => {}
            Some(Err(ImportBlocked::NoFile)) => {
                notify(notices, NoticeLevel::Error, NO_FILE_SELECTED);
                return;
            }
            Some(Err(ImportBlocked::Busy)) | None => return,
        }

        #[cfg(feature = "hydrate")]
        {
            use crate::state::import::{UPLOAD_FAILED, UPLOAD_SUCCEEDED};

            let Some(file) = picked.get_untracked() else {
                state.update(ImportState::finish_err);
                notify(notices, NoticeLevel::Error, NO_FILE_SELECTED);
                return;
            };
            let api = api.clone();
            let lifetime = lifetime.clone();
            leptos::task::spawn_local(async move {
                let outcome = match crate::util::files::read_upload(&file).await {
                    Ok(upload) => crate::net::api::batch_import(&api, upload).await,
                    Err(e) => Err(e),
                };
                if !lifetime.is_alive() {
                    return;
                }
                match outcome {
                    Ok(result) => {
                        state.update(|s| s.finish_ok(result));
                        notify(notices, NoticeLevel::Success, UPLOAD_SUCCEEDED);
                    }
                    Err(e) => {
                        leptos::logging::warn!("batch import failed: {e}");
                        state.update(ImportState::finish_err);
                        notify(notices, NoticeLevel::Error, UPLOAD_FAILED);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, &lifetime);
            state.update(ImportState::finish_err);
        }
    };

    view! {
        <section class="card">
            <h2>"Batch Import Users"</h2>
            <p class="card__hint">"Upload a JSON file to import multiple users at once."</p>
            <div class="card__row">
                <input class="input input--file" type="file" accept=".json" on:change=on_change/>
            </div>
            <button class="btn" type="button" on:click=on_upload disabled=move || !state.get().can_upload()>
                {move || if state.get().busy { "Uploading..." } else { "Upload File" }}
            </button>
            {move || {
                state.get().result.map(|result| {
                    let [total, success, failed] = summary_lines(&result);
                    view! {
                        <div class="upload-result">
                            <h3>"Upload Results:"</h3>
                            <ul>
                                <li>{total}</li>
                                <li>{success}</li>
                                <li>{failed}</li>
                            </ul>
                        </div>
                    }
                })
            }}
        </section>
    }
}
