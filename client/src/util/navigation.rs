//! Navigation seam for non-component code.
//!
//! `ApiClient` and `AuthSession` must redirect without touching the router
//! directly. They post the target into a signal; `RedirectListener`, mounted
//! inside `<Router>`, performs the actual navigation.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

pub trait Navigator: Send + Sync {
    fn redirect(&self, path: &str);
}

/// Navigator that hands targets to `RedirectListener`.
#[derive(Clone, Copy)]
pub struct RouterNavigator {
    pending: RwSignal<Option<String>>,
}

impl RouterNavigator {
    pub fn new(pending: RwSignal<Option<String>>) -> Self {
        Self { pending }
    }
}

impl Navigator for RouterNavigator {
    fn redirect(&self, path: &str) {
        self.pending.set(Some(path.to_owned()));
    }
}

/// Drains pending redirects into the router.
#[component]
pub fn RedirectListener(pending: RwSignal<Option<String>>) -> impl IntoView {
    let navigate = use_navigate();
    Effect::new(move || {
        if let Some(path) = pending.get() {
            pending.set(None);
            navigate(&path, NavigateOptions::default());
        }
    });
}
