//! Root application component with routing and context providers.
//!
//! ARCHITECTURE
//! ============
//! `App` builds the per-page-load collaborators once: the `ApiClient` over the
//! target's transport and session store, and the `AuthSession` that mirrors
//! its transitions into the auth signal. Both are handed down via context.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toasts::Toasts;
use crate::config::api_base_url;
use crate::net::client::ApiClient;
use crate::net::transport::default_transport;
use crate::pages::{dashboard::DashboardPage, login::LoginPage, root::RootRedirect};
use crate::state::auth::{AuthSink, AuthState};
use crate::state::auth_session::AuthSession;
use crate::state::notify::NotificationState;
use crate::util::navigation::{RedirectListener, RouterNavigator};
use crate::util::session::default_session_store;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::loading());
    let notices = RwSignal::new(NotificationState::default());
    let pending_redirect = RwSignal::new(None::<String>);

    let auth_sink: Arc<dyn AuthSink> = Arc::new(auth);
    let api = ApiClient::new(
        &api_base_url(),
        default_transport(),
        default_session_store(),
        Arc::new(RouterNavigator::new(pending_redirect)),
    )
    .with_auth_sink(auth_sink.clone());
    let session = AuthSession::new(api.clone(), auth_sink);

    provide_context(auth);
    provide_context(notices);
    provide_context(api);
    provide_context(session.clone());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        session.resolve().await;
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = session;

    view! {
        <Stylesheet id="leptos" href="/pkg/dashboard.css"/>
        <Title text="U-Management"/>

        <Router>
            <RedirectListener pending=pending_redirect/>
            <Toasts/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=RootRedirect/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
