//! `/` has no view of its own; it always forwards to the login page.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::util::guard::LOGIN_PATH;

#[component]
pub fn RootRedirect() -> impl IntoView {
    view! { <Redirect path=LOGIN_PATH/> }
}
