//! Logout View
//!
//! Mounted on the logout route: ends the session and returns to login.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_client::session;

use crate::context::use_app_context;

#[component]
pub fn LogoutView() -> impl IntoView {
    let ctx = use_app_context();

    Effect::new(move |_| {
        let api = ctx.api();
        spawn_local(async move {
            let mut current = ctx.session.get_untracked();
            if let Err(err) = session::log_out(&api, &mut current).await {
                log::warn!("logout request failed: {}", err);
            }
            ctx.end_session();
        });
    });

    view! { <p class="logout">"Logging out..."</p> }
}
