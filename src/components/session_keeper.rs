//! Session Keeper
//!
//! Renders nothing. Lives inside the router so it can act on navigation
//! requests from the context, and renews the server session on a timer
//! while someone is signed in.

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use todo_client::TodoApi;

use crate::context::use_app_context;

#[component]
pub fn SessionKeeper() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();

    Effect::new(move |_| {
        if let Some(route) = ctx.redirect.get() {
            ctx.redirect.set(None);
            navigate(route, NavigateOptions::default());
        }
    });

    let period = ctx.api().config().session_refresh();
    let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);

    // Mounted once at the root; the timer runs for the page lifetime
    Interval::new(millis, move || {
        if !ctx.session.with_untracked(|s| s.is_authenticated()) {
            return;
        }
        let api = ctx.api();
        spawn_local(async move {
            match api.refresh_session().await {
                Ok(()) => log::debug!("session refreshed"),
                Err(err) => ctx.fail(&err),
            }
        });
    })
    .forget();
}
