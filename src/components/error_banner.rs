//! Error Banner Component

use leptos::prelude::*;

use crate::context::use_app_context;

/// Dismissable message above the current view
#[component]
pub fn ErrorBanner() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <Show when=move || ctx.banner.with(|b| b.is_some())>
            <div class="error-banner" role="alert">
                <span>{move || ctx.banner.get().unwrap_or_default()}</span>
                <button class="dismiss-btn" on:click=move |_| ctx.clear_banner()>"×"</button>
            </div>
        </Show>
    }
}
