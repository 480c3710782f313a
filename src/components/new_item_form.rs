//! New Item Form Component
//!
//! Text input and "Add Item" button above the list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_client::{sync, ClientError, TodoListState};
use wasm_bindgen::JsCast;

use crate::context::use_app_context;

/// Form for creating new items
#[component]
pub fn NewItemForm(state: RwSignal<TodoListState>) -> impl IntoView {
    let ctx = use_app_context();

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = state.with_untracked(|s| s.input().to_string());
        let api = ctx.api();

        spawn_local(async move {
            match sync::create_item(&api, &name).await {
                Ok(()) => state.update(|s| s.on_created()),
                // Nothing typed, nothing sent
                Err(ClientError::EmptyName) => {}
                Err(err) => ctx.fail(&err),
            }
        });
    };

    view! {
        <form class="new-item-form" on:submit=create_item>
            <input
                type="text"
                placeholder="Add new item..."
                prop:value=move || state.with(|s| s.input().to_string())
                on:input=move |ev| {
                    if let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) {
                        state.update(|s| s.set_input(input.value()));
                    }
                }
            />
            <button type="submit">"Add Item"</button>
        </form>
    }
}
