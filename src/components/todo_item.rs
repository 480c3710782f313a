//! Todo Item Component
//!
//! One row of the list. Clicking the row opens its edit box.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_client::{sync, ClientError, ItemId, TodoListState};

use crate::context::use_app_context;

const EMPTY_EDIT_ALERT: &str = "Item name cannot be empty.";

/// A single item row. The name follows the latest snapshot, so a rename
/// updates the row in place.
#[component]
pub fn TodoItem(id: ItemId, state: RwSignal<TodoListState>) -> impl IntoView {
    let ctx = use_app_context();

    let id = StoredValue::new(id);
    let name = Memo::new(move |_| {
        state.with(|s| id.with_value(|id| s.item(id).map(|item| item.name.clone()).unwrap_or_default()))
    });
    let is_editing = Memo::new(move |_| state.with(|s| id.with_value(|id| s.is_editing(id))));

    let delete_item = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        let api = ctx.api();
        let id = id.get_value();
        spawn_local(async move {
            match sync::delete_item(&api, &id).await {
                Ok(()) => state.update(|s| s.on_deleted()),
                Err(err) => ctx.fail(&err),
            }
        });
    };

    let update_item = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        let draft = state.with_untracked(|s| s.edit().draft().to_string());
        let api = ctx.api();
        let id = id.get_value();
        spawn_local(async move {
            match sync::rename_item(&api, &id, &draft).await {
                Ok(()) => state.update(|s| s.on_updated(&id)),
                Err(ClientError::EmptyName) => alert(EMPTY_EDIT_ALERT),
                Err(err) => ctx.fail(&err),
            }
        });
    };

    view! {
        <li class="todo-item" on:click=move |_| state.update(|s| s.begin_edit(id.get_value()))>
            <span class="item-name">{move || name.get()}</span>
            <button class="delete-btn" on:click=delete_item>"X"</button>
            <Show when=move || is_editing.get()>
                <input
                    type="text"
                    class="edit-input"
                    prop:value=move || state.with(|s| s.edit().draft().to_string())
                    on:input=move |ev| state.update(|s| s.set_edit_draft(event_target_value(&ev)))
                />
                <button class="edit-btn" on:click=update_item>"Edit"</button>
                <button
                    class="close-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        state.update(|s| s.close_edit());
                    }
                >
                    "Close"
                </button>
            </Show>
        </li>
    }
}

/// Blocking browser alert
fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.alert_with_message(message) {
            log::warn!("alert failed: {:?}", err);
        }
    }
}
