//! Todo List View
//!
//! Signed-in user, new item form and the item list. The list reloads
//! on mount and whenever a mutation bumps the state revision.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use todo_client::{sync, TodoListState};

use super::{NewItemForm, TodoItem};
use crate::context::use_app_context;

#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_app_context();
    let state = RwSignal::new(TodoListState::new());

    // Only a revision change reloads, not every keystroke in the state
    let revision = Memo::new(move |_| state.with(|s| s.revision()));

    Effect::new(move |_| {
        let revision = revision.get();
        let api = ctx.api();
        log::debug!("reloading list at revision {}", revision);
        spawn_local(async move {
            match sync::load_items(&api).await {
                Ok(items) => state.maybe_update(|s| s.apply_snapshot(revision, items)),
                Err(err) => ctx.fail(&err),
            }
        });
    });

    let username = move || ctx.session.with(|s| s.username().unwrap_or_default().to_string());

    view! {
        <div class="todo-list">
            <div class="app-title">"Todoapp"</div>
            <h1>"UserName: " {username}</h1>

            <NewItemForm state=state />

            <ul class="items">
                <For
                    each=move || state.with(|s| s.items().iter().map(|item| item.id.clone()).collect::<Vec<_>>())
                    key=|id| id.clone()
                    children=move |id| view! { <TodoItem id=id state=state /> }
                />
            </ul>

            <A href="/logout">"Logout"</A>
        </div>
    }
}
