//! Login Form Component
//!
//! Username/password form. A successful sign-in opens the session and
//! moves to the list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_client::{session, Credentials, FailureAction};

use crate::context::{use_app_context, LIST_ROUTE};

#[component]
pub fn LoginForm() -> impl IntoView {
    let ctx = use_app_context();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let sign_in = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let credentials = Credentials {
            username: username.get_untracked(),
            password: password.get_untracked(),
        };
        let api = ctx.api();

        spawn_local(async move {
            match session::sign_in(&api, &credentials).await {
                Ok(opened) => {
                    ctx.session.set(opened);
                    ctx.clear_banner();
                    ctx.navigate_to(LIST_ROUTE);
                }
                Err(err) => ctx.handle_failure(FailureAction::for_sign_in(&err), &err),
            }
        });
    };

    view! {
        <form class="login-form" on:submit=sign_in>
            <label>
                "User : "
                <input
                    type="text"
                    autocomplete="username"
                    prop:value=username
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Password : "
                <input
                    type="password"
                    autocomplete="current-password"
                    prop:value=password
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
            </label>
            <button type="submit">"Login"</button>
        </form>
    }
}
