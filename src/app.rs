//! Todo Frontend App
//!
//! Router, shared context and the views mounted on each route.

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;
use todo_client::{ClientConfig, HttpTodoApi};

use crate::components::{ErrorBanner, LoginForm, LogoutView, SessionKeeper, TodoList};
use crate::context::{AppContext, LIST_ROUTE};

#[component]
pub fn App() -> impl IntoView {
    let config = ClientConfig::from_build_env().unwrap_or_else(|err| {
        log::error!("{}, falling back to defaults", err);
        ClientConfig::default()
    });
    log::info!("using todo API at {}", config.base_url());

    let api = match HttpTodoApi::new(config) {
        Ok(api) => api,
        Err(err) => {
            log::error!("failed to build HTTP client: {}", err);
            return view! { <p class="fatal">"Unable to start: " {err.to_string()}</p> }.into_any();
        }
    };

    let ctx = AppContext::new(api);
    provide_context(ctx);

    view! {
        <Router>
            <SessionKeeper />
            <div class="app">
                <ErrorBanner />
                <Routes fallback=|| view! { <p>"Page not found."</p> }>
                    <Route path=path!("/") view=|| view! { <Redirect path=LIST_ROUTE /> } />
                    <Route path=path!("/login") view=LoginForm />
                    <Route path=path!("/list") view=TodoList />
                    <Route path=path!("/logout") view=LogoutView />
                </Routes>
            </div>
        </Router>
    }
    .into_any()
}
