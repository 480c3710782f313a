//! Application Context
//!
//! Session, banner, navigation requests and the remote client, provided
//! via Leptos Context API.

use leptos::prelude::*;
use todo_client::{ClientError, FailureAction, HttpTodoApi, Session};

/// Route the list view lives on
pub const LIST_ROUTE: &str = "/list";
/// Route the login form lives on
pub const LOGIN_ROUTE: &str = "/login";

/// App-wide state provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Signed-in user for the page lifetime
    pub session: RwSignal<Session>,
    /// Message shown above the current view
    pub banner: RwSignal<Option<String>>,
    /// Route to move to, consumed by `SessionKeeper` inside the router
    pub redirect: RwSignal<Option<&'static str>>,
    api: StoredValue<HttpTodoApi>,
}

impl AppContext {
    pub fn new(api: HttpTodoApi) -> Self {
        Self {
            session: RwSignal::new(Session::default()),
            banner: RwSignal::new(None),
            redirect: RwSignal::new(None),
            api: StoredValue::new(api),
        }
    }

    /// Handle to the remote client for a spawned task
    pub fn api(&self) -> HttpTodoApi {
        self.api.get_value()
    }

    pub fn navigate_to(&self, route: &'static str) {
        self.redirect.set(Some(route));
    }

    pub fn show_banner(&self, message: impl Into<String>) {
        self.banner.set(Some(message.into()));
    }

    pub fn clear_banner(&self) {
        self.banner.set(None);
    }

    /// Forget the signed-in user and go back to the login form
    pub fn end_session(&self) {
        self.session.update(|session| session.clear());
        self.navigate_to(LOGIN_ROUTE);
    }

    /// Apply a failure policy decision
    pub fn handle_failure(&self, action: FailureAction, err: &ClientError) {
        match action {
            FailureAction::RedirectToLogin => {
                log::info!("session rejected ({}), returning to login", err);
                self.end_session();
            }
            FailureAction::ShowBanner(message) => {
                log::warn!("request rejected: {}", err);
                self.show_banner(message);
            }
            FailureAction::Ignore => log::warn!("request failed: {}", err),
        }
    }

    /// `handle_failure` with the default policy
    pub fn fail(&self, err: &ClientError) {
        self.handle_failure(FailureAction::for_error(err), err);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_client::{ClientConfig, BAD_REQUEST_MESSAGE};

    fn with_context(test: impl FnOnce(AppContext)) {
        let owner = Owner::new();
        owner.with(|| {
            let api = HttpTodoApi::new(ClientConfig::default()).expect("Failed to build client");
            let ctx = AppContext::new(api);
            ctx.session.set(Session::signed_in("alice"));
            test(ctx);
        });
    }

    #[test]
    fn test_redirect_clears_session_and_requests_login() {
        with_context(|ctx| {
            let err = ClientError::status(401, "token expired");
            ctx.handle_failure(FailureAction::for_error(&err), &err);

            assert!(!ctx.session.get_untracked().is_authenticated());
            assert_eq!(ctx.redirect.get_untracked(), Some(LOGIN_ROUTE));
            assert_eq!(ctx.banner.get_untracked(), None);
        });
    }

    #[test]
    fn test_banner_keeps_session() {
        with_context(|ctx| {
            let err = ClientError::status(400, "");
            ctx.fail(&err);

            assert_eq!(ctx.banner.get_untracked().as_deref(), Some(BAD_REQUEST_MESSAGE));
            assert_eq!(ctx.session.get_untracked().username(), Some("alice"));
            assert_eq!(ctx.redirect.get_untracked(), None);
        });
    }

    #[test]
    fn test_other_failures_change_nothing() {
        with_context(|ctx| {
            ctx.fail(&ClientError::status(500, "boom"));

            assert!(ctx.session.get_untracked().is_authenticated());
            assert_eq!(ctx.banner.get_untracked(), None);
            assert_eq!(ctx.redirect.get_untracked(), None);
        });
    }

    #[test]
    fn test_end_session_returns_to_login() {
        with_context(|ctx| {
            ctx.end_session();

            assert_eq!(ctx.session.get_untracked(), Session::default());
            assert_eq!(ctx.redirect.get_untracked(), Some(LOGIN_ROUTE));
        });
    }
}
