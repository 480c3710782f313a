//! Session
//!
//! Client-held record of the signed-in user. The server keeps the real
//! session in a cookie; this only remembers who we are for display and
//! for deciding whether to keep the session alive.

use crate::api::TodoApi;
use crate::error::ClientResult;
use crate::models::Credentials;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    username: Option<String>,
}

impl Session {
    pub fn signed_in(username: impl Into<String>) -> Self {
        let mut session = Self::default();
        session.sign_in(username);
        session
    }

    pub fn sign_in(&mut self, username: impl Into<String>) {
        let username = username.into();
        self.username = (!username.is_empty()).then_some(username);
    }

    /// Logout or authorization failure
    pub fn clear(&mut self) {
        self.username = None;
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.username.is_some()
    }
}

/// Sign in and open a session for the user the server returns
pub async fn sign_in<A: TodoApi + ?Sized>(api: &A, credentials: &Credentials) -> ClientResult<Session> {
    let user = api.sign_in(credentials).await?;
    log::info!("signed in as {}", user);
    Ok(Session::signed_in(user))
}

/// Log out on the server. The local session is cleared either way;
/// the server result is returned for logging.
pub async fn log_out<A: TodoApi + ?Sized>(api: &A, session: &mut Session) -> ClientResult<()> {
    let result = api.log_out().await;
    session.clear();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use crate::testing::FakeApi;

    #[test]
    fn test_sign_in_and_clear() {
        let mut session = Session::default();
        assert!(!session.is_authenticated());

        session.sign_in("user1@abc.com");
        assert_eq!(session.username(), Some("user1@abc.com"));

        session.clear();
        assert_eq!(session, Session::default());
    }

    #[test]
    fn test_empty_username_is_not_a_session() {
        assert!(!Session::signed_in("").is_authenticated());
    }

    #[tokio::test]
    async fn test_sign_in_opens_session() {
        let api = FakeApi::default();
        let credentials = Credentials {
            username: "user2@abc.com".to_string(),
            password: "password2".to_string(),
        };

        let session = sign_in(&api, &credentials).await.unwrap();

        assert_eq!(session.username(), Some("user2@abc.com"));
        assert_eq!(api.calls(), vec!["signin user2@abc.com"]);
    }

    #[tokio::test]
    async fn test_log_out_clears_session() {
        let api = FakeApi::default();
        let mut session = Session::signed_in("user1@abc.com");

        log_out(&api, &mut session).await.unwrap();

        assert!(!session.is_authenticated());
        assert_eq!(api.calls(), vec!["logout"]);
    }

    #[tokio::test]
    async fn test_log_out_clears_session_when_server_fails() {
        let api = FakeApi::default();
        api.fail_with(ClientError::Transport("connection refused".to_string()));
        let mut session = Session::signed_in("user1@abc.com");

        assert!(log_out(&api, &mut session).await.is_err());
        assert_eq!(session.username(), None);
    }
}
