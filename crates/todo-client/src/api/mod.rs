//! Remote Client
//!
//! Abstract interface to the todo API. `HttpTodoApi` talks to the real
//! server; tests substitute an in-memory implementation.

mod http;

pub use http::HttpTodoApi;

use async_trait::async_trait;

use crate::error::ClientResult;
use crate::models::{Credentials, Item, ItemId};

/// Calls the UI makes against the server.
///
/// Futures are not `Send`: in the browser they run on the single UI
/// event loop.
#[async_trait(?Send)]
pub trait TodoApi {
    /// Full item collection, in server order
    async fn list_items(&self) -> ClientResult<Vec<Item>>;

    async fn create_item(&self, name: &str) -> ClientResult<()>;

    async fn update_item(&self, id: &ItemId, name: &str) -> ClientResult<()>;

    async fn delete_item(&self, id: &ItemId) -> ClientResult<()>;

    /// Returns the username the server signed in
    async fn sign_in(&self, credentials: &Credentials) -> ClientResult<String>;

    /// Renew the session cookie
    async fn refresh_session(&self) -> ClientResult<()>;

    async fn log_out(&self) -> ClientResult<()>;
}
