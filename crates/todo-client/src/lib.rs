//! Todo Client
//!
//! Everything the todo UI needs that is not DOM: wire models, remote
//! client, session, list state and the refetch-on-mutation operations.

pub mod api;
pub mod config;
pub mod edit;
pub mod error;
pub mod models;
pub mod session;
pub mod state;
pub mod sync;

#[cfg(test)]
mod testing;

pub use api::{HttpTodoApi, TodoApi};
pub use config::ClientConfig;
pub use edit::EditMode;
pub use error::{ClientError, ClientResult, ConfigError, FailureAction, BAD_REQUEST_MESSAGE};
pub use models::{Credentials, Item, ItemId};
pub use session::Session;
pub use state::TodoListState;
