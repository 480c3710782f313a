//! Test doubles

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use crate::api::TodoApi;
use crate::error::{ClientError, ClientResult};
use crate::models::{Credentials, Item, ItemId};

/// In-memory server that records every call
#[derive(Default)]
pub struct FakeApi {
    items: RefCell<Vec<Item>>,
    next_id: Cell<u64>,
    calls: RefCell<Vec<String>>,
    failure: RefCell<Option<ClientError>>,
}

impl FakeApi {
    /// Server already holding `items`, oldest first
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items: RefCell::new(items),
            ..Self::default()
        }
    }

    /// Every following call fails with `err`
    pub fn fail_with(&self, err: ClientError) {
        *self.failure.borrow_mut() = Some(err);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: impl Into<String>) -> ClientResult<()> {
        self.calls.borrow_mut().push(call.into());
        match self.failure.borrow().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl TodoApi for FakeApi {
    async fn list_items(&self) -> ClientResult<Vec<Item>> {
        self.record("list")?;
        // Newest first, so client ordering is observable
        Ok(self.items.borrow().iter().rev().cloned().collect())
    }

    async fn create_item(&self, name: &str) -> ClientResult<()> {
        self.record(format!("create {}", name))?;
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        self.items.borrow_mut().push(Item::new(id, name));
        Ok(())
    }

    async fn update_item(&self, id: &ItemId, name: &str) -> ClientResult<()> {
        self.record(format!("update {} {}", id, name))?;
        if let Some(item) = self.items.borrow_mut().iter_mut().find(|i| &i.id == id) {
            item.name = name.to_string();
        }
        Ok(())
    }

    async fn delete_item(&self, id: &ItemId) -> ClientResult<()> {
        self.record(format!("delete {}", id))?;
        self.items.borrow_mut().retain(|i| &i.id != id);
        Ok(())
    }

    async fn sign_in(&self, credentials: &Credentials) -> ClientResult<String> {
        self.record(format!("signin {}", credentials.username))?;
        Ok(credentials.username.clone())
    }

    async fn refresh_session(&self) -> ClientResult<()> {
        self.record("refresh")
    }

    async fn log_out(&self) -> ClientResult<()> {
        self.record("logout")
    }
}
