//! List Synchronization
//!
//! Mutations validate locally, then make one round trip. None of them
//! touch local state; on success the caller invalidates and reloads the
//! whole list with `load_items`.

use crate::api::TodoApi;
use crate::error::{ClientError, ClientResult};
use crate::models::{Item, ItemId};

/// Full snapshot of the server's list.
///
/// Ordered by id when every id is numeric; string ids (UUIDs) carry no
/// order, so server order is kept.
pub async fn load_items<A: TodoApi + ?Sized>(api: &A) -> ClientResult<Vec<Item>> {
    let mut items = api.list_items().await?;
    if items.iter().all(|item| item.id.as_number().is_some()) {
        items.sort_by_key(|item| item.id.as_number());
    }
    log::debug!("loaded {} items", items.len());
    Ok(items)
}

pub async fn create_item<A: TodoApi + ?Sized>(api: &A, name: &str) -> ClientResult<()> {
    let name = require_name(name)?;
    api.create_item(name).await
}

pub async fn rename_item<A: TodoApi + ?Sized>(api: &A, id: &ItemId, name: &str) -> ClientResult<()> {
    let name = require_name(name)?;
    api.update_item(id, name).await
}

pub async fn delete_item<A: TodoApi + ?Sized>(api: &A, id: &ItemId) -> ClientResult<()> {
    api.delete_item(id).await
}

fn require_name(name: &str) -> ClientResult<&str> {
    if name.is_empty() {
        return Err(ClientError::EmptyName);
    }
    Ok(name)
}
