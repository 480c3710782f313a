//! Wire Models
//!
//! Data structures matching the todo API.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned item identifier.
///
/// Opaque to the client: servers hand out either integers or strings
/// (UUIDs), and the id goes back on the wire in the form it came in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(RawId);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u64),
    Text(String),
}

impl ItemId {
    /// Numeric value, when the server uses integer ids
    pub fn as_number(&self) -> Option<u64> {
        match &self.0 {
            RawId::Number(n) => Some(*n),
            RawId::Text(_) => None,
        }
    }
}

impl From<u64> for ItemId {
    fn from(id: u64) -> Self {
        Self(RawId::Number(id))
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(RawId::Text(id))
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(RawId::Text(id.to_string()))
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            RawId::Number(n) => write!(f, "{}", n),
            RawId::Text(s) => f.write_str(s),
        }
    }
}

/// Todo item (matches server)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "Id", alias = "id")]
    pub id: ItemId,
    #[serde(rename = "item_name", alias = "name")]
    pub name: String,
    #[serde(rename = "create_timestamp", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(rename = "update_timestamp", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Item {
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            created_at: None,
            updated_at: None,
        }
    }
}

// ========================
// Request Bodies
// ========================

#[derive(Debug, Serialize)]
pub struct CreateItemRequest<'a> {
    pub item_name: &'a str,
}

#[derive(Debug, Serialize)]
pub struct UpdateItemRequest<'a> {
    pub item_id: &'a ItemId,
    pub item_name: &'a str,
}

#[derive(Debug, Serialize)]
pub struct DeleteItemRequest<'a> {
    pub item_id: &'a ItemId,
}

/// Sign-in credentials
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

// ========================
// Response Envelopes
// ========================

/// `{msg, status}` returned by the mutation endpoints
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub status: u16,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListItemsResponse {
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub status: u16,
    /// The server sends `null` for an empty collection
    #[serde(default)]
    pub items: Option<Vec<Item>>,
}

impl ListItemsResponse {
    pub fn into_items(self) -> Vec<Item> {
        self.items.unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignInResponse {
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub status: u16,
    pub user: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_response_uses_server_field_names() {
        let body = json!({
            "msg": "Success",
            "status": 200,
            "items": [
                { "Id": 2, "item_name": "milk", "create_timestamp": "2024-01-01T00:00:00Z" },
                { "Id": 1, "item_name": "eggs" }
            ]
        });

        let response: ListItemsResponse = serde_json::from_value(body).unwrap();
        let items = response.into_items();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, ItemId::from(2u64));
        assert_eq!(items[0].name, "milk");
        assert_eq!(items[0].created_at.as_deref(), Some("2024-01-01T00:00:00Z"));
        assert_eq!(items[1].updated_at, None);
    }

    #[test]
    fn test_null_items_is_empty_list() {
        let response: ListItemsResponse =
            serde_json::from_value(json!({ "msg": "Success", "status": 200, "items": null })).unwrap();
        assert!(response.into_items().is_empty());
    }

    #[test]
    fn test_lowercase_aliases_accepted() {
        let item: Item = serde_json::from_value(json!({ "id": 7, "name": "walk" })).unwrap();
        assert_eq!(item, Item::new(7u64, "walk"));
    }

    #[test]
    fn test_update_request_body() {
        let id = ItemId::from(3u64);
        let body = serde_json::to_value(UpdateItemRequest { item_id: &id, item_name: "new" }).unwrap();
        assert_eq!(body, json!({ "item_id": 3, "item_name": "new" }));
    }

    #[test]
    fn test_uuid_ids_decode_and_go_back_as_strings() {
        let body = json!({
            "msg": "Success",
            "status": 200,
            "items": [{
                "Id": "1b4e28ba-2fa1-11d2-883f-0016d3cca427",
                "item_name": "milk",
                "create_timestamp": "2024-01-01T00:00:00Z",
                "update_timestamp": "2024-01-01T00:00:00Z"
            }]
        });

        let items = serde_json::from_value::<ListItemsResponse>(body).unwrap().into_items();
        let id = &items[0].id;
        assert_eq!(id, &ItemId::from("1b4e28ba-2fa1-11d2-883f-0016d3cca427"));
        assert_eq!(id.as_number(), None);
        assert_eq!(id.to_string(), "1b4e28ba-2fa1-11d2-883f-0016d3cca427");

        let body = serde_json::to_value(DeleteItemRequest { item_id: id }).unwrap();
        assert_eq!(body, json!({ "item_id": "1b4e28ba-2fa1-11d2-883f-0016d3cca427" }));
    }
}
