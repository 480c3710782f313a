//! HTTP Remote Client
//!
//! `TodoApi` over reqwest. In the browser requests go through `fetch`
//! with `credentials: include`; on the host the client keeps a cookie jar.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::TodoApi;
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::models::{
    CreateItemRequest, Credentials, DeleteItemRequest, Item, ItemId, ListItemsResponse,
    SignInResponse, UpdateItemRequest,
};

#[derive(Debug, Clone)]
pub struct HttpTodoApi {
    client: Client,
    config: ClientConfig,
}

impl HttpTodoApi {
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.cookie_store(true);
        let client = builder.build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn get(&self, path: &str) -> RequestBuilder {
        let url = self.config.endpoint(path);
        log::debug!("GET {}", url);
        with_credentials(self.client.get(url))
    }

    fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> RequestBuilder {
        let url = self.config.endpoint(path);
        log::debug!("POST {}", url);
        with_credentials(self.client.post(url).json(body))
    }

    async fn send(&self, request: RequestBuilder) -> ClientResult<Response> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        log::debug!("request failed with {}: {}", status, message.trim());
        Err(ClientError::status(status.as_u16(), message.trim()))
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> ClientResult<T> {
        let response = self.send(request).await?;
        Ok(response.json::<T>().await?)
    }
}

#[cfg(target_arch = "wasm32")]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request.fetch_credentials_include()
}

#[cfg(not(target_arch = "wasm32"))]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request
}

#[async_trait(?Send)]
impl TodoApi for HttpTodoApi {
    async fn list_items(&self) -> ClientResult<Vec<Item>> {
        let response: ListItemsResponse = self.send_json(self.get("list")).await?;
        Ok(response.into_items())
    }

    async fn create_item(&self, name: &str) -> ClientResult<()> {
        self.send(self.post("create", &CreateItemRequest { item_name: name })).await?;
        Ok(())
    }

    async fn update_item(&self, id: &ItemId, name: &str) -> ClientResult<()> {
        let body = UpdateItemRequest { item_id: id, item_name: name };
        self.send(self.post("update", &body)).await?;
        Ok(())
    }

    async fn delete_item(&self, id: &ItemId) -> ClientResult<()> {
        self.send(self.post("delete", &DeleteItemRequest { item_id: id })).await?;
        Ok(())
    }

    async fn sign_in(&self, credentials: &Credentials) -> ClientResult<String> {
        let response: SignInResponse = self.send_json(self.post("signin", credentials)).await?;
        Ok(response.user)
    }

    async fn refresh_session(&self) -> ClientResult<()> {
        let url = self.config.endpoint("refresh");
        log::debug!("POST {}", url);
        self.send(with_credentials(self.client.post(url))).await?;
        Ok(())
    }

    async fn log_out(&self) -> ClientResult<()> {
        self.send(self.get("logout")).await?;
        Ok(())
    }
}
