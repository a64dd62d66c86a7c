//! Items API
//!
//! Abstract interface to the remote collection plus the HTTP implementation.

use async_trait::async_trait;
use reqwest::{Client, Response};

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::model::{Item, ItemPayload};

/// The four calls the page makes against the items resource.
///
/// Futures are `?Send` because the browser fetch bindings are not thread-safe.
#[async_trait(?Send)]
pub trait ItemsApi {
    /// `GET /items`
    async fn list(&self) -> ApiResult<Vec<Item>>;

    /// `POST /items` with `{"name"}`
    async fn create(&self, name: &str) -> ApiResult<()>;

    /// `PUT /items/{id}` with `{"name"}`
    async fn update(&self, id: u32, name: &str) -> ApiResult<()>;

    /// `DELETE /items/{id}`
    async fn delete(&self, id: u32) -> ApiResult<()>;
}

/// reqwest-backed client (uses `fetch` on wasm32)
#[derive(Debug, Clone)]
pub struct HttpItemsApi {
    http: Client,
    config: ApiConfig,
}

impl HttpItemsApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }
}

impl Default for HttpItemsApi {
    fn default() -> Self {
        Self::new(ApiConfig::default())
    }
}

/// Any 2xx counts as success; the body of a write is ignored
fn ensure_success(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status(status.as_u16()))
    }
}

#[async_trait(?Send)]
impl ItemsApi for HttpItemsApi {
    async fn list(&self) -> ApiResult<Vec<Item>> {
        let response = self.http.get(self.config.collection_url()).send().await?;
        let items = ensure_success(response)?
            .json::<Vec<Item>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(items)
    }

    async fn create(&self, name: &str) -> ApiResult<()> {
        let response = self
            .http
            .post(self.config.collection_url())
            .json(&ItemPayload { name })
            .send()
            .await?;
        ensure_success(response)?;
        Ok(())
    }

    async fn update(&self, id: u32, name: &str) -> ApiResult<()> {
        let response = self
            .http
            .put(self.config.item_url(id))
            .json(&ItemPayload { name })
            .send()
            .await?;
        ensure_success(response)?;
        Ok(())
    }

    async fn delete(&self, id: u32) -> ApiResult<()> {
        let response = self.http.delete(self.config.item_url(id)).send().await?;
        ensure_success(response)?;
        Ok(())
    }
}
