//! Items Service
//!
//! The operations behind the page's event handlers. Failures are written to
//! the diagnostic log here and handed back so callers can leave their state
//! untouched.

use log::{debug, error, info};

use crate::api::ItemsApi;
use crate::error::ApiResult;
use crate::model::{is_blank_name, Item};

/// Outcome of a write handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    /// Server accepted the change; the caller should refetch
    Applied,
    /// Refused locally, no request was made
    Skipped,
}

impl Mutation {
    pub fn is_applied(self) -> bool {
        self == Mutation::Applied
    }
}

#[derive(Debug, Clone)]
pub struct ItemsService<A> {
    api: A,
}

impl<A: ItemsApi> ItemsService<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Fetch the whole collection
    pub async fn load(&self) -> ApiResult<Vec<Item>> {
        match self.api.list().await {
            Ok(items) => {
                debug!("loaded {} items", items.len());
                Ok(items)
            }
            Err(e) => {
                error!("Error fetching items: {}", e);
                Err(e)
            }
        }
    }

    /// Create an item; the name is sent exactly as typed
    pub async fn add(&self, name: &str) -> ApiResult<Mutation> {
        if is_blank_name(name) {
            return Ok(Mutation::Skipped);
        }
        self.api.create(name).await.map_err(|e| {
            error!("Error adding item: {}", e);
            e
        })?;
        info!("added item {:?}", name);
        Ok(Mutation::Applied)
    }

    /// Replace the name of `item.id` with `item.name`
    pub async fn rename(&self, item: &Item) -> ApiResult<Mutation> {
        if is_blank_name(&item.name) {
            return Ok(Mutation::Skipped);
        }
        self.api.update(item.id, &item.name).await.map_err(|e| {
            error!("Error updating item: {}", e);
            e
        })?;
        info!("renamed item #{} to {:?}", item.id, item.name);
        Ok(Mutation::Applied)
    }

    pub async fn remove(&self, id: u32) -> ApiResult<Mutation> {
        self.api.delete(id).await.map_err(|e| {
            error!("Error deleting item: {}", e);
            e
        })?;
        info!("deleted item #{}", id);
        Ok(Mutation::Applied)
    }
}
