//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use items_client::{HttpItemsApi, ItemsService};

pub type Service = ItemsService<HttpItemsApi>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to refetch the collection - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to refetch the collection - write
    set_reload_trigger: WriteSignal<u32>,
    /// Client for the items resource
    service: StoredValue<Service>,
}

impl AppContext {
    pub fn new(reload_trigger: (ReadSignal<u32>, WriteSignal<u32>), service: Service) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            service: StoredValue::new(service),
        }
    }

    /// Trigger a refetch of the collection
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Owned handle for use inside `spawn_local`
    pub fn service(&self) -> Service {
        self.service.get_value()
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
