//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use items_client::{ApiResult, Item};

/// Page state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// Last successfully fetched collection
    pub items: Vec<Item>,
    /// True until the first list request settles
    pub loading: bool,
    /// Draft held by the inline editor
    pub editing: Option<Item>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            editing: None,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Apply a list result. A failed request keeps the shown list.
pub fn store_apply_loaded(store: &AppStore, result: ApiResult<Vec<Item>>) {
    if let Ok(items) = result {
        *store.items().write() = items;
    }
    if store.loading().get_untracked() {
        store.loading().set(false);
    }
}

/// Start editing a copy of `item`, replacing any open draft
pub fn store_begin_edit(store: &AppStore, item: Item) {
    store.editing().set(Some(item));
}

pub fn store_set_edit_name(store: &AppStore, name: String) {
    if store.editing().with_untracked(|draft| draft.is_none()) {
        return;
    }
    if let Some(draft) = store.editing().write().as_mut() {
        draft.name = name;
    }
}

/// Drop the draft without touching the server
pub fn store_cancel_edit(store: &AppStore) {
    store.editing().set(None);
}

/// Drop the draft once the server accepted it
pub fn store_finish_edit(store: &AppStore) {
    store.editing().set(None);
}
