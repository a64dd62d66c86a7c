//! Items Frontend App
//!
//! Main application component: add form, inline editor and item list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use items_client::{HttpItemsApi, ItemsService};

use crate::context::AppContext;
use crate::store::{store_apply_loaded, AppState, AppStateStoreFields};
use crate::components::{NewItemForm, EditItemForm, ItemList};

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(AppState::new());
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    let ctx = AppContext::new(
        (reload_trigger, set_reload_trigger),
        ItemsService::new(HttpItemsApi::default()),
    );

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Refetch the collection on mount and after every successful write
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        let service = ctx.service();
        log::debug!("[APP] Loading items, trigger={}", trigger);
        spawn_local(async move {
            let result = service.load().await;
            store_apply_loaded(&store, result);
        });
    });

    view! {
        <main class="page">
            <div class="card">
                <h1>"Items"</h1>

                <NewItemForm />

                <EditItemForm />

                <ItemList />

                <Show when=move || !store.loading().get()>
                    <p class="item-count">{move || format!("{} items", store.items().with(|items| items.len()))}</p>
                </Show>
            </div>
        </main>
    }
}
