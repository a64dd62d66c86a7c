//! Item List Component
//!
//! Displays the fetched collection, or a placeholder while the first load runs.

use leptos::prelude::*;

use crate::components::ItemRow;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ItemList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <Show
            when=move || !store.loading().get()
            fallback=|| view! { <p class="loading">"Loading items..."</p> }
        >
            <Show
                when=move || store.items().with(|items| !items.is_empty())
                fallback=|| view! { <p class="empty">"No items yet."</p> }
            >
                <ul class="item-list">
                    <For
                        each=move || store.items().get()
                        key=|item| (item.id, item.name.clone())
                        children=move |item| view! { <ItemRow item=item /> }
                    />
                </ul>
            </Show>
        </Show>
    }
}
