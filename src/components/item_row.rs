//! Item Row Component
//!
//! Individual entry in the item list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use items_client::Item;

use crate::context::use_app_context;
use crate::store::{store_begin_edit, use_app_store};

/// A single item row with edit/delete controls
#[component]
pub fn ItemRow(item: Item) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let id = item.id;
    let name = item.name.clone();

    let on_delete = move |_: web_sys::MouseEvent| {
        let service = ctx.service();
        spawn_local(async move {
            if let Ok(outcome) = service.remove(id).await {
                if outcome.is_applied() {
                    ctx.reload();
                }
            }
        });
    };

    view! {
        <li class="item-row">
            <span class="item-name">
                {name}
                " "
                <span class="item-id">"#" {id}</span>
            </span>
            <div class="item-actions">
                <button class="edit-btn" on:click=move |_| store_begin_edit(&store, item.clone())>
                    "Edit"
                </button>
                <button class="delete-btn" on:click=on_delete>"Delete"</button>
            </div>
        </li>
    }
}
