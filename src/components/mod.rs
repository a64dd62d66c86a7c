//! UI Components
//!
//! Leptos components making up the items page.

mod new_item_form;
mod edit_item_form;
mod item_list;
mod item_row;

pub use new_item_form::NewItemForm;
pub use edit_item_form::EditItemForm;
pub use item_list::ItemList;
pub use item_row::ItemRow;
