//! Item Model
//!
//! Data structures exchanged with the items resource.

use serde::{Deserialize, Serialize};

/// A single entry of the remote collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Server-assigned identifier
    pub id: u32,
    /// User-editable display name
    pub name: String,
}

impl Item {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}

/// Request body for POST and PUT
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemPayload<'a> {
    pub name: &'a str,
}

/// Empty or whitespace-only names are never sent
pub fn is_blank_name(name: &str) -> bool {
    name.trim().is_empty()
}
