//! API Configuration
//!
//! The bundle has no runtime configuration surface, so the collection URL is
//! fixed at compile time. Set `ITEMS_API_URL` while building to point the
//! client somewhere else.

/// Collection URL used when `ITEMS_API_URL` is not set at build time
pub const DEFAULT_ITEMS_URL: &str = "http://54.83.104.189:3000/items";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// URL of the whole collection (`GET`, `POST`)
    pub fn collection_url(&self) -> &str {
        &self.base_url
    }

    /// URL of a single item (`PUT`, `DELETE`)
    pub fn item_url(&self, id: u32) -> String {
        format!("{}/{}", self.base_url, id)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(option_env!("ITEMS_API_URL").unwrap_or(DEFAULT_ITEMS_URL))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_url() {
        let config = ApiConfig::new("http://localhost:3000/items");
        assert_eq!(config.collection_url(), "http://localhost:3000/items");
        assert_eq!(config.item_url(42), "http://localhost:3000/items/42");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = ApiConfig::new("http://localhost:3000/items/");
        assert_eq!(config.item_url(1), "http://localhost:3000/items/1");
    }

    #[test]
    fn test_default_points_at_items_collection() {
        if option_env!("ITEMS_API_URL").is_none() {
            assert_eq!(ApiConfig::default().collection_url(), DEFAULT_ITEMS_URL);
        }
    }
}
