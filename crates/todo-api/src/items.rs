//! Client for the item collection endpoint.

use serde_json::json;

use crate::error::Result;
use crate::http::{normalize_base, read_json};
use crate::models::{CreateItemRequest, TodoItem, UpdateItemRequest};

/// Async client for `/api/items`.
#[derive(Debug, Clone)]
pub struct ItemClient {
    http: reqwest::Client,
    base_url: String,
}

impl ItemClient {
    /// `base_url` is the API root, e.g. `http://localhost:8080/api`.
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: normalize_base(base_url),
        }
    }

    /// Fetch all items belonging to one list.
    pub async fn list_by_list_id(&self, list_id: i64) -> Result<Vec<TodoItem>> {
        let response = self
            .http
            .get(format!("{}/items/list/{list_id}", self.base_url))
            .send()
            .await?;
        read_json(response).await
    }

    /// Fetch a single item by id.
    pub async fn get(&self, id: i64) -> Result<TodoItem> {
        let response = self
            .http
            .get(format!("{}/items/{id}", self.base_url))
            .send()
            .await?;
        read_json(response).await
    }

    /// Create an item in the given list. New items start incomplete.
    pub async fn create(&self, list_id: i64, title: &str, description: &str) -> Result<TodoItem> {
        let response = self
            .http
            .post(format!("{}/items", self.base_url))
            .json(&CreateItemRequest {
                list_id,
                title,
                description,
                completed: false,
            })
            .send()
            .await?;
        read_json(response).await
    }

    /// Replace an item's title, description and completion flag.
    pub async fn update(
        &self,
        id: i64,
        title: &str,
        description: &str,
        completed: bool,
    ) -> Result<TodoItem> {
        let response = self
            .http
            .put(format!("{}/items/{id}", self.base_url))
            .json(&UpdateItemRequest {
                title,
                description,
                completed,
            })
            .send()
            .await?;
        read_json(response).await
    }

    /// Flip an item's completion flag server-side and return the updated
    /// item.
    pub async fn toggle_completion(&self, id: i64) -> Result<TodoItem> {
        let response = self
            .http
            .put(format!("{}/items/{id}/toggle", self.base_url))
            .json(&json!({}))
            .send()
            .await?;
        read_json(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        let client = ItemClient::new("http://localhost:8080/api/");
        assert_eq!(client.base_url, "http://localhost:8080/api");
    }
}
