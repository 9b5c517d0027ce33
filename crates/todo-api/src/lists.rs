//! Client for the list collection endpoint.

use crate::error::Result;
use crate::http::{normalize_base, read_json};
use crate::models::{CreateListRequest, TodoList};

/// Async client for `/api/lists`.
#[derive(Debug, Clone)]
pub struct ListClient {
    http: reqwest::Client,
    base_url: String,
}

impl ListClient {
    /// `base_url` is the API root, e.g. `http://localhost:8080/api`.
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: normalize_base(base_url),
        }
    }

    /// Fetch every todo list.
    pub async fn list_all(&self) -> Result<Vec<TodoList>> {
        let response = self
            .http
            .get(format!("{}/lists", self.base_url))
            .send()
            .await?;
        read_json(response).await
    }

    /// Create a list with the given name. The server assigns the id.
    pub async fn create(&self, name: &str) -> Result<TodoList> {
        let response = self
            .http
            .post(format!("{}/lists", self.base_url))
            .json(&CreateListRequest { name })
            .send()
            .await?;
        read_json(response).await
    }
}
