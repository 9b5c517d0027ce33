//! Wire types for the todo backend.
//!
//! Field names follow the backend's JSON contract, which is camelCase for
//! multi-word fields (`listId`).

use serde::{Deserialize, Serialize};

/// A named container grouping zero or more items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    pub id: i64,
    pub name: String,
}

/// A unit of work belonging to exactly one list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: i64,
    pub list_id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub completed: bool,
}

/// Body of `POST /api/lists`.
#[derive(Debug, Serialize)]
pub struct CreateListRequest<'a> {
    pub name: &'a str,
}

/// Body of `POST /api/items`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemRequest<'a> {
    pub list_id: i64,
    pub title: &'a str,
    pub description: &'a str,
    pub completed: bool,
}

/// Body of `PUT /api/items/{id}`.
#[derive(Debug, Serialize)]
pub struct UpdateItemRequest<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_uses_camel_case_on_the_wire() {
        let item = TodoItem {
            id: 1,
            list_id: 2,
            title: "Buy milk".to_string(),
            description: String::new(),
            completed: false,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["listId"], 2);
        assert!(json.get("list_id").is_none());
    }

    #[test]
    fn item_description_defaults_to_empty() {
        let item: TodoItem = serde_json::from_str(
            r#"{"id":1,"listId":2,"title":"Buy milk","completed":false}"#,
        )
        .unwrap();
        assert_eq!(item.description, "");
    }

    #[test]
    fn create_item_request_serializes_camel_case() {
        let body = CreateItemRequest {
            list_id: 7,
            title: "Call dentist",
            description: "",
            completed: false,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["listId"], 7);
        assert_eq!(json["completed"], false);
    }

    #[test]
    fn list_roundtrips_through_json() {
        let list = TodoList {
            id: 3,
            name: "Groceries".to_string(),
        };
        let json = serde_json::to_string(&list).unwrap();
        let back: TodoList = serde_json::from_str(&json).unwrap();
        assert_eq!(back, list);
    }
}
