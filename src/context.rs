//! Application Context
//!
//! Shared API clients and cross-component signals provided via Leptos
//! Context API.

use leptos::prelude::*;
use todo_api::{ItemClient, ListClient};

/// App-wide context: the two API clients plus the items-reload channel.
///
/// Clients live in `StoredValue` slots so the context stays `Copy` and can
/// be captured freely by event handlers.
#[derive(Clone, Copy)]
pub struct AppContext {
    lists: StoredValue<ListClient>,
    items: StoredValue<ItemClient>,
    /// Bumped when the grid must refetch its current list - read
    pub items_reload: ReadSignal<u32>,
    /// Bumped when the grid must refetch its current list - write
    set_items_reload: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(base_url: &str, items_reload: (ReadSignal<u32>, WriteSignal<u32>)) -> Self {
        Self {
            lists: StoredValue::new(ListClient::new(base_url)),
            items: StoredValue::new(ItemClient::new(base_url)),
            items_reload: items_reload.0,
            set_items_reload: items_reload.1,
        }
    }

    /// Client for `/api/lists`.
    pub fn lists(&self) -> ListClient {
        self.lists.get_value()
    }

    /// Client for `/api/items`.
    pub fn items(&self) -> ItemClient {
        self.items.get_value()
    }

    /// Ask the items grid to reload its current list.
    pub fn reload_items(&self) {
        self.set_items_reload.update(|v| *v += 1);
    }
}
