//! Right-panel state: the items of the currently selected list.

use todo_api::{RequestError, TodoItem};

#[derive(Debug, Clone, Default)]
pub struct ItemsGridState {
    pub items: Vec<TodoItem>,
    pub loading: bool,
    pub error: String,
    last_selection: Option<i64>,
}

impl ItemsGridState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new value of the selection input.
    ///
    /// Returns the list id to fetch when a reload is needed. Only a genuine
    /// value change triggers a reload, except the very first observed
    /// assignment, which always acts. A non-positive id clears the grid
    /// with no request.
    pub fn selection_changed(&mut self, id: i64) -> Option<i64> {
        if self.last_selection == Some(id) {
            return None;
        }
        self.last_selection = Some(id);
        if id > 0 {
            self.begin_load();
            Some(id)
        } else {
            self.items.clear();
            self.error.clear();
            None
        }
    }

    /// Reload the current selection, e.g. after an item was created
    /// elsewhere. `None` when nothing is selected.
    pub fn force_reload(&mut self) -> Option<i64> {
        let id = self.last_selection.filter(|id| *id > 0)?;
        self.begin_load();
        Some(id)
    }

    fn begin_load(&mut self) {
        self.loading = true;
        self.error.clear();
    }

    pub fn items_loaded(&mut self, items: Vec<TodoItem>) {
        self.items = items;
        self.loading = false;
    }

    pub fn load_failed(&mut self, err: &RequestError) {
        self.error = format!("Failed to load items: {err}");
        self.loading = false;
    }

    /// Replace the toggled item in place, preserving its position. Unknown
    /// ids are ignored.
    pub fn toggle_applied(&mut self, updated: TodoItem) {
        if let Some(slot) = self.items.iter_mut().find(|item| item.id == updated.id) {
            *slot = updated;
        }
    }
}
