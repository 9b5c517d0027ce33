//! Left-panel state: the list collection, the selection and the new-list
//! form.

use todo_api::{RequestError, TodoList};

use super::NO_LIST;

/// What the panel publishes after a selection change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionNotice {
    /// Published unconditionally, even when the id is unknown locally.
    pub id: i64,
    /// Published only when the id resolves to a loaded list.
    pub name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ListPanelState {
    pub lists: Vec<TodoList>,
    pub selected_id: i64,
    pub new_name_draft: String,
    pub loading: bool,
    pub error: String,
}

impl Default for ListPanelState {
    fn default() -> Self {
        Self::new()
    }
}

impl ListPanelState {
    pub fn new() -> Self {
        Self {
            lists: Vec::new(),
            selected_id: NO_LIST,
            new_name_draft: String::new(),
            loading: false,
            error: String::new(),
        }
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error.clear();
    }

    /// Replace the collection. Auto-selects the first list when nothing was
    /// selected yet, returning the notice to publish.
    pub fn lists_loaded(&mut self, lists: Vec<TodoList>) -> Option<SelectionNotice> {
        self.lists = lists;
        self.loading = false;
        if self.selected_id == NO_LIST {
            let first = self.lists.first()?.id;
            return Some(self.select(first));
        }
        None
    }

    pub fn load_failed(&mut self, err: &RequestError) {
        self.error = format!("Failed to load lists: {err}");
        self.loading = false;
    }

    /// Make `id` the selection. The id need not exist in the local
    /// collection; the notice carries a name only when it does.
    pub fn select(&mut self, id: i64) -> SelectionNotice {
        self.selected_id = id;
        let name = self
            .lists
            .iter()
            .find(|list| list.id == id)
            .map(|list| list.name.clone());
        SelectionNotice { id, name }
    }

    /// Validate the draft and enter the creating state. Returns the name to
    /// send, or `None` when no request should be made. A blank draft sets
    /// the error slot; a creation already in flight is ignored.
    pub fn begin_create(&mut self) -> Option<String> {
        if self.loading {
            return None;
        }
        if self.new_name_draft.trim().is_empty() {
            self.error = "List name cannot be empty".to_string();
            return None;
        }
        self.loading = true;
        self.error.clear();
        Some(self.new_name_draft.clone())
    }

    /// Append the server-created list, clear the draft and select it.
    pub fn list_created(&mut self, list: TodoList) -> SelectionNotice {
        let id = list.id;
        self.lists.push(list);
        self.new_name_draft.clear();
        self.loading = false;
        self.select(id)
    }

    /// The draft is kept so the user can retry.
    pub fn create_failed(&mut self) {
        self.error = "Failed to create list".to_string();
        self.loading = false;
    }
}
