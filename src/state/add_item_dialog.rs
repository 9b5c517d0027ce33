//! Add-item form state.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    pub list_id: i64,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default)]
pub struct AddItemDialogState {
    pub title: String,
    pub description: String,
    pub loading: bool,
    pub error: String,
}

impl AddItemDialogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the form against the current selection. Returns the draft
    /// to send, or `None` when no request should be made.
    pub fn begin_submit(&mut self, list_id: i64) -> Option<ItemDraft> {
        if self.title.trim().is_empty() {
            self.error = "Title is required".to_string();
            return None;
        }
        if list_id <= 0 {
            self.error = "No list selected".to_string();
            return None;
        }
        self.loading = true;
        self.error.clear();
        Some(ItemDraft {
            list_id,
            title: self.title.clone(),
            description: self.description.clone(),
        })
    }

    pub fn submit_succeeded(&mut self) {
        self.reset();
    }

    /// Fields are kept so the user can retry; the dialog stays open.
    pub fn submit_failed(&mut self) {
        self.error = "Failed to create item".to_string();
        self.loading = false;
    }

    /// Back to defaults. Used on success and on cancel, regardless of any
    /// in-flight request.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_title_is_rejected_without_a_request() {
        let mut state = AddItemDialogState::new();
        state.title = "  ".to_string();
        assert_eq!(state.begin_submit(1), None);
        assert_eq!(state.error, "Title is required");
        assert!(!state.loading);
    }

    #[test]
    fn missing_selection_is_rejected() {
        let mut state = AddItemDialogState::new();
        state.title = "Buy milk".to_string();
        assert_eq!(state.begin_submit(-1), None);
        assert_eq!(state.error, "No list selected");
    }

    #[test]
    fn valid_form_produces_a_draft() {
        let mut state = AddItemDialogState::new();
        state.title = "Buy milk".to_string();
        state.description = "2 liters".to_string();

        let draft = state.begin_submit(7).unwrap();
        assert_eq!(
            draft,
            ItemDraft {
                list_id: 7,
                title: "Buy milk".to_string(),
                description: "2 liters".to_string(),
            }
        );
        assert!(state.loading);
        assert_eq!(state.error, "");
    }

    #[test]
    fn success_resets_every_field() {
        let mut state = AddItemDialogState::new();
        state.title = "Buy milk".to_string();
        state.description = "2 liters".to_string();
        state.begin_submit(7).unwrap();

        state.submit_succeeded();
        assert_eq!(state.title, "");
        assert_eq!(state.description, "");
        assert!(!state.loading);
        assert_eq!(state.error, "");
    }

    #[test]
    fn failure_keeps_the_fields_for_retry() {
        let mut state = AddItemDialogState::new();
        state.title = "Buy milk".to_string();
        state.begin_submit(7).unwrap();

        state.submit_failed();
        assert_eq!(state.error, "Failed to create item");
        assert_eq!(state.title, "Buy milk");
        assert!(!state.loading);
    }

    #[test]
    fn cancel_resets_even_while_loading() {
        let mut state = AddItemDialogState::new();
        state.title = "Buy milk".to_string();
        state.begin_submit(7).unwrap();
        assert!(state.loading);

        state.reset();
        assert_eq!(state.title, "");
        assert!(!state.loading);
    }
}
