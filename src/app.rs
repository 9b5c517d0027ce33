//! Application Shell
//!
//! Two-panel layout: todo lists on the left, items of the selected list on
//! the right, plus the add-item dialog.

use leptos::prelude::*;

use crate::components::{AddItemDialog, ItemsGrid, ListPanel};
use crate::context::AppContext;
use crate::state::NO_LIST;

/// Derive the API root from wherever the app is served.
fn api_base_url() -> String {
    let origin = window()
        .location()
        .origin()
        .unwrap_or_else(|_| "http://localhost:8080".to_string());
    format!("{origin}/api")
}

#[component]
pub fn App() -> impl IntoView {
    // Shell state
    let (selected_list_id, set_selected_list_id) = signal(NO_LIST);
    let (selected_list_name, set_selected_list_name) = signal(String::new());
    let (dialog_visible, set_dialog_visible) = signal(false);
    let items_reload = signal(0u32);

    // Provide clients and the reload channel to all children
    provide_context(AppContext::new(&api_base_url(), items_reload));

    view! {
        <div class="app-layout">
            // Left: todo lists
            <ListPanel
                set_selected_list_id=set_selected_list_id
                set_selected_list_name=set_selected_list_name
            />

            // Right: items of the selected list
            <ItemsGrid
                selected_list_id=selected_list_id
                selected_list_name=selected_list_name
                set_dialog_visible=set_dialog_visible
            />

            <AddItemDialog
                visible=dialog_visible
                list_id=selected_list_id
                set_visible=set_dialog_visible
            />
        </div>
    }
}
