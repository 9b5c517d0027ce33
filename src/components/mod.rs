//! UI Components
//!
//! The three panels of the todo client.

mod add_item_dialog;
mod items_grid;
mod list_panel;

pub use add_item_dialog::AddItemDialog;
pub use items_grid::ItemsGrid;
pub use list_panel::ListPanel;
