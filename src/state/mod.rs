//! View-State Machines
//!
//! Plain structs holding each panel's view state and deciding its
//! transitions. The components keep them in reactive signals, run the HTTP
//! calls, and feed results back in — no I/O happens here, so the
//! synchronization rules are unit-testable.

mod add_item_dialog;
mod items_grid;
mod list_panel;

pub use add_item_dialog::{AddItemDialogState, ItemDraft};
pub use items_grid::ItemsGridState;
pub use list_panel::{ListPanelState, SelectionNotice};

/// Sentinel selection id meaning "no list selected".
pub const NO_LIST: i64 = -1;
