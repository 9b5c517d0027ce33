//! Items Grid Component
//!
//! Right panel: the items of the currently selected list, with completion
//! checkboxes and the Add Item entry point.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;
use crate::state::ItemsGridState;

#[component]
pub fn ItemsGrid(
    selected_list_id: ReadSignal<i64>,
    selected_list_name: ReadSignal<String>,
    set_dialog_visible: WriteSignal<bool>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let state = RwSignal::new(ItemsGridState::new());

    let load = move |list_id: i64| {
        log::info!(target: "items_grid", "loading items for list {list_id}");
        spawn_local(async move {
            match ctx.items().list_by_list_id(list_id).await {
                Ok(items) => {
                    log::info!(target: "items_grid", "loaded {} items", items.len());
                    state.write().items_loaded(items);
                }
                Err(err) => {
                    log::error!(target: "items_grid", "loading items failed: {err}");
                    state.write().load_failed(&err);
                }
            }
        });
    };

    // React to selection changes, including the first assignment. The state
    // machine decides whether this means a fetch, a clear, or nothing.
    Effect::new(move |_| {
        let id = selected_list_id.get();
        let reload = state.write().selection_changed(id);
        if let Some(list_id) = reload {
            load(list_id);
        }
    });

    // Forced reload channel: bumped after an item is created. The initial
    // run only observes the epoch.
    let items_reload = ctx.items_reload;
    Effect::new(move |prev: Option<u32>| {
        let epoch = items_reload.get();
        if prev.is_some() {
            let reload = state.write().force_reload();
            if let Some(list_id) = reload {
                load(list_id);
            }
        }
        epoch
    });

    let toggle = move |item_id: i64| {
        spawn_local(async move {
            match ctx.items().toggle_completion(item_id).await {
                Ok(updated) => state.write().toggle_applied(updated),
                Err(err) => {
                    log::error!(target: "items_grid", "toggling item {item_id} failed: {err}");
                }
            }
        });
    };

    view! {
        <div class="items-panel">
            <div class="items-header">
                <h2>{move || selected_list_name.get()}</h2>
                <button
                    class="add-item-btn"
                    disabled=move || { selected_list_id.get() <= 0 }
                    on:click=move |_| set_dialog_visible.set(true)
                >
                    "Add Item"
                </button>
            </div>

            {move || {
                let error = state.read().error.clone();
                (!error.is_empty()).then(|| view! { <div class="error">{error}</div> })
            }}

            <Show when=move || state.read().loading>
                <div class="loading">"Loading..."</div>
            </Show>

            <table class="items-grid">
                <thead>
                    <tr>
                        <th class="col-done">"Done"</th>
                        <th>"Title"</th>
                        <th>"Description"</th>
                    </tr>
                </thead>
                <tbody>
                    // Key includes the completion flag so a toggled row is
                    // re-rendered in place.
                    <For
                        each=move || state.read().items.clone()
                        key=|item| (item.id, item.completed)
                        children=move |item| {
                            let id = item.id;
                            let completed = item.completed;
                            view! {
                                <tr class=move || {
                                    if completed { "item-row done" } else { "item-row" }
                                }>
                                    <td class="col-done">
                                        <input
                                            type="checkbox"
                                            prop:checked=completed
                                            on:change=move |_| toggle(id)
                                        />
                                    </td>
                                    <td class="item-title">{item.title.clone()}</td>
                                    <td class="item-description">{item.description.clone()}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <Show when=move || {
                selected_list_id.get() > 0 && !state.read().loading
                    && state.read().items.is_empty()
            }>
                <div class="empty-message">"No items in this list"</div>
            </Show>

            <Show when=move || { selected_list_id.get() <= 0 }>
                <div class="empty-message">"Select a list to see its items"</div>
            </Show>
        </div>
    }
}
