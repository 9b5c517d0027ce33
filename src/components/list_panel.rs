//! List Panel Component
//!
//! Left panel: scrollable todo lists with a create form. Publishes the
//! selection (id, and name when known) through the parent's write signals.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;
use crate::state::{ListPanelState, SelectionNotice};

#[component]
pub fn ListPanel(
    set_selected_list_id: WriteSignal<i64>,
    set_selected_list_name: WriteSignal<String>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let state = RwSignal::new(ListPanelState::new());

    // Name first, id always - the id notification is unconditional even
    // when the id is unknown locally.
    let publish = move |notice: SelectionNotice| {
        if let Some(name) = notice.name {
            set_selected_list_name.set(name);
        }
        set_selected_list_id.set(notice.id);
    };

    // Load lists on mount
    Effect::new(move |_| {
        state.write().begin_load();
        log::info!(target: "list_panel", "loading todo lists");
        spawn_local(async move {
            match ctx.lists().list_all().await {
                Ok(lists) => {
                    log::info!(target: "list_panel", "loaded {} lists", lists.len());
                    let notice = state.write().lists_loaded(lists);
                    if let Some(notice) = notice {
                        publish(notice);
                    }
                }
                Err(err) => {
                    log::error!(target: "list_panel", "loading lists failed: {err}");
                    state.write().load_failed(&err);
                }
            }
        });
    });

    let add_list = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = state.write().begin_create();
        let Some(name) = name else { return };
        spawn_local(async move {
            match ctx.lists().create(&name).await {
                Ok(list) => {
                    log::info!(target: "list_panel", "created list {} (id {})", list.name, list.id);
                    let notice = state.write().list_created(list);
                    publish(notice);
                }
                Err(err) => {
                    log::error!(target: "list_panel", "creating list failed: {err}");
                    state.write().create_failed();
                }
            }
        });
    };

    view! {
        <div class="list-panel">
            <div class="list-panel-header">"My Lists"</div>

            <form class="new-list-form" on:submit=add_list>
                <input
                    type="text"
                    placeholder="New list name..."
                    prop:value=move || state.read().new_name_draft.clone()
                    on:input=move |ev| state.write().new_name_draft = event_target_value(&ev)
                />
                <button type="submit" disabled=move || state.read().loading>"Add"</button>
            </form>

            {move || {
                let error = state.read().error.clone();
                (!error.is_empty()).then(|| view! { <div class="error">{error}</div> })
            }}

            <Show when=move || state.read().loading>
                <div class="loading">"Loading..."</div>
            </Show>

            <div class="list-rows">
                <For
                    each=move || state.read().lists.clone()
                    key=|list| list.id
                    children=move |list| {
                        let id = list.id;
                        let is_selected = move || state.read().selected_id == id;
                        view! {
                            <div
                                class=move || {
                                    if is_selected() { "list-row selected" } else { "list-row" }
                                }
                                on:click=move |_| {
                                    let notice = state.write().select(id);
                                    publish(notice);
                                }
                            >
                                {list.name.clone()}
                            </div>
                        }
                    }
                />
            </div>

            <Show when=move || !state.read().loading && state.read().lists.is_empty()>
                <div class="empty-message">"No lists yet"</div>
            </Show>
        </div>
    }
}
