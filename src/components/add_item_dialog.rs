//! Add Item Dialog Component
//!
//! Modal form creating one item against the currently selected list. On
//! success the dialog hides itself and bumps the items-reload channel; the
//! created item only shows up in the grid through that reload.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;
use crate::state::AddItemDialogState;

#[component]
pub fn AddItemDialog(
    visible: ReadSignal<bool>,
    list_id: ReadSignal<i64>,
    set_visible: WriteSignal<bool>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let state = RwSignal::new(AddItemDialogState::new());

    // Cancel path: fields reset regardless of any in-flight request.
    let close = move || {
        state.write().reset();
        set_visible.set(false);
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = state.write().begin_submit(list_id.get());
        let Some(draft) = draft else { return };
        spawn_local(async move {
            match ctx
                .items()
                .create(draft.list_id, &draft.title, &draft.description)
                .await
            {
                Ok(item) => {
                    log::info!(
                        target: "add_item_dialog",
                        "created item {} in list {}", item.id, item.list_id
                    );
                    state.write().submit_succeeded();
                    set_visible.set(false);
                    ctx.reload_items();
                }
                Err(err) => {
                    log::error!(target: "add_item_dialog", "creating item failed: {err}");
                    state.write().submit_failed();
                }
            }
        });
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" {
            close();
        }
    };

    view! {
        <Show when=move || visible.get()>
            <div class="dialog-overlay" tabindex="0" on:keydown=on_keydown>
                <div class="dialog">
                    <h3>"Add New Item"</h3>

                    <form on:submit=submit>
                        <input
                            type="text"
                            placeholder="Title"
                            prop:value=move || state.read().title.clone()
                            on:input=move |ev| state.write().title = event_target_value(&ev)
                        />
                        <textarea
                            placeholder="Description (optional)"
                            prop:value=move || state.read().description.clone()
                            on:input=move |ev| {
                                state.write().description = event_target_value(&ev)
                            }
                        ></textarea>

                        {move || {
                            let error = state.read().error.clone();
                            (!error.is_empty()).then(|| view! { <div class="error">{error}</div> })
                        }}

                        <div class="dialog-actions">
                            <button type="submit" disabled=move || state.read().loading>
                                "Create"
                            </button>
                            <button type="button" on:click=move |_| close()>"Cancel"</button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
