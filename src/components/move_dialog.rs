//! Move Dialog Component
//!
//! Modal for reassigning an item to another folder of the same category,
//! or back to the uncategorized root bucket.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::use_api;
use crate::context::AppContext;
use crate::models::{CaseItem, Folder};
use crate::notify::{close_with_delay, push_toast, DialogState, ToastLevel};
use crate::store::use_app_store;

#[component]
pub fn MoveDialog(
    dialog: ReadSignal<DialogState<CaseItem>>,
    set_dialog: WriteSignal<DialogState<CaseItem>>,
    folders: Signal<Vec<Folder>>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let api = use_api();
    let store = use_app_store();

    // Destination folder id as a string; "" is the root bucket
    let (destination, set_destination) = signal(String::new());

    let (seeded_epoch, set_seeded_epoch) = signal(0u32);
    Effect::new(move |_| {
        let d = dialog.get();
        if !d.is_open() || d.epoch() == seeded_epoch.get_untracked() {
            return;
        }
        set_seeded_epoch.set(d.epoch());
        let current = d
            .payload()
            .and_then(|item| item.folder_id)
            .map(|id| id.to_string())
            .unwrap_or_default();
        set_destination.set(current);
    });

    let do_move = move |_| {
        let Some(item) = dialog.get_untracked().payload().cloned() else {
            return;
        };
        let folder_id = destination.get().parse::<u32>().ok();

        let api = api.get_value();
        spawn_local(async move {
            match api.move_item(item.category(), item.id, folder_id).await {
                Ok(()) => {
                    push_toast(store, ToastLevel::Success, format!("Moved \"{}\"", item.name));
                    ctx.reload();
                }
                Err(_) => push_toast(store, ToastLevel::Error, "Failed to move item"),
            }
        });
        close_with_delay(dialog, set_dialog);
    };

    view! {
        <Show when=move || dialog.get().is_open()>
            <div class="dialog-overlay">
                <div class="dialog move-dialog">
                    <div class="dialog-header">
                        <span class="dialog-title">
                            {move || {
                                dialog
                                    .get()
                                    .payload()
                                    .map(|item| format!("Move \"{}\"", item.name))
                                    .unwrap_or_default()
                            }}
                        </span>
                        <button class="close-btn" on:click=move |_| close_with_delay(dialog, set_dialog)>
                            "×"
                        </button>
                    </div>

                    <label class="form-label">"Destination folder"</label>
                    <select
                        prop:value=move || destination.get()
                        on:change=move |ev| {
                            let target = ev.target().unwrap();
                            let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                            set_destination.set(select.value());
                        }
                    >
                        <option value="">"Uncategorized (root)"</option>
                        <For
                            each=move || folders.get()
                            key=|folder| folder.id
                            children=move |folder| {
                                view! {
                                    <option value=folder.id.to_string()>{folder.name.clone()}</option>
                                }
                            }
                        />
                    </select>

                    <div class="dialog-actions">
                        <button class="primary-btn" on:click=do_move>"Move"</button>
                        <button
                            class="cancel-btn"
                            on:click=move |_| close_with_delay(dialog, set_dialog)
                        >
                            "Cancel"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
