//! Folder Pane Component
//!
//! Subfolders of the current folder with inline create, rename and delete.
//! Deleting a folder reparents its children server-side; the tree reflects
//! that after the reload this pane triggers.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::{use_api, FolderArgs};
use crate::category::Category;
use crate::components::DeleteConfirmButton;
use crate::context::AppContext;
use crate::models::Folder;
use crate::notify::{push_toast, ToastLevel};
use crate::store::use_app_store;

#[component]
pub fn FolderPane(
    project_id: u32,
    category: ReadSignal<Category>,
    current_folder: ReadSignal<Option<u32>>,
    set_current_folder: WriteSignal<Option<u32>>,
    subfolders: Signal<Vec<Folder>>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let api = use_api();
    let store = use_app_store();

    let (new_name, set_new_name) = signal(String::new());
    // Which folder is being renamed, and the edit buffer
    let (renaming, set_renaming) = signal::<Option<u32>>(None);
    let (rename_buffer, set_rename_buffer) = signal(String::new());

    let create_folder = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get().trim().to_string();
        if name.is_empty() {
            return;
        }
        let cat = category.get();
        let parent = current_folder.get();
        let api = api.get_value();
        spawn_local(async move {
            let args = FolderArgs {
                name: &name,
                parent_folder_id: parent,
            };
            match api.create_folder(project_id, cat, &args).await {
                Ok(_) => {
                    set_new_name.set(String::new());
                    ctx.reload();
                }
                Err(_) => push_toast(store, ToastLevel::Error, "Failed to create folder"),
            }
        });
    };

    let save_rename = move |id: u32| {
        // Blur can fire after Escape already cancelled the edit
        if renaming.get_untracked() != Some(id) {
            return;
        }
        let name = rename_buffer.get().trim().to_string();
        set_renaming.set(None);
        if name.is_empty() {
            return;
        }
        let api = api.get_value();
        spawn_local(async move {
            match api.rename_folder(id, &name).await {
                Ok(_) => ctx.reload(),
                Err(_) => push_toast(store, ToastLevel::Error, "Failed to rename folder"),
            }
        });
    };

    let delete_folder = move |id: u32| {
        let api = api.get_value();
        spawn_local(async move {
            match api.delete_folder(id).await {
                Ok(()) => {
                    // Children come back reparented on the next reload
                    push_toast(store, ToastLevel::Success, "Folder deleted");
                    ctx.reload();
                }
                Err(_) => push_toast(store, ToastLevel::Error, "Failed to delete folder"),
            }
        });
    };

    view! {
        <div class="folder-pane">
            <div class="sidebar-header">
                <h3>"Folders"</h3>
            </div>

            <ul class="folder-list">
                <For
                    each=move || subfolders.get()
                    key=|folder| folder.id
                    children=move |folder| {
                        let id = folder.id;
                        let name_for_edit = folder.name.clone();
                        let is_renaming = move || renaming.get() == Some(id);

                        view! {
                            <li class="folder-item">
                                {move || if is_renaming() {
                                    view! {
                                        <input
                                            type="text"
                                            class="rename-input"
                                            prop:value=move || rename_buffer.get()
                                            on:input=move |ev| set_rename_buffer.set(event_target_value(&ev))
                                            on:blur=move |_| save_rename(id)
                                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                                if ev.key() == "Enter" {
                                                    ev.prevent_default();
                                                    save_rename(id);
                                                } else if ev.key() == "Escape" {
                                                    set_renaming.set(None);
                                                }
                                            }
                                        />
                                    }
                                    .into_any()
                                } else {
                                    let name = folder.name.clone();
                                    let buffer_seed = name_for_edit.clone();
                                    view! {
                                        <span
                                            class="folder-name"
                                            on:click=move |_| set_current_folder.set(Some(id))
                                        >
                                            <span class="folder-icon">"📁"</span>
                                            {name.clone()}
                                        </span>
                                        <button
                                            class="rename-btn"
                                            on:click=move |ev: web_sys::MouseEvent| {
                                                ev.stop_propagation();
                                                set_rename_buffer.set(buffer_seed.clone());
                                                set_renaming.set(Some(id));
                                            }
                                        >
                                            "✎"
                                        </button>
                                        <DeleteConfirmButton
                                            button_class="delete-folder-btn"
                                            on_confirm=Callback::new(move |_| delete_folder(id))
                                        />
                                    }
                                    .into_any()
                                }}
                            </li>
                        }
                    }
                />
            </ul>

            <form class="new-folder-form" on:submit=create_folder>
                <input
                    type="text"
                    placeholder="New folder..."
                    prop:value=move || new_name.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_new_name.set(input.value());
                    }
                />
                <button type="submit">"+"</button>
            </form>
        </div>
    }
}
