//! Item Form Component
//!
//! Inline form for creating a test artifact in the current folder.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::{use_api, NewItemArgs};
use crate::category::Category;
use crate::context::AppContext;
use crate::notify::{push_toast, ToastLevel};
use crate::store::use_app_store;

#[component]
pub fn ItemForm(
    project_id: u32,
    category: ReadSignal<Category>,
    current_folder: ReadSignal<Option<u32>>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let api = use_api();
    let store = use_app_store();

    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = name.get().trim().to_string();
        if name.is_empty() {
            return;
        }
        let description = description.get().trim().to_string();
        let cat = category.get();
        let folder_id = current_folder.get();

        let api = api.get_value();
        spawn_local(async move {
            let args = NewItemArgs {
                name: &name,
                description: if description.is_empty() { None } else { Some(&description) },
                folder_id,
            };
            match api.create_item(project_id, cat, &args).await {
                Ok(_) => {
                    set_name.set(String::new());
                    set_description.set(String::new());
                    ctx.reload();
                }
                Err(_) => push_toast(store, ToastLevel::Error, "Failed to create item"),
            }
        });
    };

    view! {
        <form class="new-item-form" on:submit=create_item>
            <input
                type="text"
                placeholder=move || format!("Add {}...", category.get().label().to_lowercase())
                prop:value=move || name.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_name.set(input.value());
                }
            />
            <input
                type="text"
                placeholder="Description (optional)"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
