//! Breadcrumb Component
//!
//! Renders the ancestor path of the current folder, root first.

use leptos::prelude::*;

use crate::models::Folder;

#[component]
pub fn Breadcrumb(
    path: Signal<Vec<Folder>>,
    #[prop(into)] on_navigate: Callback<Option<u32>>,
) -> impl IntoView {
    view! {
        <div class="breadcrumb">
            <button class="breadcrumb-link" on:click=move |_| on_navigate.run(None)>
                "Root"
            </button>
            <For
                each=move || path.get()
                key=|folder| folder.id
                children=move |folder| {
                    let id = folder.id;
                    view! {
                        <span class="breadcrumb-sep">"/"</span>
                        <button
                            class="breadcrumb-link"
                            on:click=move |_| on_navigate.run(Some(id))
                        >
                            {folder.name.clone()}
                        </button>
                    }
                }
            />
        </div>
    }
}
