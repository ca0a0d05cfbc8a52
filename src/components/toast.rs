//! Toast Stack Component
//!
//! Renders the global toast queue from the store.

use leptos::prelude::*;

use crate::notify::dismiss_toast;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ToastStack() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="toast-stack">
            <For
                each=move || store.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.level.class()>
                            <span class="toast-message">{toast.message}</span>
                            <button class="toast-dismiss" on:click=move |_| dismiss_toast(store, id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
