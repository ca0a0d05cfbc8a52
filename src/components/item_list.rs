//! Item List Component
//!
//! Rows for the folder-scoped (and search-filtered) items with per-item
//! move, export and delete actions. The export menu keeps its payload
//! readable across the close transition so the format handler can still
//! resolve the item it was opened for.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::use_api;
use crate::category::{export_filename, ExportFormat};
use crate::components::DeleteConfirmButton;
use crate::context::AppContext;
use crate::models::{CaseItem, CasePayload};
use crate::notify::{close_with_delay, push_toast, DialogState, ToastLevel};
use crate::store::use_app_store;

/// Hand the export URL to the browser's download layer
fn trigger_download(url: &str, filename: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(element) = document.create_element("a") else {
        return;
    };
    let Ok(anchor) = element.dyn_into::<web_sys::HtmlAnchorElement>() else {
        return;
    };
    anchor.set_href(url);
    anchor.set_download(filename);
    anchor.click();
}

fn payload_summary(item: &CaseItem) -> String {
    match &item.payload {
        CasePayload::ActionBased { actions } => format!("{} actions", actions.len()),
        CasePayload::Gherkin { scenarios } => format!("{} scenarios", scenarios.len()),
        CasePayload::Traditional { test_cases } => format!("{} cases", test_cases.len()),
    }
}

#[component]
pub fn ItemList(
    items: Signal<Vec<CaseItem>>,
    #[prop(into)] on_move: Callback<CaseItem>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let api = use_api();
    let store = use_app_store();

    let (export_menu, set_export_menu) = signal(DialogState::<CaseItem>::closed());

    view! {
        <div class="item-list">
            <For
                each=move || items.get()
                key=|item| item.id
                children=move |item| {
                    let id = item.id;
                    let category = item.category();
                    let summary = payload_summary(&item);
                    let move_item = item.clone();
                    let export_item = item.clone();

                    let menu_open = move || {
                        let menu = export_menu.get();
                        menu.is_open() && menu.payload().map(|p| p.id) == Some(id)
                    };

                    view! {
                        <div class="item-row">
                            <div class="item-main">
                                <span class="item-name">{item.name.clone()}</span>
                                <span class="item-summary">{summary}</span>
                                <span class="item-description">
                                    {item.description.clone().unwrap_or_default()}
                                </span>
                            </div>
                            <div class="item-actions">
                                <button
                                    class="move-btn"
                                    on:click=move |_| on_move.run(move_item.clone())
                                >
                                    "Move"
                                </button>
                                <button
                                    class="export-btn"
                                    on:click=move |_| {
                                        let item = export_item.clone();
                                        set_export_menu.update(|d| d.open(item));
                                    }
                                >
                                    "Export ▾"
                                </button>
                                <DeleteConfirmButton
                                    button_class="delete-btn"
                                    on_confirm=Callback::new(move |_| {
                                        let api = api.get_value();
                                        spawn_local(async move {
                                            match api.delete_item(category, id).await {
                                                Ok(()) => {
                                                    push_toast(store, ToastLevel::Success, "Item deleted");
                                                    ctx.reload();
                                                }
                                                Err(_) => push_toast(
                                                    store,
                                                    ToastLevel::Error,
                                                    "Failed to delete item",
                                                ),
                                            }
                                        });
                                    })
                                />
                            </div>

                            <Show when=menu_open>
                                <div class="export-menu">
                                    {category
                                        .export_formats()
                                        .iter()
                                        .map(|format| {
                                            let format: ExportFormat = *format;
                                            view! {
                                                <button
                                                    class="export-option"
                                                    on:click=move |ev: web_sys::MouseEvent| {
                                                        ev.stop_propagation();
                                                        // Close first; the payload outlives the
                                                        // transition long enough to read it here
                                                        close_with_delay(export_menu, set_export_menu);
                                                        let menu = export_menu.get_untracked();
                                                        let Some(target) = menu.payload().cloned() else {
                                                            return;
                                                        };
                                                        let url = api.get_value().export_url(
                                                            target.category(),
                                                            target.id,
                                                            format,
                                                        );
                                                        let filename = export_filename(&target.name, format);
                                                        trigger_download(&url, &filename);
                                                    }
                                                >
                                                    {format.label()}
                                                </button>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </Show>
                        </div>
                    }
                }
            />
        </div>
    }
}
