//! Case Browser Component
//!
//! Folder-organized browser for one project's test artifacts: category
//! tabs, breadcrumb navigation, subfolder pane, search, and per-item
//! move/export/delete operations.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::category::Category;
use crate::components::{Breadcrumb, FolderPane, ItemForm, ItemList, MoveDialog};
use crate::context::AppContext;
use crate::filter::filter_items;
use crate::models::{CaseItem, Folder, Project};
use crate::notify::{push_toast, DialogState, ToastLevel};
use crate::store::use_app_store;
use crate::tree;

#[component]
pub fn CaseBrowser(project: Project, #[prop(into)] on_back: Callback<()>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let api = use_api();
    let store = use_app_store();

    let project_id = project.id;
    let project_name = project.name.clone();

    let (category, set_category) = signal(Category::ActionBased);
    let (folders, set_folders) = signal(Vec::<Folder>::new());
    let (items, set_items) = signal(Vec::<CaseItem>::new());
    let (loading, set_loading) = signal(true);
    let (current_folder, set_current_folder) = signal::<Option<u32>>(None);
    let (search, set_search) = signal(String::new());
    let (move_dialog, set_move_dialog) = signal(DialogState::<CaseItem>::closed());

    // Load folders and items whenever the category or the trigger changes
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let cat = category.get();
        set_loading.set(true);
        let api = api.get_value();
        spawn_local(async move {
            match api.list_folders(project_id, cat).await {
                Ok(loaded) => {
                    // A folder with a foreign or unknown tag would corrupt the
                    // tree; drop it loudly instead of rendering nonsense.
                    let mut kept = Vec::new();
                    for folder in loaded {
                        match Category::parse(&folder.category) {
                            Ok(c) if c == cat => kept.push(folder),
                            Ok(c) => web_sys::console::warn_1(
                                &format!(
                                    "[BROWSER] folder {} belongs to {}, not {}",
                                    folder.id,
                                    c.tag(),
                                    cat.tag()
                                )
                                .into(),
                            ),
                            Err(e) => {
                                web_sys::console::error_1(&format!("[BROWSER] {}", e).into());
                                push_toast(store, ToastLevel::Error, e.to_string());
                            }
                        }
                    }
                    let _ = set_folders.try_set(kept);
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[BROWSER] folders load failed: {}", e).into(),
                    );
                    push_toast(store, ToastLevel::Error, "Failed to load folders");
                }
            }
            match api.list_items(project_id, cat).await {
                Ok(loaded) => {
                    let _ = set_items.try_set(loaded);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[BROWSER] items load failed: {}", e).into());
                    push_toast(store, ToastLevel::Error, "Failed to load items");
                }
            }
            let _ = set_loading.try_set(false);
        });
    });

    // Resolved view of the current folder; None means the hierarchy came
    // back corrupt and only a reload can recover it
    let folder_view = Memo::new(move |_| {
        match tree::resolve(&folders.get(), &items.get(), current_folder.get()) {
            Ok(view) => Some(view),
            Err(e) => {
                web_sys::console::error_1(&format!("[BROWSER] {}", e).into());
                None
            }
        }
    });

    let path = Signal::derive(move || folder_view.get().map(|v| v.path).unwrap_or_default());
    let subfolders =
        Signal::derive(move || folder_view.get().map(|v| v.subfolders).unwrap_or_default());
    let visible_items = Signal::derive(move || match folder_view.get() {
        Some(v) => filter_items(v.items, &search.get()),
        None => Vec::new(),
    });

    let select_category = move |cat: Category| {
        set_category.set(cat);
        set_current_folder.set(None);
        set_search.set(String::new());
    };

    view! {
        <div class="case-browser">
            <div class="browser-header">
                <button class="back-btn" on:click=move |_| on_back.run(())>
                    "← Projects"
                </button>
                <h1>{project_name}</h1>
            </div>

            <div class="category-tab-bar">
                {Category::ALL
                    .iter()
                    .map(|c| {
                        let c = *c;
                        let is_active = move || category.get() == c;
                        view! {
                            <button
                                class=move || if is_active() { "category-tab active" } else { "category-tab" }
                                on:click=move |_| select_category(c)
                            >
                                {c.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <Show when=move || loading.get()>
                <p class="loading">"Loading..."</p>
            </Show>

            <Show when=move || folder_view.get().is_none()>
                <div class="corrupt-banner">
                    <p>"Folder hierarchy is corrupted. Reload to recover."</p>
                    <button on:click=move |_| {
                        set_current_folder.set(None);
                        ctx.reload();
                    }>
                        "Back to root"
                    </button>
                </div>
            </Show>

            <Show when=move || folder_view.get().is_some()>
                <div class="browser-layout">
                    <aside class="browser-sidebar">
                        <FolderPane
                            project_id=project_id
                            category=category
                            current_folder=current_folder
                            set_current_folder=set_current_folder
                            subfolders=subfolders
                        />
                    </aside>

                    <section class="item-area">
                        <Breadcrumb
                            path=path
                            on_navigate=Callback::new(move |target| set_current_folder.set(target))
                        />

                        <input
                            type="text"
                            class="search-input"
                            placeholder="Search by name or description..."
                            prop:value=move || search.get()
                            on:input=move |ev| set_search.set(event_target_value(&ev))
                        />

                        <ItemForm
                            project_id=project_id
                            category=category
                            current_folder=current_folder
                        />

                        <ItemList
                            items=visible_items
                            on_move=Callback::new(move |item: CaseItem| {
                                set_move_dialog.update(|d| d.open(item));
                            })
                        />

                        <p class="item-count">{move || visible_items.get().len()} " items"</p>
                    </section>
                </div>
            </Show>

            <MoveDialog
                dialog=move_dialog
                set_dialog=set_move_dialog
                folders=Signal::from(folders)
            />
        </div>
    }
}
