//! Project List Component
//!
//! Project cards with create/edit/delete dialogs. Clicking a card opens the
//! case browser for that project.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::components::{DeleteConfirmButton, ProjectDialog};
use crate::context::AppContext;
use crate::models::Project;
use crate::notify::{push_toast, DialogState, ToastLevel};
use crate::store::use_app_store;

#[component]
pub fn ProjectList(#[prop(into)] on_open: Callback<Project>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let api = use_api();
    let store = use_app_store();

    let (projects, set_projects) = signal::<Option<Vec<Project>>>(None);
    // Payload None = create, Some(project) = edit
    let (dialog, set_dialog) = signal(DialogState::<Option<Project>>::closed());

    // Load projects on mount and on every reload
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let api = api.get_value();
        spawn_local(async move {
            match api.list_projects().await {
                Ok(loaded) => {
                    let _ = set_projects.try_set(Some(loaded));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[PROJECTS] load failed: {}", e).into());
                    push_toast(store, ToastLevel::Error, "Failed to load projects");
                }
            }
        });
    });

    let delete_project = move |id: u32| {
        let api = api.get_value();
        spawn_local(async move {
            match api.delete_project(id).await {
                Ok(()) => {
                    push_toast(store, ToastLevel::Success, "Project deleted");
                    ctx.reload();
                }
                Err(_) => push_toast(store, ToastLevel::Error, "Failed to delete project"),
            }
        });
    };

    view! {
        <div class="project-list">
            <div class="section-header">
                <h1>"Projects"</h1>
                <button
                    class="primary-btn"
                    on:click=move |_| set_dialog.update(|d| d.open(None))
                >
                    "+ New Project"
                </button>
            </div>

            {move || match projects.get() {
                None => view! { <p class="loading">"Loading..."</p> }.into_any(),
                Some(list) => {
                    let count = list.len();
                    view! {
                        <div class="project-grid">
                            <For
                                each=move || list.clone()
                                key=|p| p.id
                                children=move |project| {
                                    let id = project.id;
                                    let open_project = project.clone();
                                    let edit_project = project.clone();
                                    let frameworks = project.ui_config.frameworks.clone();
                                    let primary = project.ui_config.primary_framework.clone();

                                    view! {
                                        <div
                                            class="project-card"
                                            on:click=move |_| on_open.run(open_project.clone())
                                        >
                                            <div class="project-card-header">
                                                <span class="project-name">{project.name.clone()}</span>
                                                <button
                                                    class="edit-btn"
                                                    on:click=move |ev: web_sys::MouseEvent| {
                                                        ev.stop_propagation();
                                                        let p = edit_project.clone();
                                                        set_dialog.update(|d| d.open(Some(p)));
                                                    }
                                                >
                                                    "Edit"
                                                </button>
                                                <DeleteConfirmButton
                                                    button_class="delete-btn"
                                                    on_confirm=Callback::new(move |_| delete_project(id))
                                                />
                                            </div>
                                            <p class="project-description">
                                                {project.description.clone().unwrap_or_default()}
                                            </p>
                                            <div class="framework-badges">
                                                {frameworks
                                                    .iter()
                                                    .map(|fw| {
                                                        let is_primary = primary.as_deref() == Some(fw.as_str());
                                                        let class = if is_primary {
                                                            "framework-badge primary"
                                                        } else {
                                                            "framework-badge"
                                                        };
                                                        view! { <span class=class>{fw.clone()}</span> }
                                                    })
                                                    .collect_view()}
                                            </div>
                                            <span class="case-count">
                                                {project.test_cases.len()} " test cases"
                                            </span>
                                        </div>
                                    }
                                }
                            />
                        </div>
                        <p class="item-count">{count} " projects"</p>
                    }
                    .into_any()
                }
            }}

            <ProjectDialog dialog=dialog set_dialog=set_dialog />
        </div>
    }
}
