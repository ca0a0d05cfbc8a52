//! Release View Component
//!
//! Release trains with their environments, associated projects and aggregate
//! pass/fail counts. Releases and the available-project list load as two
//! independent tasks; the view joins them at render time.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::components::{DeleteConfirmButton, ReleaseDialog};
use crate::context::AppContext;
use crate::models::{Project, Release};
use crate::notify::{push_toast, DialogState, ToastLevel};
use crate::store::use_app_store;

#[component]
pub fn ReleaseView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let api = use_api();
    let store = use_app_store();

    let (releases, set_releases) = signal::<Option<Vec<Release>>>(None);
    let (projects, set_projects) = signal::<Option<Vec<Project>>>(None);
    let (dialog, set_dialog) = signal(DialogState::<()>::closed());

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();

        let api_releases = api.get_value();
        spawn_local(async move {
            match api_releases.list_releases().await {
                Ok(loaded) => {
                    let _ = set_releases.try_set(Some(loaded));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[RELEASES] load failed: {}", e).into());
                    push_toast(store, ToastLevel::Error, "Failed to load releases");
                }
            }
        });

        let api_projects = api.get_value();
        spawn_local(async move {
            match api_projects.list_projects().await {
                Ok(loaded) => {
                    let _ = set_projects.try_set(Some(loaded));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[RELEASES] projects load failed: {}", e).into());
                    push_toast(store, ToastLevel::Error, "Failed to load projects");
                }
            }
        });
    });

    let delete_release = move |id: u32| {
        let api = api.get_value();
        spawn_local(async move {
            match api.delete_release(id).await {
                Ok(()) => {
                    push_toast(store, ToastLevel::Success, "Release deleted");
                    ctx.reload();
                }
                Err(_) => push_toast(store, ToastLevel::Error, "Failed to delete release"),
            }
        });
    };

    let available_projects = Signal::derive(move || projects.get().unwrap_or_default());

    view! {
        <div class="release-view">
            <div class="section-header">
                <h1>"Releases"</h1>
                <button class="primary-btn" on:click=move |_| set_dialog.update(|d| d.open(()))>
                    "+ New Release"
                </button>
            </div>

            {move || match (releases.get(), projects.get()) {
                (Some(releases), Some(projects)) => {
                    let count = releases.len();
                    view! {
                        <div class="release-list">
                            <For
                                each=move || releases.clone()
                                key=|r| r.id
                                children=move |release| {
                                    let id = release.id;
                                    let total = release.passed + release.failed;
                                    let project_names: Vec<String> = release
                                        .project_ids
                                        .iter()
                                        .filter_map(|pid| {
                                            projects.iter().find(|p| p.id == *pid).map(|p| p.name.clone())
                                        })
                                        .collect();

                                    view! {
                                        <div class="release-card">
                                            <div class="release-card-header">
                                                <span class="release-name">{release.name.clone()}</span>
                                                <DeleteConfirmButton
                                                    button_class="delete-btn"
                                                    on_confirm=Callback::new(move |_| delete_release(id))
                                                />
                                            </div>
                                            <p class="release-description">
                                                {release.description.clone().unwrap_or_default()}
                                            </p>
                                            <div class="env-chips">
                                                {release
                                                    .environments
                                                    .iter()
                                                    .map(|env| view! { <span class="env-chip">{env.clone()}</span> })
                                                    .collect_view()}
                                            </div>
                                            <p class="release-projects">
                                                {if project_names.is_empty() {
                                                    "No projects".to_string()
                                                } else {
                                                    project_names.join(", ")
                                                }}
                                            </p>
                                            <div class="release-counts">
                                                <span class="passed">{release.passed} " passed"</span>
                                                <span class="failed">{release.failed} " failed"</span>
                                                <span class="total">{total} " total"</span>
                                            </div>
                                        </div>
                                    }
                                }
                            />
                        </div>
                        <p class="item-count">{count} " releases"</p>
                    }
                    .into_any()
                }
                _ => view! { <p class="loading">"Loading..."</p> }.into_any(),
            }}

            <ReleaseDialog dialog=dialog set_dialog=set_dialog projects=available_projects />
        </div>
    }
}
