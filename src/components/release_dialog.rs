//! Release Dialog Component
//!
//! Modal form for creating a release: name, environments and the projects
//! tracked by the release train.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{use_api, ReleaseArgs};
use crate::context::AppContext;
use crate::models::Project;
use crate::notify::{close_with_delay, push_toast, DialogState, ToastLevel};
use crate::store::use_app_store;

#[component]
pub fn ReleaseDialog(
    dialog: ReadSignal<DialogState<()>>,
    set_dialog: WriteSignal<DialogState<()>>,
    projects: Signal<Vec<Project>>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let api = use_api();
    let store = use_app_store();

    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (environments, set_environments) = signal(String::new());
    let (selected_projects, set_selected_projects) = signal(Vec::<u32>::new());
    let (error, set_error) = signal::<Option<String>>(None);

    // Reset the form on every open
    let (seeded_epoch, set_seeded_epoch) = signal(0u32);
    Effect::new(move |_| {
        let d = dialog.get();
        if !d.is_open() || d.epoch() == seeded_epoch.get_untracked() {
            return;
        }
        set_seeded_epoch.set(d.epoch());
        set_error.set(None);
        set_name.set(String::new());
        set_description.set(String::new());
        set_environments.set(String::new());
        set_selected_projects.set(Vec::new());
    });

    let toggle_project = move |id: u32| {
        set_selected_projects.update(|list| {
            if let Some(pos) = list.iter().position(|p| *p == id) {
                list.remove(pos);
            } else {
                list.push(id);
            }
        });
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = name.get().trim().to_string();
        if name.is_empty() {
            set_error.set(Some("Release name is required".to_string()));
            return;
        }

        let description = description.get().trim().to_string();
        let environments: Vec<String> = environments
            .get()
            .split(',')
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .collect();
        let project_ids = selected_projects.get();

        let api = api.get_value();
        spawn_local(async move {
            let args = ReleaseArgs {
                name: &name,
                description: if description.is_empty() { None } else { Some(&description) },
                environments: &environments,
                project_ids: &project_ids,
            };
            match api.create_release(&args).await {
                Ok(_) => {
                    push_toast(store, ToastLevel::Success, "Release created");
                    ctx.reload();
                    close_with_delay(dialog, set_dialog);
                }
                Err(_) => push_toast(store, ToastLevel::Error, "Failed to create release"),
            }
        });
    };

    view! {
        <Show when=move || dialog.get().is_open()>
            <div class="dialog-overlay">
                <div class="dialog">
                    <div class="dialog-header">
                        <span class="dialog-title">"New Release"</span>
                        <button class="close-btn" on:click=move |_| close_with_delay(dialog, set_dialog)>
                            "×"
                        </button>
                    </div>

                    <form class="dialog-form" on:submit=submit>
                        {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}

                        <label class="form-label">"Name"</label>
                        <input
                            type="text"
                            placeholder="2026.08"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />

                        <label class="form-label">"Description"</label>
                        <input
                            type="text"
                            prop:value=move || description.get()
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                        />

                        <label class="form-label">"Environments (comma-separated)"</label>
                        <input
                            type="text"
                            placeholder="staging, production"
                            prop:value=move || environments.get()
                            on:input=move |ev| set_environments.set(event_target_value(&ev))
                        />

                        <label class="form-label">"Projects"</label>
                        <div class="project-checks">
                            <For
                                each=move || projects.get()
                                key=|p| p.id
                                children=move |project| {
                                    let id = project.id;
                                    let checked = move || selected_projects.get().contains(&id);
                                    view! {
                                        <label class="framework-check">
                                            <input
                                                type="checkbox"
                                                prop:checked=checked
                                                on:change=move |_| toggle_project(id)
                                            />
                                            {project.name.clone()}
                                        </label>
                                    }
                                }
                            />
                        </div>

                        <div class="dialog-actions">
                            <button type="submit" class="primary-btn">"Create"</button>
                            <button
                                type="button"
                                class="cancel-btn"
                                on:click=move |_| close_with_delay(dialog, set_dialog)
                            >
                                "Cancel"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
