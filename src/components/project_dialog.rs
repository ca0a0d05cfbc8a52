//! Project Dialog Component
//!
//! Modal form for creating or editing a project: name, description, base
//! URL, runner credentials and framework selection.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::{use_api, ProjectArgs};
use crate::context::AppContext;
use crate::models::{Project, UiConfig};
use crate::notify::{close_with_delay, push_toast, DialogState, ToastLevel};
use crate::store::use_app_store;

/// Automation frameworks a project can enable
const FRAMEWORKS: &[&str] = &["selenium", "playwright", "cypress", "appium"];

fn non_blank(s: &str) -> Option<&str> {
    let s = s.trim();
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

#[component]
pub fn ProjectDialog(
    dialog: ReadSignal<DialogState<Option<Project>>>,
    set_dialog: WriteSignal<DialogState<Option<Project>>>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let api = use_api();
    let store = use_app_store();

    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (base_url, set_base_url) = signal(String::new());
    let (test_username, set_test_username) = signal(String::new());
    let (test_password, set_test_password) = signal(String::new());
    let (frameworks, set_frameworks) = signal(Vec::<String>::new());
    let (primary, set_primary) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    // Seed the form whenever the dialog opens on a new target
    let (seeded_epoch, set_seeded_epoch) = signal(0u32);
    Effect::new(move |_| {
        let d = dialog.get();
        if !d.is_open() || d.epoch() == seeded_epoch.get_untracked() {
            return;
        }
        set_seeded_epoch.set(d.epoch());
        set_error.set(None);
        match d.payload() {
            Some(Some(p)) => {
                set_name.set(p.name.clone());
                set_description.set(p.description.clone().unwrap_or_default());
                set_base_url.set(p.base_url.clone().unwrap_or_default());
                set_test_username.set(p.test_username.clone().unwrap_or_default());
                set_test_password.set(p.test_password.clone().unwrap_or_default());
                set_frameworks.set(p.ui_config.frameworks.clone());
                set_primary.set(p.ui_config.primary_framework.clone().unwrap_or_default());
            }
            _ => {
                set_name.set(String::new());
                set_description.set(String::new());
                set_base_url.set(String::new());
                set_test_username.set(String::new());
                set_test_password.set(String::new());
                set_frameworks.set(Vec::new());
                set_primary.set(String::new());
            }
        }
    });

    let toggle_framework = move |fw: &str| {
        let fw = fw.to_string();
        set_frameworks.update(|list| {
            if let Some(pos) = list.iter().position(|f| *f == fw) {
                list.remove(pos);
                // The primary must stay within the selected set
                if primary.get_untracked() == fw {
                    set_primary.set(String::new());
                }
            } else {
                list.push(fw);
            }
        });
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = name.get().trim().to_string();
        if name.is_empty() {
            set_error.set(Some("Project name is required".to_string()));
            return;
        }

        let description = description.get();
        let base_url = base_url.get();
        let test_username = test_username.get();
        let test_password = test_password.get();
        let ui_config = UiConfig {
            frameworks: frameworks.get(),
            primary_framework: non_blank(&primary.get()).map(|s| s.to_string()),
        };
        let editing = dialog.get_untracked().payload().cloned().flatten();

        let api = api.get_value();
        spawn_local(async move {
            let args = ProjectArgs {
                name: &name,
                description: non_blank(&description),
                base_url: non_blank(&base_url),
                test_username: non_blank(&test_username),
                test_password: non_blank(&test_password),
                ui_config: &ui_config,
            };
            let result = match &editing {
                Some(p) => api.update_project(p.id, &args).await,
                None => api.create_project(&args).await,
            };
            match result {
                Ok(_) => {
                    let verb = if editing.is_some() { "updated" } else { "created" };
                    push_toast(store, ToastLevel::Success, format!("Project {}", verb));
                    ctx.reload();
                    close_with_delay(dialog, set_dialog);
                }
                Err(_) => push_toast(store, ToastLevel::Error, "Failed to save project"),
            }
        });
    };

    view! {
        <Show when=move || dialog.get().is_open()>
            <div class="dialog-overlay">
                <div class="dialog">
                    <div class="dialog-header">
                        <span class="dialog-title">
                            {move || {
                                let editing = dialog.get().payload().cloned().flatten().is_some();
                                if editing { "Edit Project" } else { "New Project" }
                            }}
                        </span>
                        <button class="close-btn" on:click=move |_| close_with_delay(dialog, set_dialog)>
                            "×"
                        </button>
                    </div>

                    <form class="dialog-form" on:submit=submit>
                        {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}

                        <label class="form-label">"Name"</label>
                        <input
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />

                        <label class="form-label">"Description"</label>
                        <textarea
                            prop:value=move || description.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                                set_description.set(input.value());
                            }
                        ></textarea>

                        <label class="form-label">"Base URL"</label>
                        <input
                            type="text"
                            placeholder="https://staging.example.com"
                            prop:value=move || base_url.get()
                            on:input=move |ev| set_base_url.set(event_target_value(&ev))
                        />

                        <div class="form-row">
                            <div>
                                <label class="form-label">"Test username"</label>
                                <input
                                    type="text"
                                    prop:value=move || test_username.get()
                                    on:input=move |ev| set_test_username.set(event_target_value(&ev))
                                />
                            </div>
                            <div>
                                <label class="form-label">"Test password"</label>
                                <input
                                    type="password"
                                    prop:value=move || test_password.get()
                                    on:input=move |ev| set_test_password.set(event_target_value(&ev))
                                />
                            </div>
                        </div>

                        <label class="form-label">"Frameworks"</label>
                        <div class="framework-checks">
                            {FRAMEWORKS
                                .iter()
                                .map(|fw| {
                                    let fw = *fw;
                                    let checked = move || frameworks.get().iter().any(|f| f == fw);
                                    view! {
                                        <label class="framework-check">
                                            <input
                                                type="checkbox"
                                                prop:checked=checked
                                                on:change=move |_| toggle_framework(fw)
                                            />
                                            {fw}
                                        </label>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <label class="form-label">"Primary framework"</label>
                        <select
                            prop:value=move || primary.get()
                            on:change=move |ev| set_primary.set(event_target_value(&ev))
                        >
                            <option value="">"(none)"</option>
                            {move || {
                                frameworks
                                    .get()
                                    .into_iter()
                                    .map(|fw| view! { <option value=fw.clone()>{fw.clone()}</option> })
                                    .collect_view()
                            }}
                        </select>

                        <div class="dialog-actions">
                            <button type="submit" class="primary-btn">"Save"</button>
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
