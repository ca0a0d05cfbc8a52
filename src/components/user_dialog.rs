//! User Dialog Component
//!
//! Modal form for creating or editing a user account.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{use_api, UserArgs};
use crate::context::AppContext;
use crate::models::{Role, User};
use crate::notify::{close_with_delay, push_toast, DialogState, ToastLevel};
use crate::store::use_app_store;

#[component]
pub fn UserDialog(
    dialog: ReadSignal<DialogState<Option<User>>>,
    set_dialog: WriteSignal<DialogState<Option<User>>>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let api = use_api();
    let store = use_app_store();

    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (role, set_role) = signal(Role::User);
    let (is_active, set_is_active) = signal(true);
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
            Some(Some(u)) => {
                set_username.set(u.username.clone());
                set_email.set(u.email.clone());
                set_role.set(u.role);
                set_is_active.set(u.is_active);
            }
            _ => {
                set_username.set(String::new());
                set_email.set(String::new());
                set_role.set(Role::User);
                set_is_active.set(true);
            }
        }
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let username = username.get().trim().to_string();
        let email = email.get().trim().to_string();
        if username.is_empty() || email.is_empty() {
            set_error.set(Some("Username and email are required".to_string()));
            return;
        }

        let role = role.get();
        let is_active = is_active.get();
        let editing = dialog.get_untracked().payload().cloned().flatten();

        let api = api.get_value();
        spawn_local(async move {
            let args = UserArgs {
                username: &username,
                email: &email,
                role,
                is_active,
            };
            let result = match &editing {
                Some(u) => api.update_user(u.id, &args).await,
                None => api.create_user(&args).await,
            };
            match result {
                Ok(_) => {
                    let verb = if editing.is_some() { "updated" } else { "created" };
                    push_toast(store, ToastLevel::Success, format!("User {}", verb));
                    ctx.reload();
                    close_with_delay(dialog, set_dialog);
                }
                Err(_) => push_toast(store, ToastLevel::Error, "Failed to save user"),
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
                                if editing { "Edit User" } else { "New User" }
                            }}
                        </span>
                        <button class="close-btn" on:click=move |_| close_with_delay(dialog, set_dialog)>
                            "×"
                        </button>
                    </div>

                    <form class="dialog-form" on:submit=submit>
                        {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}

                        <label class="form-label">"Username"</label>
                        <input
                            type="text"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                        />

                        <label class="form-label">"Email"</label>
                        <input
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />

                        <label class="form-label">"Role"</label>
                        <select
                            prop:value=move || match role.get() {
                                Role::User => "user",
                                Role::Admin => "admin",
                            }
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                set_role.set(if value == "admin" { Role::Admin } else { Role::User });
                            }
                        >
                            <option value="user">"User"</option>
                            <option value="admin">"Admin"</option>
                        </select>

                        <label class="framework-check">
                            <input
                                type="checkbox"
                                prop:checked=move || is_active.get()
                                on:change=move |_| set_is_active.update(|v| *v = !*v)
                            />
                            "Active"
                        </label>

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
