//! User Administration Component
//!
//! Admin-only CRUD over user accounts: create/edit dialog, activation
//! toggle, password reset. The backend rejects non-admin callers; a 403
//! surfaces here as an error toast.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{use_api, UserArgs};
use crate::components::{DeleteConfirmButton, UserDialog};
use crate::context::AppContext;
use crate::models::User;
use crate::notify::{push_toast, DialogState, ToastLevel};
use crate::store::use_app_store;

#[component]
pub fn UserAdmin() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let api = use_api();
    let store = use_app_store();

    let (users, set_users) = signal::<Option<Vec<User>>>(None);
    let (dialog, set_dialog) = signal(DialogState::<Option<User>>::closed());

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let api = api.get_value();
        spawn_local(async move {
            match api.list_users().await {
                Ok(loaded) => {
                    let _ = set_users.try_set(Some(loaded));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[USERS] load failed: {}", e).into());
                    push_toast(store, ToastLevel::Error, "Failed to load users");
                }
            }
        });
    });

    let toggle_active = move |user: User| {
        let api = api.get_value();
        spawn_local(async move {
            let args = UserArgs {
                username: &user.username,
                email: &user.email,
                role: user.role,
                is_active: !user.is_active,
            };
            match api.update_user(user.id, &args).await {
                Ok(_) => ctx.reload(),
                Err(_) => push_toast(store, ToastLevel::Error, "Failed to update user"),
            }
        });
    };

    let reset_password = move |user: User| {
        let api = api.get_value();
        spawn_local(async move {
            match api.reset_password(user.id).await {
                Ok(()) => push_toast(
                    store,
                    ToastLevel::Success,
                    format!("Password reset sent to {}", user.email),
                ),
                Err(_) => push_toast(store, ToastLevel::Error, "Failed to reset password"),
            }
        });
    };

    let delete_user = move |id: u32| {
        let api = api.get_value();
        spawn_local(async move {
            match api.delete_user(id).await {
                Ok(()) => {
                    push_toast(store, ToastLevel::Success, "User deleted");
                    ctx.reload();
                }
                Err(_) => push_toast(store, ToastLevel::Error, "Failed to delete user"),
            }
        });
    };

    view! {
        <div class="user-admin">
            <div class="section-header">
                <h1>"Users"</h1>
                <button class="primary-btn" on:click=move |_| set_dialog.update(|d| d.open(None))>
                    "+ New User"
                </button>
            </div>

            {move || match users.get() {
                None => view! { <p class="loading">"Loading..."</p> }.into_any(),
                Some(list) => {
                    let count = list.len();
                    view! {
                        <table class="user-table">
                            <thead>
                                <tr>
                                    <th>"Username"</th>
                                    <th>"Email"</th>
                                    <th>"Role"</th>
                                    <th>"Status"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || list.clone()
                                    key=|u| u.id
                                    children=move |user| {
                                        let id = user.id;
                                        let edit_user = user.clone();
                                        let toggle_user = user.clone();
                                        let reset_user = user.clone();
                                        let toggle_label = if user.is_active { "Deactivate" } else { "Activate" };

                                        view! {
                                            <tr class=if user.is_active { "user-row" } else { "user-row inactive" }>
                                                <td>{user.username.clone()}</td>
                                                <td>{user.email.clone()}</td>
                                                <td>
                                                    <span class=format!("role-badge {}", user.role.label().to_lowercase())>
                                                        {user.role.label()}
                                                    </span>
                                                </td>
                                                <td>{if user.is_active { "Active" } else { "Inactive" }}</td>
                                                <td class="user-actions">
                                                    <button
                                                        class="edit-btn"
                                                        on:click=move |_| {
                                                            let u = edit_user.clone();
                                                            set_dialog.update(|d| d.open(Some(u)));
                                                        }
                                                    >
                                                        "Edit"
                                                    </button>
                                                    <button
                                                        class="toggle-btn"
                                                        on:click=move |_| toggle_active(toggle_user.clone())
                                                    >
                                                        {toggle_label}
                                                    </button>
                                                    <button
                                                        class="reset-btn"
                                                        on:click=move |_| reset_password(reset_user.clone())
                                                    >
                                                        "Reset password"
                                                    </button>
                                                    <DeleteConfirmButton
                                                        button_class="delete-btn"
                                                        on_confirm=Callback::new(move |_| delete_user(id))
                                                    />
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                        <p class="item-count">{count} " users"</p>
                    }
                    .into_any()
                }
            }}

            <UserDialog dialog=dialog set_dialog=set_dialog />
        </div>
    }
}
