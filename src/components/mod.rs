//! UI Components
//!
//! Reusable Leptos components.

mod breadcrumb;
mod case_browser;
mod dashboard;
mod delete_confirm_button;
mod folder_pane;
mod item_form;
mod item_list;
mod move_dialog;
mod nav_bar;
mod project_dialog;
mod project_list;
mod release_dialog;
mod release_view;
mod toast;
mod user_admin;
mod user_dialog;

pub use breadcrumb::Breadcrumb;
pub use case_browser::CaseBrowser;
pub use dashboard::Dashboard;
pub use delete_confirm_button::DeleteConfirmButton;
pub use folder_pane::FolderPane;
pub use item_form::ItemForm;
pub use item_list::ItemList;
pub use move_dialog::MoveDialog;
pub use nav_bar::{NavBar, Section};
pub use project_dialog::ProjectDialog;
pub use project_list::ProjectList;
pub use release_dialog::ReleaseDialog;
pub use release_view::ReleaseView;
pub use toast::ToastStack;
pub use user_admin::UserAdmin;
pub use user_dialog::UserDialog;
