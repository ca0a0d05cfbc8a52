//! Testdeck Frontend App
//!
//! Main application component with top-level section navigation.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::ApiClient;
use crate::components::{
    CaseBrowser, Dashboard, NavBar, ProjectList, ReleaseView, Section, ToastStack, UserAdmin,
};
use crate::context::AppContext;
use crate::models::Project;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    // State
    let (section, set_section) = signal(Section::Dashboard);
    let (active_project, set_active_project) = signal::<Option<Project>>(None);
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // Provide context to all children
    provide_context(AppContext::new((reload_trigger, set_reload_trigger)));
    provide_context(Store::new(AppState::new()));
    provide_context(StoredValue::new(ApiClient::from_window()));

    // Leaving the Projects section also leaves any open case browser
    Effect::new(move |_| {
        if section.get() != Section::Projects {
            set_active_project.set(None);
        }
    });

    view! {
        <div class="app-layout">
            <NavBar section=section set_section=set_section />

            <main class="main-content">
                {move || match section.get() {
                    Section::Dashboard => view! { <Dashboard /> }.into_any(),
                    Section::Projects => match active_project.get() {
                        Some(project) => view! {
                            <CaseBrowser
                                project=project
                                on_back=Callback::new(move |_| set_active_project.set(None))
                            />
                        }
                        .into_any(),
                        None => view! {
                            <ProjectList on_open=Callback::new(move |p| set_active_project.set(Some(p))) />
                        }
                        .into_any(),
                    },
                    Section::Users => view! { <UserAdmin /> }.into_any(),
                    Section::Releases => view! { <ReleaseView /> }.into_any(),
                }}
            </main>

            <ToastStack />
        </div>
    }
}
