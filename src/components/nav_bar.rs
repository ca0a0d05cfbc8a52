//! Navigation Bar Component
//!
//! Tab bar for switching between the top-level application sections.

use leptos::prelude::*;

/// Top-level application sections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Dashboard,
    Projects,
    Users,
    Releases,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Dashboard,
        Section::Projects,
        Section::Users,
        Section::Releases,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Projects => "Projects",
            Section::Users => "Users",
            Section::Releases => "Releases",
        }
    }
}

/// Navigation bar component
#[component]
pub fn NavBar(
    section: ReadSignal<Section>,
    set_section: WriteSignal<Section>,
) -> impl IntoView {
    view! {
        <nav class="nav-bar">
            <span class="nav-title">"Testdeck"</span>
            {Section::ALL
                .iter()
                .map(|s| {
                    let s = *s;
                    let is_active = move || section.get() == s;
                    view! {
                        <button
                            class=move || if is_active() { "nav-tab active" } else { "nav-tab" }
                            on:click=move |_| set_section.set(s)
                        >
                            {s.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
