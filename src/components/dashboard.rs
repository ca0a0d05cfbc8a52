//! Dashboard Component
//!
//! Landing view joining the project list with per-project run reports. The
//! two fetches run as independent tasks with no ordering between them; the
//! view renders once both have landed.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::context::AppContext;
use crate::models::{Project, ReportSummary};
use crate::notify::{push_toast, ToastLevel};
use crate::store::use_app_store;

#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let api = use_api();
    let store = use_app_store();

    let (projects, set_projects) = signal::<Option<Vec<Project>>>(None);
    let (reports, set_reports) = signal::<Option<Vec<ReportSummary>>>(None);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();

        let api_projects = api.get_value();
        spawn_local(async move {
            match api_projects.list_projects().await {
                Ok(loaded) => {
                    let _ = set_projects.try_set(Some(loaded));
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[DASHBOARD] projects load failed: {}", e).into(),
                    );
                    push_toast(store, ToastLevel::Error, "Failed to load projects");
                }
            }
        });

        let api_reports = api.get_value();
        spawn_local(async move {
            match api_reports.list_reports().await {
                Ok(loaded) => {
                    let _ = set_reports.try_set(Some(loaded));
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[DASHBOARD] reports load failed: {}", e).into(),
                    );
                    push_toast(store, ToastLevel::Error, "Failed to load reports");
                }
            }
        });
    });

    view! {
        <div class="dashboard">
            <h1>"Dashboard"</h1>

            {move || match (projects.get(), reports.get()) {
                (Some(projects), Some(reports)) => {
                    let total_cases: usize = projects.iter().map(|p| p.test_cases.len()).sum();
                    let passed: u32 = reports.iter().map(|r| r.passed).sum();
                    let failed: u32 = reports.iter().map(|r| r.failed).sum();

                    view! {
                        <div class="stat-row">
                            <div class="stat-card">
                                <span class="stat-value">{projects.len()}</span>
                                <span class="stat-label">"Projects"</span>
                            </div>
                            <div class="stat-card">
                                <span class="stat-value">{total_cases}</span>
                                <span class="stat-label">"Test Cases"</span>
                            </div>
                            <div class="stat-card">
                                <span class="stat-value">{passed}</span>
                                <span class="stat-label">"Passed"</span>
                            </div>
                            <div class="stat-card">
                                <span class="stat-value">{failed}</span>
                                <span class="stat-label">"Failed"</span>
                            </div>
                        </div>

                        <h2>"Latest Runs"</h2>
                        <table class="report-table">
                            <thead>
                                <tr>
                                    <th>"Project"</th>
                                    <th>"Total"</th>
                                    <th>"Passed"</th>
                                    <th>"Failed"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {reports
                                    .into_iter()
                                    .map(|r| {
                                        view! {
                                            <tr>
                                                <td>{r.project_name}</td>
                                                <td>{r.total}</td>
                                                <td class="passed">{r.passed}</td>
                                                <td class="failed">{r.failed}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                    .into_any()
                }
                _ => view! { <p class="loading">"Loading..."</p> }.into_any(),
            }}
        </div>
    }
}
