//! REST API Bindings
//!
//! Frontend bindings to the backend REST API over `fetch`. All calls resolve
//! to `Result<T, String>` at the component boundary; the bearer token and
//! base URL travel inside an explicit `ApiClient` instead of being read from
//! shared storage ad hoc.

use leptos::prelude::{expect_context, StoredValue};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::category::{Category, ExportFormat};
use crate::models::{CaseItem, Folder, Project, Release, ReportSummary, UiConfig, User, Role};

/// Storage key the login flow leaves the bearer token under
const TOKEN_STORAGE_KEY: &str = "auth_token";

fn js_err(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

/// Backend client: base URL plus the bearer token captured at startup
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

/// Get the API client handle from context. The handle is `Copy`, so event
/// handlers capture it freely; `get_value()` yields the client itself.
pub fn use_api() -> StoredValue<ApiClient> {
    expect_context::<StoredValue<ApiClient>>()
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token,
        }
    }

    /// Build a same-origin client with the token from browser local storage
    pub fn from_window() -> Self {
        let token = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(TOKEN_STORAGE_KEY).ok().flatten());
        Self::new("", token)
    }

    async fn send(
        &self,
        method: &str,
        path: &str,
        body: Option<String>,
    ) -> Result<web_sys::Response, String> {
        let url = format!("{}{}", self.base_url, path);

        let init = web_sys::RequestInit::new();
        init.set_method(method);

        let headers = web_sys::Headers::new().map_err(js_err)?;
        if body.is_some() {
            headers.set("Content-Type", "application/json").map_err(js_err)?;
        }
        // The bearer token rides on mutating calls only
        if method != "GET" {
            if let Some(token) = &self.token {
                headers
                    .set("Authorization", &format!("Bearer {}", token))
                    .map_err(js_err)?;
            }
        }
        init.set_headers(headers.as_ref());
        if let Some(body) = body {
            init.set_body(&JsValue::from_str(&body));
        }

        let request = web_sys::Request::new_with_str_and_init(&url, &init).map_err(js_err)?;
        let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
        let resp = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_err)?;
        let resp: web_sys::Response = resp
            .dyn_into()
            .map_err(|_| "fetch returned a non-Response value".to_string())?;

        if !resp.ok() {
            let err = format!("HTTP {} for {} {}", resp.status(), method, path);
            web_sys::console::error_1(&format!("[API] {}", err).into());
            return Err(err);
        }
        Ok(resp)
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        method: &str,
        path: &str,
        body: Option<String>,
    ) -> Result<T, String> {
        let resp = self.send(method, path, body).await?;
        let promise: js_sys::Promise = resp.json().map_err(js_err)?;
        let value = JsFuture::from(promise).await.map_err(js_err)?;
        serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())
    }

    async fn fetch_unit(&self, method: &str, path: &str, body: Option<String>) -> Result<(), String> {
        self.send(method, path, body).await.map(|_| ())
    }

    fn encode<B: Serialize>(args: &B) -> Result<Option<String>, String> {
        serde_json::to_string(args).map(Some).map_err(|e| e.to_string())
    }

    // ========================
    // Projects
    // ========================

    pub async fn list_projects(&self) -> Result<Vec<Project>, String> {
        self.fetch_json("GET", "/api/projects", None).await
    }

    pub async fn get_project(&self, id: u32) -> Result<Project, String> {
        self.fetch_json("GET", &format!("/api/projects/{}", id), None).await
    }

    pub async fn create_project(&self, args: &ProjectArgs<'_>) -> Result<Project, String> {
        self.fetch_json("POST", "/api/projects", Self::encode(args)?).await
    }

    pub async fn update_project(&self, id: u32, args: &ProjectArgs<'_>) -> Result<Project, String> {
        self.fetch_json("PUT", &format!("/api/projects/{}", id), Self::encode(args)?)
            .await
    }

    pub async fn delete_project(&self, id: u32) -> Result<(), String> {
        self.fetch_unit("DELETE", &format!("/api/projects/{}", id), None).await
    }

    // ========================
    // Folders
    // ========================

    pub async fn list_folders(&self, project_id: u32, category: Category) -> Result<Vec<Folder>, String> {
        self.fetch_json("GET", &category.folders_path(project_id), None).await
    }

    pub async fn create_folder(
        &self,
        project_id: u32,
        category: Category,
        args: &FolderArgs<'_>,
    ) -> Result<Folder, String> {
        self.fetch_json("POST", &category.folders_path(project_id), Self::encode(args)?)
            .await
    }

    pub async fn rename_folder(&self, id: u32, name: &str) -> Result<Folder, String> {
        let args = RenameFolderArgs { name };
        self.fetch_json("PUT", &format!("/api/folders/{}", id), Self::encode(&args)?)
            .await
    }

    pub async fn delete_folder(&self, id: u32) -> Result<(), String> {
        self.fetch_unit("DELETE", &format!("/api/folders/{}", id), None).await
    }

    // ========================
    // Items (category-dispatched)
    // ========================

    pub async fn list_items(&self, project_id: u32, category: Category) -> Result<Vec<CaseItem>, String> {
        self.fetch_json("GET", &category.list_path(project_id), None).await
    }

    pub async fn create_item(
        &self,
        project_id: u32,
        category: Category,
        args: &NewItemArgs<'_>,
    ) -> Result<CaseItem, String> {
        self.fetch_json("POST", &category.list_path(project_id), Self::encode(args)?)
            .await
    }

    pub async fn update_item(
        &self,
        category: Category,
        id: u32,
        args: &UpdateItemArgs<'_>,
    ) -> Result<CaseItem, String> {
        self.fetch_json("PUT", &category.item_path(id), Self::encode(args)?).await
    }

    pub async fn delete_item(&self, category: Category, id: u32) -> Result<(), String> {
        self.fetch_unit("DELETE", &category.item_path(id), None).await
    }

    pub async fn move_item(
        &self,
        category: Category,
        id: u32,
        folder_id: Option<u32>,
    ) -> Result<(), String> {
        let args = MoveItemArgs { folder_id };
        self.fetch_unit("PUT", &category.move_path(id), Self::encode(&args)?).await
    }

    /// Absolute URL the export anchor points at
    pub fn export_url(&self, category: Category, item_id: u32, format: ExportFormat) -> String {
        format!("{}{}", self.base_url, category.export_path(item_id, format))
    }

    // ========================
    // Users
    // ========================

    pub async fn list_users(&self) -> Result<Vec<User>, String> {
        self.fetch_json("GET", "/api/auth/users", None).await
    }

    pub async fn create_user(&self, args: &UserArgs<'_>) -> Result<User, String> {
        self.fetch_json("POST", "/api/auth/users", Self::encode(args)?).await
    }

    pub async fn update_user(&self, id: u32, args: &UserArgs<'_>) -> Result<User, String> {
        self.fetch_json("PUT", &format!("/api/auth/users/{}", id), Self::encode(args)?)
            .await
    }

    pub async fn delete_user(&self, id: u32) -> Result<(), String> {
        self.fetch_unit("DELETE", &format!("/api/auth/users/{}", id), None).await
    }

    pub async fn reset_password(&self, id: u32) -> Result<(), String> {
        self.fetch_unit("POST", &format!("/api/auth/users/{}/reset-password", id), None)
            .await
    }

    // ========================
    // Releases & Reports
    // ========================

    pub async fn list_releases(&self) -> Result<Vec<Release>, String> {
        self.fetch_json("GET", "/api/releases", None).await
    }

    pub async fn create_release(&self, args: &ReleaseArgs<'_>) -> Result<Release, String> {
        self.fetch_json("POST", "/api/releases", Self::encode(args)?).await
    }

    pub async fn delete_release(&self, id: u32) -> Result<(), String> {
        self.fetch_unit("DELETE", &format!("/api/releases/{}", id), None).await
    }

    pub async fn list_reports(&self) -> Result<Vec<ReportSummary>, String> {
        self.fetch_json("GET", "/api/reports", None).await
    }
}

// ========================
// Request Argument Structs
// ========================

#[derive(Serialize)]
pub struct ProjectArgs<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub base_url: Option<&'a str>,
    pub test_username: Option<&'a str>,
    pub test_password: Option<&'a str>,
    pub ui_config: &'a UiConfig,
}

#[derive(Serialize)]
pub struct FolderArgs<'a> {
    pub name: &'a str,
    pub parent_folder_id: Option<u32>,
}

#[derive(Serialize)]
struct RenameFolderArgs<'a> {
    name: &'a str,
}

#[derive(Serialize)]
pub struct NewItemArgs<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub folder_id: Option<u32>,
}

#[derive(Serialize)]
pub struct UpdateItemArgs<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
}

#[derive(Serialize)]
struct MoveItemArgs {
    folder_id: Option<u32>,
}

#[derive(Serialize)]
pub struct UserArgs<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub role: Role,
    pub is_active: bool,
}

#[derive(Serialize)]
pub struct ReleaseArgs<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub environments: &'a [String],
    pub project_ids: &'a [u32],
}
