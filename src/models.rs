//! Frontend Models
//!
//! Data structures matching backend entities. The frontend holds transient
//! copies only; referential consistency is enforced server-side.

use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Project data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub test_username: Option<String>,
    #[serde(default)]
    pub test_password: Option<String>,
    #[serde(default)]
    pub ui_config: UiConfig,
    #[serde(default)]
    pub test_cases: Vec<CaseItem>,
}

/// Per-project UI configuration: which automation frameworks are enabled
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub frameworks: Vec<String>,
    #[serde(default)]
    pub primary_framework: Option<String>,
}

/// Folder data structure (matches backend)
///
/// `parent_folder_id == None` means the folder sits at the root of its
/// category. The parent chain is acyclic and stays within one category;
/// both invariants are backend-enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub parent_folder_id: Option<u32>,
    pub category: String,
    pub project_id: u32,
}

/// A test artifact: action-based test case, gherkin feature, or traditional
/// suite. The category-specific payload is a tagged union resolved once at
/// deserialization, so views never re-check duck-typed shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseItem {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub folder_id: Option<u32>,
    #[serde(flatten)]
    pub payload: CasePayload,
}

impl CaseItem {
    pub fn category(&self) -> Category {
        match self.payload {
            CasePayload::ActionBased { .. } => Category::ActionBased,
            CasePayload::Gherkin { .. } => Category::Gherkin,
            CasePayload::Traditional { .. } => Category::Traditional,
        }
    }
}

/// Category-specific item payload, tagged by the wire-level `category` field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "kebab-case")]
pub enum CasePayload {
    ActionBased {
        #[serde(default)]
        actions: Vec<ActionStep>,
    },
    Gherkin {
        #[serde(default)]
        scenarios: Vec<Scenario>,
    },
    Traditional {
        #[serde(default)]
        test_cases: Vec<SuiteRow>,
    },
}

/// One recorded step of an action-based test case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionStep {
    pub action: String,
    #[serde(default)]
    pub selector: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

/// One scenario of a gherkin feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    #[serde(default)]
    pub steps: Vec<String>,
}

/// One row of a traditional table-format suite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuiteRow {
    pub name: String,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub expected: Option<String>,
}

/// User account (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub username: String,
    pub email: String,
    pub role: Role,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Default for Role {
    fn default() -> Self {
        Role::User
    }
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Admin => "Admin",
        }
    }
}

/// Release train: environments and projects tracked toward a milestone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Release {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub environments: Vec<String>,
    #[serde(default)]
    pub project_ids: Vec<u32>,
    #[serde(default)]
    pub passed: u32,
    #[serde(default)]
    pub failed: u32,
}

/// Per-project aggregate run counts for the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub project_id: u32,
    pub project_name: String,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub passed: u32,
    #[serde(default)]
    pub failed: u32,
}
