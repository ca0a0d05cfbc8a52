//! Category Dispatcher
//!
//! Static lookup from a category tag to the REST resource paths and export
//! conventions for that kind of test artifact. An unrecognized tag is an
//! `InvalidCategory` error surfaced to the caller before any request goes out.

use serde::{Deserialize, Serialize};

/// The three fixed test-artifact kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    ActionBased,
    Gherkin,
    Traditional,
}

/// Dispatch-level errors
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchError {
    InvalidCategory(String),
}

impl std::fmt::Display for DispatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DispatchError::InvalidCategory(tag) => write!(f, "Invalid category: {}", tag),
        }
    }
}

impl std::error::Error for DispatchError {}

impl Category {
    pub const ALL: [Category; 3] = [Category::ActionBased, Category::Gherkin, Category::Traditional];

    /// Parse a wire-level category tag. Anything outside the three known
    /// tags is `InvalidCategory`.
    pub fn parse(tag: &str) -> Result<Category, DispatchError> {
        match tag {
            "action-based" => Ok(Category::ActionBased),
            "gherkin" => Ok(Category::Gherkin),
            "traditional" => Ok(Category::Traditional),
            other => Err(DispatchError::InvalidCategory(other.to_string())),
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Category::ActionBased => "action-based",
            Category::Gherkin => "gherkin",
            Category::Traditional => "traditional",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::ActionBased => "Test Cases",
            Category::Gherkin => "Gherkin Features",
            Category::Traditional => "Traditional Suites",
        }
    }

    /// REST resource segment for per-item endpoints
    fn resource(self) -> &'static str {
        match self {
            Category::ActionBased => "test-cases",
            Category::Gherkin => "gherkin-features",
            Category::Traditional => "traditional-suites",
        }
    }

    /// Listing/creation endpoint, scoped to a project
    pub fn list_path(self, project_id: u32) -> String {
        format!("/api/projects/{}/{}", project_id, self.resource())
    }

    /// Per-item CRUD endpoint
    pub fn item_path(self, item_id: u32) -> String {
        format!("/api/{}/{}", self.resource(), item_id)
    }

    /// Move endpoint (reassigns an item's folder)
    pub fn move_path(self, item_id: u32) -> String {
        format!("/api/{}/{}/move", self.resource(), item_id)
    }

    /// Export endpoint for a given format
    pub fn export_path(self, item_id: u32, format: ExportFormat) -> String {
        format!("/api/{}/{}/export?format={}", self.resource(), item_id, format.query())
    }

    /// Folder listing/creation endpoint for this category within a project
    pub fn folders_path(self, project_id: u32) -> String {
        format!("/api/projects/{}/folders?category={}", project_id, self.tag())
    }

    /// Export formats offered for this kind of artifact
    pub fn export_formats(self) -> &'static [ExportFormat] {
        match self {
            Category::ActionBased => &[ExportFormat::Json, ExportFormat::Zip],
            Category::Gherkin => &[ExportFormat::Feature, ExportFormat::Json, ExportFormat::Zip],
            Category::Traditional => &[ExportFormat::Csv, ExportFormat::Json, ExportFormat::Zip],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Feature,
    Json,
    Csv,
    Zip,
}

impl ExportFormat {
    pub fn query(self) -> &'static str {
        match self {
            ExportFormat::Feature => "feature",
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Zip => "zip",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Feature => ".feature",
            ExportFormat::Json => ".json",
            ExportFormat::Csv => ".csv",
            ExportFormat::Zip => ".zip",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Feature => "Feature file",
            ExportFormat::Json => "JSON",
            ExportFormat::Csv => "CSV",
            ExportFormat::Zip => "ZIP archive",
        }
    }
}

/// Download filename for an exported item: whitespace becomes underscores,
/// then the format extension is appended. Collisions are not deduplicated;
/// the browser's download layer decides what happens on a name clash.
pub fn export_filename(name: &str, format: ExportFormat) -> String {
    let stem: String = name
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect();
    format!("{}{}", stem, format.extension())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_tags() {
        assert_eq!(Category::parse("action-based"), Ok(Category::ActionBased));
        assert_eq!(Category::parse("gherkin"), Ok(Category::Gherkin));
        assert_eq!(Category::parse("traditional"), Ok(Category::Traditional));
    }

    #[test]
    fn test_parse_unknown_tag_is_invalid_category() {
        let err = Category::parse("bogus").unwrap_err();
        assert_eq!(err, DispatchError::InvalidCategory("bogus".to_string()));
    }

    #[test]
    fn test_parse_round_trips_tag() {
        for cat in Category::ALL {
            assert_eq!(Category::parse(cat.tag()), Ok(cat));
        }
    }

    #[test]
    fn test_resource_paths() {
        assert_eq!(Category::ActionBased.list_path(7), "/api/projects/7/test-cases");
        assert_eq!(Category::Gherkin.list_path(7), "/api/projects/7/gherkin-features");
        assert_eq!(Category::Traditional.item_path(42), "/api/traditional-suites/42");
        assert_eq!(Category::Gherkin.move_path(3), "/api/gherkin-features/3/move");
        assert_eq!(
            Category::ActionBased.folders_path(9),
            "/api/projects/9/folders?category=action-based"
        );
    }

    #[test]
    fn test_export_path_carries_format() {
        assert_eq!(
            Category::Gherkin.export_path(5, ExportFormat::Json),
            "/api/gherkin-features/5/export?format=json"
        );
        assert_eq!(
            Category::Traditional.export_path(5, ExportFormat::Csv),
            "/api/traditional-suites/5/export?format=csv"
        );
    }

    #[test]
    fn test_export_filename() {
        assert_eq!(export_filename("Login Flow", ExportFormat::Feature), "Login_Flow.feature");
        assert_eq!(export_filename("Login Flow", ExportFormat::Json), "Login_Flow.json");
        assert_eq!(export_filename("a  b\tc", ExportFormat::Zip), "a__b_c.zip");
        assert_eq!(export_filename("nospace", ExportFormat::Csv), "nospace.csv");
    }

    #[test]
    fn test_feature_export_is_gherkin_only() {
        assert!(Category::Gherkin.export_formats().contains(&ExportFormat::Feature));
        assert!(!Category::ActionBased.export_formats().contains(&ExportFormat::Feature));
        assert!(!Category::Traditional.export_formats().contains(&ExportFormat::Feature));
    }
}
