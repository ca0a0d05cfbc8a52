//! Item Search Filter
//!
//! Case-insensitive substring match over item name and description. No
//! tokenization, ranking, or fuzzy matching.

use crate::models::CaseItem;

/// Keep the items whose name or description contains `query`,
/// case-insensitively. A blank query returns the input unchanged.
pub fn filter_items(items: Vec<CaseItem>, query: &str) -> Vec<CaseItem> {
    let query = query.trim();
    if query.is_empty() {
        return items;
    }

    let needle = query.to_lowercase();
    items
        .into_iter()
        .filter(|item| {
            item.name.to_lowercase().contains(&needle)
                || item
                    .description
                    .as_deref()
                    .map(|d| d.to_lowercase().contains(&needle))
                    .unwrap_or(false)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CaseItem, CasePayload};

    fn make_item(id: u32, name: &str, description: Option<&str>) -> CaseItem {
        CaseItem {
            id,
            name: name.to_string(),
            description: description.map(|d| d.to_string()),
            folder_id: None,
            payload: CasePayload::ActionBased { actions: Vec::new() },
        }
    }

    #[test]
    fn test_blank_query_is_identity() {
        let items = vec![make_item(1, "Login", None), make_item(2, "Logout", None)];
        assert_eq!(filter_items(items.clone(), ""), items);
        assert_eq!(filter_items(items.clone(), "   "), items);
    }

    #[test]
    fn test_matches_name_case_insensitively() {
        let items = vec![make_item(1, "Login Flow", None), make_item(2, "Checkout", None)];

        let found = filter_items(items, "LOGIN");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 1);
    }

    #[test]
    fn test_matches_description_too() {
        let items = vec![
            make_item(1, "Smoke", Some("covers the login page")),
            make_item(2, "Smoke 2", None),
        ];

        let found = filter_items(items, "login");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 1);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let items = vec![
            make_item(1, "Login Flow", None),
            make_item(2, "Checkout", Some("pay flow")),
            make_item(3, "Search", None),
        ];

        let once = filter_items(items, "flow");
        let twice = filter_items(once.clone(), "flow");
        assert_eq!(once, twice);
    }
}
