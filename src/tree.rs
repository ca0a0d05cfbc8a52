//! Folder Tree Utilities
//!
//! Pure helpers for resolving a folder view out of the flat collections the
//! backend returns: the ancestor path for the breadcrumb, direct subfolders,
//! and the items sitting in the current folder.

use crate::models::{CaseItem, Folder};

/// Hierarchy-level errors
#[derive(Debug, Clone, PartialEq)]
pub enum HierarchyError {
    /// The folder collection violates its referential invariants (parent
    /// cycle or dangling folder id). Recoverable by a full reload.
    CorruptHierarchy(String),
}

impl std::fmt::Display for HierarchyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HierarchyError::CorruptHierarchy(msg) => write!(f, "Corrupt folder hierarchy: {}", msg),
        }
    }
}

impl std::error::Error for HierarchyError {}

/// Everything a folder-scoped view needs to render
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FolderView {
    /// Ancestor path from root to the current folder (empty at root)
    pub path: Vec<Folder>,
    /// Direct subfolders of the current folder
    pub subfolders: Vec<Folder>,
    /// Items whose folder_id equals the current folder
    pub items: Vec<CaseItem>,
}

/// Walk `parent_folder_id` backwards from `target`, prepending each visited
/// folder, until a root folder is reached. `None` is the root bucket and
/// yields an empty path.
///
/// Traversal is capped by the total folder count so a parent cycle returned
/// by a misbehaving backend terminates in `CorruptHierarchy` instead of
/// hanging the UI.
pub fn ancestor_path(folders: &[Folder], target: Option<u32>) -> Result<Vec<Folder>, HierarchyError> {
    let Some(start) = target else {
        return Ok(Vec::new());
    };

    let mut path = Vec::new();
    let mut cursor = start;
    for _ in 0..=folders.len() {
        let Some(folder) = folders.iter().find(|f| f.id == cursor) else {
            return Err(HierarchyError::CorruptHierarchy(format!(
                "folder {} referenced but not present",
                cursor
            )));
        };
        path.insert(0, folder.clone());
        match folder.parent_folder_id {
            Some(parent) => cursor = parent,
            None => return Ok(path),
        }
    }

    Err(HierarchyError::CorruptHierarchy(format!(
        "parent chain starting at folder {} does not terminate",
        start
    )))
}

/// Direct children of `target` (None = root-level folders)
pub fn subfolders_of(folders: &[Folder], target: Option<u32>) -> Vec<Folder> {
    folders
        .iter()
        .filter(|f| f.parent_folder_id == target)
        .cloned()
        .collect()
}

/// Items assigned to `target`. None selects the uncategorized bucket: items
/// with no folder assignment.
pub fn items_in(items: &[CaseItem], target: Option<u32>) -> Vec<CaseItem> {
    items
        .iter()
        .filter(|i| i.folder_id == target)
        .cloned()
        .collect()
}

/// Resolve the full view for `target`. Re-run whenever the target folder or
/// either collection changes; there is no incremental index at this scale.
pub fn resolve(
    folders: &[Folder],
    items: &[CaseItem],
    target: Option<u32>,
) -> Result<FolderView, HierarchyError> {
    Ok(FolderView {
        path: ancestor_path(folders, target)?,
        subfolders: subfolders_of(folders, target),
        items: items_in(items, target),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CaseItem, CasePayload, Folder};

    fn make_folder(id: u32, parent: Option<u32>) -> Folder {
        Folder {
            id,
            name: format!("Folder {}", id),
            parent_folder_id: parent,
            category: "gherkin".to_string(),
            project_id: 1,
        }
    }

    fn make_item(id: u32, folder_id: Option<u32>) -> CaseItem {
        CaseItem {
            id,
            name: format!("Item {}", id),
            description: None,
            folder_id,
            payload: CasePayload::Gherkin { scenarios: Vec::new() },
        }
    }

    #[test]
    fn test_ancestor_path_root_is_empty() {
        let folders = vec![make_folder(1, None)];
        assert_eq!(ancestor_path(&folders, None).unwrap(), Vec::new());
    }

    #[test]
    fn test_ancestor_path_orders_root_to_target() {
        let folders = vec![
            make_folder(1, None),
            make_folder(2, Some(1)),
            make_folder(3, Some(2)),
            make_folder(4, None),
        ];

        let path = ancestor_path(&folders, Some(3)).unwrap();

        let ids: Vec<u32> = path.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        // Path ends with the target and each link satisfies child.parent == parent.id
        assert_eq!(path.last().unwrap().id, 3);
        for pair in path.windows(2) {
            assert_eq!(pair[1].parent_folder_id, Some(pair[0].id));
        }
    }

    #[test]
    fn test_ancestor_path_detects_cycle() {
        let folders = vec![make_folder(1, Some(2)), make_folder(2, Some(1))];

        let err = ancestor_path(&folders, Some(1)).unwrap_err();
        assert!(matches!(err, HierarchyError::CorruptHierarchy(_)));
    }

    #[test]
    fn test_ancestor_path_detects_dangling_parent() {
        let folders = vec![make_folder(5, Some(99))];

        let err = ancestor_path(&folders, Some(5)).unwrap_err();
        assert!(matches!(err, HierarchyError::CorruptHierarchy(_)));
    }

    #[test]
    fn test_subfolders_partition() {
        let folders = vec![
            make_folder(1, None),
            make_folder(2, Some(1)),
            make_folder(3, Some(1)),
            make_folder(4, None),
        ];

        let root: Vec<u32> = subfolders_of(&folders, None).iter().map(|f| f.id).collect();
        let under_1: Vec<u32> = subfolders_of(&folders, Some(1)).iter().map(|f| f.id).collect();

        assert_eq!(root, vec![1, 4]);
        assert_eq!(under_1, vec![2, 3]);
        assert!(subfolders_of(&folders, Some(2)).is_empty());
    }

    #[test]
    fn test_every_item_lands_in_exactly_one_bucket() {
        let items = vec![
            make_item(1, None),
            make_item(2, Some(1)),
            make_item(3, Some(2)),
            make_item(4, Some(1)),
        ];
        let buckets = [None, Some(1), Some(2)];

        let mut total = 0;
        for bucket in buckets {
            total += items_in(&items, bucket).len();
        }
        assert_eq!(total, items.len());
        assert_eq!(items_in(&items, None).len(), 1);
        assert_eq!(items_in(&items, Some(1)).len(), 2);
    }

    #[test]
    fn test_resolve_combines_all_three() {
        let folders = vec![make_folder(1, None), make_folder(2, Some(1))];
        let items = vec![make_item(10, Some(1)), make_item(11, None)];

        let view = resolve(&folders, &items, Some(1)).unwrap();

        assert_eq!(view.path.len(), 1);
        assert_eq!(view.subfolders.len(), 1);
        assert_eq!(view.subfolders[0].id, 2);
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].id, 10);
    }

    #[test]
    fn test_reparented_children_resolve_after_reload() {
        // Folder 2 (child of 1) is deleted server-side; its children 3 and 4
        // come back reparented to folder 1 on the next reload.
        let reloaded = vec![
            make_folder(1, None),
            make_folder(3, Some(1)),
            make_folder(4, Some(1)),
        ];

        let under_1: Vec<u32> = subfolders_of(&reloaded, Some(1)).iter().map(|f| f.id).collect();
        assert_eq!(under_1, vec![3, 4]);
    }

    #[test]
    fn test_root_level_delete_promotes_children_to_root() {
        // Root folder 1 deleted; its children now carry parent None.
        let reloaded = vec![make_folder(2, None), make_folder(3, None)];

        let root: Vec<u32> = subfolders_of(&reloaded, None).iter().map(|f| f.id).collect();
        assert_eq!(root, vec![2, 3]);
        assert_eq!(ancestor_path(&reloaded, Some(2)).unwrap().len(), 1);
    }
}
