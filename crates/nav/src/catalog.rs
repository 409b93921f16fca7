//! Navigation catalog: the static tree of console sections.
//!
//! The catalog is embedded at build time as JSON, deserialized once at
//! startup, validated, and treated as immutable for the process lifetime.
//! Lookup is first-match in flattened order: groups in catalog order, each
//! top-level item immediately followed by its direct children. A parent and
//! its first child may share an `href` (the catalog ships one such pair on
//! purpose); `find_by_href` resolves the collision to the earliest-listed
//! item and callers are expected to know that.

use lumina_types::{NavigationGroup, NavigationItem};
use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;
use tracing::debug;

/// Catalog JSON embedded during the build.
const EMBEDDED_CATALOG: &str = include_str!("../assets/catalog.json");

/// Errors raised while constructing a [`NavigationTree`].
///
/// These are construction-time failures only. Runtime lookups never error;
/// a miss is an `Option::None`.
#[derive(Debug, Error)]
pub enum NavTreeError {
    /// The catalog document could not be parsed.
    #[error("malformed navigation catalog: {0}")]
    Parse(#[from] serde_json::Error),
    /// Two nodes in the tree share an `id`.
    #[error("duplicate navigation id {id:?}")]
    DuplicateId { id: String },
    /// A child node carries children of its own; the tree is fixed at two
    /// levels below group.
    #[error("navigation item {id:?} nests deeper than one child level")]
    TooDeep { id: String },
}

/// The static, ordered catalog of navigable console sections.
#[derive(Debug, Clone, Deserialize)]
pub struct NavigationTree {
    /// Ordered presentational groups.
    pub groups: Vec<NavigationGroup>,
}

impl NavigationTree {
    /// Loads and validates the catalog embedded in the binary.
    pub fn from_embedded_catalog() -> Result<Self, NavTreeError> {
        let tree: NavigationTree = serde_json::from_str(EMBEDDED_CATALOG)?;
        tree.validate()?;
        debug!(
            groups = tree.groups.len(),
            items = tree.flatten().count(),
            "navigation catalog loaded"
        );
        Ok(tree)
    }

    /// Builds a tree from already-parsed groups, validating invariants.
    pub fn from_groups(groups: Vec<NavigationGroup>) -> Result<Self, NavTreeError> {
        let tree = NavigationTree { groups };
        tree.validate()?;
        Ok(tree)
    }

    /// Checks construction-time invariants: ids unique across the whole
    /// tree, children strictly one level deep.
    pub fn validate(&self) -> Result<(), NavTreeError> {
        let mut seen: HashSet<&str> = HashSet::new();
        for item in self.flatten() {
            if !seen.insert(item.id.as_str()) {
                return Err(NavTreeError::DuplicateId { id: item.id.clone() });
            }
        }
        for group in &self.groups {
            for item in &group.items {
                for child in &item.children {
                    if child.has_children() {
                        return Err(NavTreeError::TooDeep { id: child.id.clone() });
                    }
                }
            }
        }
        Ok(())
    }

    /// Iterates every item in flattened order: groups in catalog order, each
    /// top-level item immediately followed by its direct children.
    pub fn flatten(&self) -> impl Iterator<Item = &NavigationItem> {
        self.groups
            .iter()
            .flat_map(|group| group.items.iter())
            .flat_map(|item| std::iter::once(item).chain(item.children.iter()))
    }

    /// Returns the first item in flattened order whose `href` equals `path`
    /// exactly, or `None`. No prefix matching, no normalization: trailing
    /// slashes and query strings are significant.
    pub fn find_by_href(&self, path: &str) -> Option<&NavigationItem> {
        self.flatten().find(|item| item.href == path)
    }

    /// Returns the item with the given `id`, or `None`. Ids are unique, so
    /// first match is the only match.
    pub fn find_by_id(&self, id: &str) -> Option<&NavigationItem> {
        self.flatten().find(|item| item.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(id: &str, href: &str) -> NavigationItem {
        NavigationItem {
            id: id.into(),
            label: id.into(),
            href: href.into(),
            icon: String::new(),
            badge: None,
            description: None,
            default_href: None,
            children: Vec::new(),
        }
    }

    #[test]
    fn embedded_catalog_loads_and_validates() {
        let tree = NavigationTree::from_embedded_catalog().expect("load embedded catalog");
        assert!(!tree.groups.is_empty());
        let mut seen = HashSet::new();
        for item in tree.flatten() {
            assert!(seen.insert(item.id.clone()), "duplicate id {}", item.id);
        }
    }

    #[test]
    fn flatten_emits_parents_immediately_before_their_children() {
        let tree = NavigationTree::from_embedded_catalog().expect("load embedded catalog");
        let ids: Vec<&str> = tree.flatten().map(|item| item.id.as_str()).collect();
        let images = ids.iter().position(|id| *id == "images").expect("images present");
        assert_eq!(ids[images + 1], "images-list");
        assert_eq!(ids[images + 2], "images-upload");
        assert_eq!(ids[images + 3], "images-categories");
    }

    #[test]
    fn find_by_href_is_exact_match_only() {
        let tree = NavigationTree::from_embedded_catalog().expect("load embedded catalog");
        assert_eq!(tree.find_by_href("/storage").map(|i| i.id.as_str()), Some("storage"));
        assert!(tree.find_by_href("/storage/").is_none());
        assert!(tree.find_by_href("/nonexistent").is_none());
        assert_eq!(
            tree.find_by_href("/settings?tab=email").map(|i| i.id.as_str()),
            Some("settings-email")
        );
        assert_eq!(tree.find_by_href("/settings").map(|i| i.id.as_str()), Some("settings"));
    }

    #[test]
    fn colliding_href_resolves_to_earliest_listed_item() {
        let tree = NavigationTree::from_embedded_catalog().expect("load embedded catalog");
        // "users" and its first child "users-list" both map to /users; the
        // parent is listed first, so the parent wins.
        assert_eq!(tree.find_by_href("/users").map(|i| i.id.as_str()), Some("users"));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let groups = vec![NavigationGroup {
            id: "g".into(),
            label: "G".into(),
            items: vec![leaf("dup", "/a"), leaf("dup", "/b")],
        }];
        let err = NavigationTree::from_groups(groups).expect_err("duplicate must fail");
        assert!(matches!(err, NavTreeError::DuplicateId { ref id } if id == "dup"));
    }

    #[test]
    fn grandchildren_are_rejected() {
        let mut parent = leaf("parent", "/p");
        let mut child = leaf("child", "/p/c");
        child.children.push(leaf("grandchild", "/p/c/g"));
        parent.children.push(child);
        let groups = vec![NavigationGroup {
            id: "g".into(),
            label: "G".into(),
            items: vec![parent],
        }];
        let err = NavigationTree::from_groups(groups).expect_err("depth must fail");
        assert!(matches!(err, NavTreeError::TooDeep { ref id } if id == "child"));
    }

    #[test]
    fn empty_tree_lookup_misses_cleanly() {
        let tree = NavigationTree::from_groups(Vec::new()).expect("empty tree is valid");
        assert!(tree.find_by_href("/anything").is_none());
        assert_eq!(tree.flatten().count(), 0);
    }
}
