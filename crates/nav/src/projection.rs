//! Render-state projection: tree walk separated from rendering.
//!
//! `project` turns the immutable catalog plus the moment's UI state (current
//! route, collapse flag, expansion set) into a tree of plain render nodes.
//! Renderers consume the node tree and never recompute activation logic,
//! which keeps the resolver contracts testable without drawing anything.

use crate::catalog::NavigationTree;
use crate::dispatch::ExpansionState;
use crate::resolver;
use lumina_types::{NavigationGroup, NavigationItem};

/// Derived highlight and expansion state for one item at one moment.
///
/// Recomputed on every projection; never stored on the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderState {
    /// Current route equals this item's `href` exactly.
    pub is_active: bool,
    /// Current route equals a direct child's `href`.
    pub is_child_active: bool,
    /// Combined highlight: parents light up for self or child, leaves for
    /// self only.
    pub should_show_as_active: bool,
    /// Whether this item's children are shown. Always false in collapsed
    /// mode and for leaves.
    pub is_expanded: bool,
}

/// One projected navigation item, carrying its render state and projected
/// children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRender {
    /// Catalog id of the item.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Route this item navigates to (or toggles from, for open parents).
    pub href: String,
    /// Symbolic icon name.
    pub icon: String,
    /// Optional badge annotation.
    pub badge: Option<String>,
    /// Optional description line.
    pub description: Option<String>,
    /// Whether the catalog item carries children (independent of whether
    /// they are currently shown).
    pub has_children: bool,
    /// Derived highlight/expansion state.
    pub state: RenderState,
    /// Projected children; empty when collapsed, closed, or a leaf.
    pub children: Vec<ItemRender>,
}

/// One projected group: heading plus projected top-level items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupRender {
    /// Catalog id of the group.
    pub id: String,
    /// Group heading.
    pub label: String,
    /// Projected items in catalog order.
    pub items: Vec<ItemRender>,
}

/// Projects the whole tree for the given moment.
///
/// In collapsed mode children are omitted and `is_expanded` is false for
/// every node; the expansion set is ignored (but untouched) until the mode
/// switches back.
pub fn project(
    tree: &NavigationTree,
    route: &str,
    sidebar_collapsed: bool,
    expansion: &ExpansionState,
) -> Vec<GroupRender> {
    tree.groups
        .iter()
        .map(|group| project_group(group, route, sidebar_collapsed, expansion))
        .collect()
}

fn project_group(
    group: &NavigationGroup,
    route: &str,
    sidebar_collapsed: bool,
    expansion: &ExpansionState,
) -> GroupRender {
    GroupRender {
        id: group.id.clone(),
        label: group.label.clone(),
        items: group
            .items
            .iter()
            .map(|item| project_item(item, route, sidebar_collapsed, expansion))
            .collect(),
    }
}

fn project_item(
    item: &NavigationItem,
    route: &str,
    sidebar_collapsed: bool,
    expansion: &ExpansionState,
) -> ItemRender {
    let is_expanded = !sidebar_collapsed && item.has_children() && expansion.is_open(&item.id);
    let children = if is_expanded {
        item.children
            .iter()
            .map(|child| project_item(child, route, sidebar_collapsed, expansion))
            .collect()
    } else {
        Vec::new()
    };

    ItemRender {
        id: item.id.clone(),
        label: item.label.clone(),
        href: item.href.clone(),
        icon: item.icon.clone(),
        badge: item.badge.clone(),
        description: item.description.clone(),
        has_children: item.has_children(),
        state: RenderState {
            is_active: resolver::is_active(item, route),
            is_child_active: resolver::is_child_active(item, route),
            should_show_as_active: resolver::should_show_as_active(item, route),
            is_expanded,
        },
        children,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::NavigationTree;
    use crate::dispatch::ExpansionState;

    fn find<'a>(groups: &'a [GroupRender], id: &str) -> &'a ItemRender {
        groups
            .iter()
            .flat_map(|g| g.items.iter())
            .find(|i| i.id == id)
            .unwrap_or_else(|| panic!("item {id} projected"))
    }

    #[test]
    fn child_route_projects_parent_highlight() {
        let tree = NavigationTree::from_embedded_catalog().expect("load embedded catalog");
        let expansion = ExpansionState::default();
        let groups = project(&tree, "/users/roles", false, &expansion);

        let users = find(&groups, "users");
        assert!(!users.state.is_active);
        assert!(users.state.is_child_active);
        assert!(users.state.should_show_as_active);
        // Closed parent: highlight shows, children stay hidden.
        assert!(!users.state.is_expanded);
        assert!(users.children.is_empty());
    }

    #[test]
    fn open_parent_projects_its_children() {
        let tree = NavigationTree::from_embedded_catalog().expect("load embedded catalog");
        let mut expansion = ExpansionState::default();
        expansion.toggle("images");
        let groups = project(&tree, "/images/list", false, &expansion);

        let images = find(&groups, "images");
        assert!(images.state.is_expanded);
        let child_ids: Vec<&str> = images.children.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(child_ids, ["images-list", "images-upload", "images-categories"]);
        assert!(images.children[0].state.is_active);
        assert!(!images.children[1].state.is_active);
    }

    #[test]
    fn collapsed_mode_hides_children_regardless_of_expansion() {
        let tree = NavigationTree::from_embedded_catalog().expect("load embedded catalog");
        let mut expansion = ExpansionState::default();
        expansion.toggle("images");
        let groups = project(&tree, "/images", true, &expansion);

        let images = find(&groups, "images");
        assert!(!images.state.is_expanded);
        assert!(images.children.is_empty());
        // The expansion set itself is untouched by projection.
        assert!(expansion.is_open("images"));
    }

    #[test]
    fn leaf_state_matches_plain_activation() {
        let tree = NavigationTree::from_embedded_catalog().expect("load embedded catalog");
        let expansion = ExpansionState::default();
        let groups = project(&tree, "/storage", false, &expansion);

        let storage = find(&groups, "storage");
        assert!(storage.state.is_active);
        assert!(!storage.state.is_child_active);
        assert!(storage.state.should_show_as_active);
        assert!(!storage.has_children);
    }
}
