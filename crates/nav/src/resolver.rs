//! Active-state resolution over the navigation tree.
//!
//! Every function here is pure and total: state comes in as explicit
//! arguments (current route, catalog item) and results come out as values,
//! so the contracts are testable without a UI harness. Route comparison is
//! exact string equality throughout. `/settings` and `/settings?tab=email`
//! are distinct routes; no prefix matching, no normalization.

use crate::catalog::NavigationTree;
use lumina_types::{Crumb, NavigationItem};

/// Route of the fixed breadcrumb root.
pub const ROOT_HREF: &str = "/dashboard";
/// Label of the fixed breadcrumb root.
pub const ROOT_LABEL: &str = "Admin";
/// Icon name of the fixed breadcrumb root.
pub const ROOT_ICON: &str = "dashboard";

/// Whether the current route equals this item's own `href` exactly.
pub fn is_active(item: &NavigationItem, route: &str) -> bool {
    item.href == route
}

/// Whether the current route equals the `href` of one of this item's direct
/// children. Always false for leaves.
pub fn is_child_active(item: &NavigationItem, route: &str) -> bool {
    item.children.iter().any(|child| child.href == route)
}

/// Combined highlight state: a parent lights up when it or one of its
/// children is the current route; a leaf only when it is the route itself.
pub fn should_show_as_active(item: &NavigationItem, route: &str) -> bool {
    if item.has_children() {
        is_active(item, route) || is_child_active(item, route)
    } else {
        is_active(item, route)
    }
}

/// Resolves where an item navigates when activated in collapsed mode.
///
/// Fallback order is fixed: `default_href`, then the first child's `href`,
/// then the item's own `href`. Total for every item shape, including leaves
/// without a `default_href`.
pub fn resolve_default_target(item: &NavigationItem) -> &str {
    if let Some(target) = item.default_href.as_deref() {
        return target;
    }
    if let Some(first_child) = item.children.first() {
        return &first_child.href;
    }
    &item.href
}

/// Builds the breadcrumb trail for a route.
///
/// The trail always starts with the fixed console root. When the route
/// matches a catalog item other than the root itself, that item's crumb is
/// appended. A lookup miss degrades to the root-only trail; this function
/// never fails.
pub fn breadcrumbs(tree: &NavigationTree, route: &str) -> Vec<Crumb> {
    let mut crumbs = vec![Crumb::new(ROOT_LABEL, ROOT_HREF, ROOT_ICON)];
    if let Some(item) = tree.find_by_href(route) {
        if item.href != ROOT_HREF {
            crumbs.push(Crumb::new(item.label.clone(), item.href.clone(), item.icon.clone()));
        }
    }
    crumbs
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumina_types::NavigationItem;

    fn item(href: &str, default_href: Option<&str>, child_hrefs: &[&str]) -> NavigationItem {
        NavigationItem {
            id: href.trim_start_matches('/').replace('/', "-"),
            label: href.to_string(),
            href: href.to_string(),
            icon: String::new(),
            badge: None,
            description: None,
            default_href: default_href.map(str::to_string),
            children: child_hrefs
                .iter()
                .enumerate()
                .map(|(i, child)| NavigationItem {
                    id: format!("{child}-{i}"),
                    label: child.to_string(),
                    href: child.to_string(),
                    icon: String::new(),
                    badge: None,
                    description: None,
                    default_href: None,
                    children: Vec::new(),
                })
                .collect(),
        }
    }

    #[test]
    fn leaf_activation_is_exact_href_equality() {
        let storage = item("/storage", None, &[]);
        assert!(is_active(&storage, "/storage"));
        assert!(!is_active(&storage, "/storage/"));
        assert!(!is_active(&storage, "/storage?tab=x"));
        // For leaves the combined state equals plain activation.
        for route in ["/storage", "/storage/", "/images", ""] {
            assert_eq!(should_show_as_active(&storage, route), is_active(&storage, route));
        }
    }

    #[test]
    fn parent_lights_up_for_itself_and_for_children() {
        let users = item("/users", None, &["/users/roles"]);
        assert!(should_show_as_active(&users, "/users"));
        assert!(should_show_as_active(&users, "/users/roles"));
        assert!(!should_show_as_active(&users, "/users/unknown"));
    }

    #[test]
    fn child_route_marks_parent_child_active_not_active() {
        let users = item("/users", None, &["/users/roles"]);
        assert!(!is_active(&users, "/users/roles"));
        assert!(is_child_active(&users, "/users/roles"));
        assert!(should_show_as_active(&users, "/users/roles"));
    }

    #[test]
    fn query_suffixed_children_are_distinct_routes() {
        let settings = item("/settings", None, &["/settings?tab=basic", "/settings?tab=email"]);
        assert!(is_child_active(&settings, "/settings?tab=email"));
        assert!(!is_child_active(&settings, "/settings"));
        assert!(should_show_as_active(&settings, "/settings"));
    }

    #[test]
    fn default_target_fallback_order() {
        // No default_href: first child wins.
        let users = item("/users", None, &["/users/roles"]);
        assert_eq!(resolve_default_target(&users), "/users/roles");
        // Leaf without default_href: own href.
        let storage = item("/storage", None, &[]);
        assert_eq!(resolve_default_target(&storage), "/storage");
        // Explicit default_href wins over children.
        let images = item("/images", Some("/images/list"), &["/images/upload"]);
        assert_eq!(resolve_default_target(&images), "/images/list");
        // default_href on a leaf still wins.
        let stats = item("/stats", Some("/stats/trends"), &[]);
        assert_eq!(resolve_default_target(&stats), "/stats/trends");
    }

    #[test]
    fn breadcrumbs_resolve_current_section() {
        let tree = NavigationTree::from_embedded_catalog().expect("load embedded catalog");
        let trail = breadcrumbs(&tree, "/users/roles");
        let parts: Vec<(&str, &str)> = trail.iter().map(|c| (c.label.as_str(), c.href.as_str())).collect();
        assert_eq!(parts, [("Admin", "/dashboard"), ("Roles & Permissions", "/users/roles")]);
    }

    #[test]
    fn breadcrumbs_on_root_route_are_root_only() {
        let tree = NavigationTree::from_embedded_catalog().expect("load embedded catalog");
        let trail = breadcrumbs(&tree, "/dashboard");
        assert_eq!(trail.len(), 1);
        assert_eq!(trail[0].href, ROOT_HREF);
    }

    #[test]
    fn breadcrumbs_degrade_to_root_on_lookup_miss() {
        let tree = NavigationTree::from_embedded_catalog().expect("load embedded catalog");
        let trail = breadcrumbs(&tree, "/nonexistent");
        assert_eq!(trail.len(), 1);
        assert_eq!(trail[0].label, ROOT_LABEL);
    }
}
