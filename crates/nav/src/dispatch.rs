//! Collapse-aware click dispatch.
//!
//! Translates an activation (click, Enter) on a navigation item into exactly
//! one of three actions, gated by the global collapse flag and by whether
//! the item has children:
//!
//! | has children | mode      | action                                   |
//! |--------------|-----------|------------------------------------------|
//! | no           | any       | navigate to the item's own `href`        |
//! | yes          | collapsed | navigate to the resolved default target  |
//! | yes          | expanded  | toggle the item open/closed, no navigate |
//!
//! Expansion is tracked per item id in a set owned by the controller, so the
//! state outlives any individual render pass but is explicitly discarded
//! when the navigation panel is torn down. Every item starts Closed.

use crate::resolver::resolve_default_target;
use lumina_types::NavigationItem;
use std::collections::HashSet;
use tracing::trace;

/// Open/closed state per parent item, keyed by item id.
///
/// Absent means Closed. The set is retained while the sidebar is collapsed
/// (rendering just stops consulting it) and cleared only on teardown.
#[derive(Debug, Clone, Default)]
pub struct ExpansionState {
    open: HashSet<String>,
}

impl ExpansionState {
    /// Whether the item with this id is currently open.
    pub fn is_open(&self, id: &str) -> bool {
        self.open.contains(id)
    }

    /// Flips the item between open and closed; returns the new open state.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.open.remove(id) {
            false
        } else {
            self.open.insert(id.to_string());
            true
        }
    }

    /// Resets every item back to Closed. Called when the panel is torn down.
    pub fn clear(&mut self) {
        self.open.clear();
    }
}

/// The single action an activation resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    /// Navigate to this route and notify the route store.
    Navigate(String),
    /// Toggle local expansion of this item; no navigation.
    ToggleExpansion(String),
}

/// Owns the expansion set and resolves activations against it.
#[derive(Debug, Clone, Default)]
pub struct CollapseController {
    expansion: ExpansionState,
}

impl CollapseController {
    /// Read access to the expansion set, for projection.
    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    /// Resolves the action for an activation without applying it.
    pub fn click_action(item: &NavigationItem, sidebar_collapsed: bool) -> ClickAction {
        if !item.has_children() {
            return ClickAction::Navigate(item.href.clone());
        }
        if sidebar_collapsed {
            return ClickAction::Navigate(resolve_default_target(item).to_string());
        }
        ClickAction::ToggleExpansion(item.id.clone())
    }

    /// Applies an activation: toggles expansion locally, or returns the
    /// route to navigate to. Navigation is left to the caller so the route
    /// store update happens at a single entry point.
    pub fn handle_click(&mut self, item: &NavigationItem, sidebar_collapsed: bool) -> Option<String> {
        match Self::click_action(item, sidebar_collapsed) {
            ClickAction::Navigate(href) => {
                trace!(item = %item.id, target = %href, "navigation activated");
                Some(href)
            }
            ClickAction::ToggleExpansion(id) => {
                let open = self.expansion.toggle(&id);
                trace!(item = %id, open, "expansion toggled");
                None
            }
        }
    }

    /// Discards all expansion state, returning every item to Closed.
    pub fn reset(&mut self) {
        self.expansion.clear();
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

    fn parent(id: &str, href: &str, default_href: Option<&str>, child_hrefs: &[&str]) -> NavigationItem {
        let mut item = leaf(id, href);
        item.default_href = default_href.map(str::to_string);
        item.children = child_hrefs
            .iter()
            .enumerate()
            .map(|(i, child)| leaf(&format!("{id}-{i}"), child))
            .collect();
        item
    }

    #[test]
    fn leaf_click_navigates_in_both_modes() {
        let storage = leaf("storage", "/storage");
        for collapsed in [false, true] {
            let mut controller = CollapseController::default();
            assert_eq!(controller.handle_click(&storage, collapsed).as_deref(), Some("/storage"));
        }
    }

    #[test]
    fn leaf_click_is_idempotent_to_repeat() {
        let storage = leaf("storage", "/storage");
        let mut controller = CollapseController::default();
        let first = controller.handle_click(&storage, false);
        let second = controller.handle_click(&storage, false);
        assert_eq!(first, second);
    }

    #[test]
    fn collapsed_parent_click_navigates_to_default_target() {
        let images = parent("images", "/images", Some("/images/list"), &["/images/upload"]);
        let mut controller = CollapseController::default();
        let target = controller.handle_click(&images, true);
        assert_eq!(target.as_deref(), Some("/images/list"));
        // No local expand state change in collapsed mode.
        assert!(!controller.expansion().is_open("images"));
    }

    #[test]
    fn collapsed_parent_without_default_uses_first_child() {
        let users = parent("users", "/users", None, &["/users/roles"]);
        let mut controller = CollapseController::default();
        assert_eq!(controller.handle_click(&users, true).as_deref(), Some("/users/roles"));
    }

    #[test]
    fn expanded_parent_click_toggles_without_navigating() {
        let users = parent("users", "/users", None, &["/users/roles"]);
        let mut controller = CollapseController::default();

        assert_eq!(controller.handle_click(&users, false), None);
        assert!(controller.expansion().is_open("users"));

        assert_eq!(controller.handle_click(&users, false), None);
        assert!(!controller.expansion().is_open("users"));
    }

    #[test]
    fn toggle_twice_is_an_involution() {
        let mut expansion = ExpansionState::default();
        assert!(!expansion.is_open("stats"));
        expansion.toggle("stats");
        expansion.toggle("stats");
        assert!(!expansion.is_open("stats"));
    }

    #[test]
    fn expansion_survives_mode_switch_until_reset() {
        let users = parent("users", "/users", None, &["/users/roles"]);
        let mut controller = CollapseController::default();
        controller.handle_click(&users, false);
        assert!(controller.expansion().is_open("users"));

        // Collapsed-mode activation leaves the retained state alone.
        controller.handle_click(&users, true);
        assert!(controller.expansion().is_open("users"));

        controller.reset();
        assert!(!controller.expansion().is_open("users"));
    }
}
