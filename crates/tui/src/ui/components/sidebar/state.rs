//! Sidebar state: the projected row set plus focus and hit-test tracking.

use lumina_nav::{CollapseController, GroupRender, ItemRender, NavigationTree, project};
use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;

/// One renderable sidebar row, flattened from the projected tree.
///
/// Rows carry everything the renderer needs so drawing never consults the
/// catalog or recomputes activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarRow {
    /// Catalog id of the underlying item.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Symbolic icon name.
    pub icon: String,
    /// Optional badge annotation.
    pub badge: Option<String>,
    /// Optional description, shown as a hint for the focused row.
    pub description: Option<String>,
    /// Nesting depth: 0 for top-level items, 1 for children.
    pub depth: u8,
    /// Whether the catalog item carries children.
    pub has_children: bool,
    /// Whether the item's children are currently shown below it.
    pub is_expanded: bool,
    /// Combined highlight state for the current route.
    pub show_as_active: bool,
    /// Set on the first row of each group; the renderer draws the group
    /// heading above it in expanded mode.
    pub group_label: Option<String>,
}

/// State for the sidebar navigation panel.
///
/// Owns the collapse controller (and through it the expansion set), the
/// flattened row projection, per-row focus flags, and the rects recorded
/// during the last render for mouse hit testing.
#[derive(Debug, Default)]
pub struct SidebarState {
    /// Collapse-aware click dispatcher; owns the expansion set.
    pub controller: CollapseController,
    /// Flattened rows in render order.
    pub rows: Vec<SidebarRow>,
    /// Focus flag for the panel in the global focus tree.
    pub container_focus: FocusFlag,
    /// Focus flags per row; kept in sync with `rows`.
    pub row_focus_flags: Vec<FocusFlag>,
    /// Last rendered panel area, for mouse hit testing.
    pub last_area: Rect,
    /// Per-row line areas recorded during the last render.
    pub row_areas: Vec<Rect>,
}

impl SidebarState {
    /// Creates an empty sidebar state; call [`SidebarState::sync`] to
    /// populate the rows.
    pub fn new() -> Self {
        Self {
            controller: CollapseController::default(),
            rows: Vec::new(),
            container_focus: FocusFlag::named("sidebar"),
            row_focus_flags: Vec::new(),
            last_area: Rect::default(),
            row_areas: Vec::new(),
        }
    }

    /// Recomputes the row set from the catalog and the moment's UI state,
    /// preserving row focus across the rebuild where the focused row still
    /// exists.
    pub fn sync(&mut self, tree: &NavigationTree, route: &str, sidebar_collapsed: bool) {
        let focused_id = self.focused_row().map(|(_, row)| row.id.clone());

        let groups = project(tree, route, sidebar_collapsed, self.controller.expansion());
        self.rows = flatten_groups(&groups, sidebar_collapsed);
        self.row_focus_flags = self
            .rows
            .iter()
            .map(|row| FocusFlag::named(&format!("sidebar.item.{}", row.id)))
            .collect();

        if let Some(id) = focused_id
            && let Some(idx) = self.rows.iter().position(|row| row.id == id)
        {
            self.row_focus_flags[idx].set(true);
        }
    }

    /// The focused row, if any row currently holds focus.
    pub fn focused_row(&self) -> Option<(usize, &SidebarRow)> {
        let idx = self.row_focus_flags.iter().position(|flag| flag.get())?;
        self.rows.get(idx).map(|row| (idx, row))
    }

    /// Returns the focus flag of the next/previous row, wrapping at both
    /// ends. `None` when no row currently has focus.
    pub fn cycle_focus(&self, increment: bool) -> Option<FocusFlag> {
        let len = self.row_focus_flags.len();
        if len == 0 {
            return None;
        }
        let idx = self.row_focus_flags.iter().position(|flag| flag.get())?;
        let next = if increment { (idx + 1) % len } else { (idx + len - 1) % len };
        self.row_focus_flags.get(next).cloned()
    }

    /// Index of the row highlighted for the current route, if visible.
    pub fn active_row_index(&self) -> Option<usize> {
        self.rows.iter().position(|row| row.show_as_active)
    }

    /// Tears the panel down: discards all expansion state so every parent
    /// is Closed on the next session.
    pub fn teardown(&mut self) {
        self.controller.reset();
        self.rows.clear();
        self.row_focus_flags.clear();
        self.row_areas.clear();
    }
}

/// Flattens the projected groups into render-order rows. Children follow
/// their (open) parent; group headings attach to the first row of each
/// group and are dropped entirely in collapsed mode.
fn flatten_groups(groups: &[GroupRender], sidebar_collapsed: bool) -> Vec<SidebarRow> {
    let mut rows = Vec::new();
    for group in groups {
        let mut first_in_group = true;
        for item in &group.items {
            push_item(&mut rows, item, 0, {
                if first_in_group && !sidebar_collapsed {
                    Some(group.label.clone())
                } else {
                    None
                }
            });
            first_in_group = false;
        }
    }
    rows
}

fn push_item(rows: &mut Vec<SidebarRow>, item: &ItemRender, depth: u8, group_label: Option<String>) {
    rows.push(SidebarRow {
        id: item.id.clone(),
        label: item.label.clone(),
        icon: item.icon.clone(),
        badge: item.badge.clone(),
        description: item.description.clone(),
        depth,
        has_children: item.has_children,
        is_expanded: item.state.is_expanded,
        show_as_active: item.state.should_show_as_active,
        group_label,
    });
    for child in &item.children {
        push_item(rows, child, depth + 1, None);
    }
}

impl HasFocus for SidebarState {
    /// Each row is a focus leaf under the panel's container flag.
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        for flag in &self.row_focus_flags {
            builder.leaf_widget(flag);
        }
        builder.end(tag);
    }

    fn focus(&self) -> FocusFlag {
        self.container_focus.clone()
    }

    fn area(&self) -> Rect {
        self.last_area
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumina_nav::NavigationTree;

    fn tree() -> NavigationTree {
        NavigationTree::from_embedded_catalog().expect("load embedded catalog")
    }

    #[test]
    fn expanded_mode_lists_top_level_rows_with_group_headings() {
        let mut state = SidebarState::new();
        state.sync(&tree(), "/dashboard", false);

        let ids: Vec<&str> = state.rows.iter().map(|row| row.id.as_str()).collect();
        assert_eq!(ids, ["dashboard", "images", "users", "stats", "storage", "settings"]);
        assert_eq!(state.rows[0].group_label.as_deref(), Some("General"));
        assert_eq!(state.rows[3].group_label.as_deref(), Some("System"));
        assert!(state.rows[1].group_label.is_none());
        assert_eq!(state.rows.len(), state.row_focus_flags.len());
    }

    #[test]
    fn open_parent_inserts_child_rows_below_it() {
        let mut state = SidebarState::new();
        let tree = tree();
        let images = tree.find_by_id("images").expect("images in catalog");
        state.controller.handle_click(images, false);
        state.sync(&tree, "/dashboard", false);

        let ids: Vec<&str> = state.rows.iter().map(|row| row.id.as_str()).collect();
        assert_eq!(
            &ids[1..5],
            &["images", "images-list", "images-upload", "images-categories"]
        );
        assert_eq!(state.rows[2].depth, 1);
        assert!(state.rows[1].is_expanded);
    }

    #[test]
    fn collapsed_mode_drops_headings_and_children() {
        let mut state = SidebarState::new();
        let tree = tree();
        let images = tree.find_by_id("images").expect("images in catalog");
        state.controller.handle_click(images, false);
        state.sync(&tree, "/dashboard", true);

        assert!(state.rows.iter().all(|row| row.depth == 0));
        assert!(state.rows.iter().all(|row| row.group_label.is_none()));
        assert!(state.rows.iter().all(|row| !row.is_expanded));
    }

    #[test]
    fn active_row_follows_child_route_to_parent_highlight() {
        let mut state = SidebarState::new();
        state.sync(&tree(), "/users/roles", false);

        let active = state.active_row_index().expect("an active row");
        assert_eq!(state.rows[active].id, "users");
    }

    #[test]
    fn sync_preserves_focus_on_surviving_row() {
        let mut state = SidebarState::new();
        let tree = tree();
        state.sync(&tree, "/dashboard", false);
        let storage = state.rows.iter().position(|row| row.id == "storage").expect("storage row");
        state.row_focus_flags[storage].set(true);

        // Opening "images" shifts row indices but keeps ids stable.
        let images = tree.find_by_id("images").expect("images in catalog");
        state.controller.handle_click(images, false);
        state.sync(&tree, "/dashboard", false);

        let (_, focused) = state.focused_row().expect("focus preserved");
        assert_eq!(focused.id, "storage");
    }

    #[test]
    fn cycle_focus_wraps_both_directions() {
        let mut state = SidebarState::new();
        state.sync(&tree(), "/dashboard", false);
        state.row_focus_flags[0].set(true);

        let down = state.cycle_focus(true).expect("next flag");
        assert_eq!(down.widget_id(), state.row_focus_flags[1].widget_id());

        let up = state.cycle_focus(false).expect("previous flag");
        let last = state.row_focus_flags.len() - 1;
        assert_eq!(up.widget_id(), state.row_focus_flags[last].widget_id());
    }

    #[test]
    fn teardown_resets_expansion_to_closed() {
        let mut state = SidebarState::new();
        let tree = tree();
        let users = tree.find_by_id("users").expect("users in catalog");
        state.controller.handle_click(users, false);
        assert!(state.controller.expansion().is_open("users"));

        state.teardown();
        assert!(!state.controller.expansion().is_open("users"));
        assert!(state.rows.is_empty());
    }
}
