//! Shared data types for the Lumina admin console.
//!
//! This crate defines the plain data vocabulary used across the workspace:
//! the navigation catalog structures (`NavigationGroup`, `NavigationItem`),
//! breadcrumb entries, and the application-level `Msg`/`Effect` enums the
//! TUI runtime routes between components. It intentionally contains no
//! behavior beyond small accessors, so every other crate can depend on it
//! without pulling in UI or resolver logic.

use serde::{Deserialize, Serialize};

/// A single entry in the navigation catalog.
///
/// Items form a tree at most two levels deep below their group: a top-level
/// item may carry direct children, children are always leaves. `href` values
/// are exact route strings; query suffixes such as `/settings?tab=email`
/// are opaque here and compared byte-for-byte by the resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationItem {
    /// Stable identifier, unique across the entire tree.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Canonical route for this item.
    pub href: String,
    /// Symbolic icon name (e.g. "images", "shield"). Opaque to the
    /// navigation core; the UI maps it to a renderable glyph.
    #[serde(default)]
    pub icon: String,
    /// Optional short annotation rendered next to the label (e.g. "new").
    #[serde(default)]
    pub badge: Option<String>,
    /// Optional one-line description shown in content panes and hints.
    #[serde(default)]
    pub description: Option<String>,
    /// Route used when this item is activated while the sidebar is
    /// collapsed and the item has children. Falls back to the first child's
    /// `href`, then to `href` itself.
    #[serde(default)]
    pub default_href: Option<String>,
    /// Direct children; empty for leaf items.
    #[serde(default)]
    pub children: Vec<NavigationItem>,
}

impl NavigationItem {
    /// Whether this item carries child items.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// A presentational grouping of top-level navigation items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationGroup {
    /// Stable identifier for the group.
    pub id: String,
    /// Group heading shown above its items.
    pub label: String,
    /// Ordered top-level items.
    pub items: Vec<NavigationItem>,
}

/// One breadcrumb entry: a label plus the route it links to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crumb {
    /// Display label.
    pub label: String,
    /// Route the crumb resolves to.
    pub href: String,
    /// Symbolic icon name for the crumb.
    #[serde(default)]
    pub icon: String,
}

impl Crumb {
    /// Creates a crumb from label, href and icon name.
    pub fn new(label: impl Into<String>, href: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            icon: icon.into(),
        }
    }
}

/// Messages that drive application state updates.
///
/// Key and mouse input is delivered to components directly by the runtime;
/// `Msg` covers the remaining application-wide events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Periodic UI tick (animations, throbbers).
    Tick,
    /// Terminal resized to the given width and height.
    Resize(u16, u16),
}

/// Side effects reported by components for the runtime to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Navigate to the given route. The runtime updates the route store
    /// (notifying subscribers) before the content view switches.
    Navigate(String),
    /// Flip the sidebar between expanded and collapsed density.
    ToggleSidebar,
    /// Open a modal overlay.
    ShowModal(Modal),
    /// Close any open modal overlay.
    CloseModal,
}

/// Modal overlays the shell can display on top of the current view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    /// Keyboard shortcut reference.
    Help,
}
