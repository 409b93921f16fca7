//! Main screen layout.

use ratatui::layout::{Constraint, Layout, Rect};

/// Sidebar width in expanded density.
const SIDEBAR_WIDTH: u16 = 28;
/// Sidebar width in collapsed density (icon rail).
const SIDEBAR_WIDTH_COLLAPSED: u16 = 7;

/// Splits the screen into the four fixed regions:
/// `[sidebar, breadcrumb bar, content, hint bar]`.
pub fn create_main_layout(area: Rect, sidebar_collapsed: bool) -> Vec<Rect> {
    let sidebar_width = if sidebar_collapsed {
        SIDEBAR_WIDTH_COLLAPSED
    } else {
        SIDEBAR_WIDTH
    };

    let outer = Layout::horizontal([
        Constraint::Length(sidebar_width), // Sidebar
        Constraint::Min(1),                // Content column
    ])
    .split(area);

    let content_column = Layout::vertical([
        Constraint::Length(1), // Breadcrumb bar
        Constraint::Min(1),    // Content pane
        Constraint::Length(1), // Hint bar
    ])
    .split(outer[1]);

    vec![outer[0], content_column[0], content_column[1], content_column[2]]
}
