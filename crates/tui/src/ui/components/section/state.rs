use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;

use super::scroll::ScrollMetrics;

/// State for the content pane showing the current section.
#[derive(Debug)]
pub struct SectionState {
    /// Focus flag for the pane in the global focus tree.
    pub container_focus: FocusFlag,
    /// Focus leaf for the scrollable body.
    pub body_focus: FocusFlag,
    /// Scroll bookkeeping for the body text.
    pub scroll: ScrollMetrics,
    /// Last rendered area, for mouse focus integration.
    pub last_area: Rect,
}

impl Default for SectionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionState {
    pub fn new() -> Self {
        Self {
            container_focus: FocusFlag::named("section"),
            body_focus: FocusFlag::named("section.body"),
            scroll: ScrollMetrics::default(),
            last_area: Rect::default(),
        }
    }

    /// Resets scroll when the displayed route changes.
    pub fn on_route_changed(&mut self) {
        self.scroll.scroll_to_top();
    }
}

impl HasFocus for SectionState {
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        builder.leaf_widget(&self.body_focus);
        builder.end(tag);
    }

    fn focus(&self) -> FocusFlag {
        self.container_focus.clone()
    }

    fn area(&self) -> Rect {
        self.last_area
    }
}
