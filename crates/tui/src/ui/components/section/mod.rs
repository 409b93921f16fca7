//! Content pane for the active console section.

mod scroll;
mod section_component;
mod state;

pub use scroll::ScrollMetrics;
pub use section_component::SectionComponent;
pub use state::SectionState;
