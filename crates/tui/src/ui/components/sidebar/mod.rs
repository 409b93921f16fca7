//! Collapsible sidebar navigation panel.
//!
//! State ([`SidebarState`]) and rendering/event handling
//! ([`SidebarComponent`]) are split so the row projection, focus cycling
//! and teardown semantics stay unit-testable without a terminal.

mod sidebar_component;
mod state;

pub use sidebar_component::SidebarComponent;
pub use state::{SidebarRow, SidebarState};
