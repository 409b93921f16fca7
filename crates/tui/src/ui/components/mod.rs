//! UI components: sidebar, breadcrumb bar, section pane, help modal.

pub mod breadcrumb_bar;
pub mod component;
pub mod help;
pub mod section;
pub mod sidebar;

pub use breadcrumb_bar::BreadcrumbBarComponent;
pub use component::Component;
pub use help::HelpComponent;
pub use section::SectionComponent;
pub use sidebar::SidebarComponent;
