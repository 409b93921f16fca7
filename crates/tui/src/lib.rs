//! Terminal user interface for the Lumina admin console.
//!
//! The TUI renders the console shell: a collapsible sidebar over the
//! navigation catalog, a breadcrumb bar, a content pane per section, and a
//! help overlay. It follows a component architecture: each UI element owns
//! its state, handles the events routed to it, and reports side effects
//! (`Effect`) back to the runtime instead of mutating global state
//! directly.
//!
//! ## Architecture
//!
//! - [`app::App`] is the central state container; components keep their
//!   state in dedicated structs hanging off it.
//! - `ui::components` hold the `Component` trait and its implementations.
//! - `ui::runtime` owns the terminal lifecycle and the single event loop:
//!   a dedicated input thread forwards crossterm events over a channel, a
//!   `tokio::select!` loop routes them, and rendering happens only when a
//!   frame is dirty.

pub mod app;
mod ui;

use anyhow::Result;

/// Startup options resolved by the binary before the TUI takes over.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Route to open with; defaults to the console root.
    pub initial_route: Option<String>,
    /// Start with the sidebar collapsed.
    pub start_collapsed: bool,
    /// Preferred theme name, if the user configured one.
    pub theme: Option<String>,
    /// Verbose state logging to the trace log.
    pub debug: bool,
}

/// Runs the admin console until the user quits.
///
/// Sets up the terminal (raw mode, alternate screen), builds the
/// application state from the embedded navigation catalog, and drives the
/// event loop. Returns when the user exits with Ctrl+C or when terminal
/// setup fails.
pub async fn run(options: RunOptions) -> Result<()> {
    ui::runtime::run_app(options).await
}
