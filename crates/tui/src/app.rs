//! Application state for the Lumina console TUI.
//!
//! `App` is the central state container: the immutable navigation catalog,
//! the UI store (current route + collapse flag), and one state struct per
//! component. Components receive `&mut App`, update their own state, and
//! report side effects; cross-cutting transitions (navigation, collapse
//! toggling) go through the helpers here so the store stays the single
//! mutation entry point.

use anyhow::Result;
use lumina_nav::{AdminStore, NavigationTree, resolver};
use lumina_types::{Effect, Modal, Msg};
use rat_focus::{Focus, FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;
use tracing::debug;

use crate::RunOptions;
use crate::ui::components::section::SectionState;
use crate::ui::components::sidebar::SidebarState;
use crate::ui::theme::{self, Theme};

/// Cross-cutting shared context owned by the App.
///
/// Holds runtime-wide objects that would otherwise be threaded through
/// every component call.
pub struct SharedCtx {
    /// Active color theme.
    pub theme: Box<dyn Theme>,
    /// Verbose state logging to the trace log.
    pub debug_enabled: bool,
}

impl std::fmt::Debug for SharedCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedCtx")
            .field("debug_enabled", &self.debug_enabled)
            .finish_non_exhaustive()
    }
}

/// The main application state.
pub struct App {
    /// Shared, cross-cutting context (theme, flags).
    pub ctx: SharedCtx,
    /// Immutable navigation catalog, loaded once at startup.
    pub tree: NavigationTree,
    /// UI store: current route and sidebar collapse flag.
    pub store: AdminStore,
    /// Sidebar component state.
    pub sidebar: SidebarState,
    /// Content pane component state.
    pub section: SectionState,
    /// Currently open modal overlay, if any.
    pub open_modal_kind: Option<Modal>,
    /// Container flag for the application focus tree.
    pub container_focus: FocusFlag,
    /// Global focus tree, rebuilt before each frame.
    pub focus: Focus,
}

impl App {
    /// Builds the application state from the embedded catalog and the
    /// resolved startup options.
    pub fn new(options: &RunOptions) -> Result<Self> {
        let tree = NavigationTree::from_embedded_catalog()?;
        let initial_route = options
            .initial_route
            .clone()
            .unwrap_or_else(|| resolver::ROOT_HREF.to_string());

        let mut store = AdminStore::new(initial_route, options.start_collapsed);
        store.subscribe(|event| debug!(?event, "store event"));

        let mut app = Self {
            ctx: SharedCtx {
                theme: theme::load(options.theme.as_deref()),
                debug_enabled: options.debug,
            },
            tree,
            store,
            sidebar: SidebarState::new(),
            section: SectionState::new(),
            open_modal_kind: None,
            container_focus: FocusFlag::named("app"),
            focus: Focus::default(),
        };
        app.sync_sidebar();
        let focus = FocusBuilder::build_for(&app);
        app.focus = focus;
        app.focus.first();
        Ok(app)
    }

    /// Updates application state based on a message, returning side
    /// effects for the runtime.
    pub fn update(&mut self, msg: &Msg) -> Vec<Effect> {
        match msg {
            // No animations run in the shell; ticks and resizes only
            // trigger the dirty-render path in the runtime.
            Msg::Tick | Msg::Resize(_, _) => Vec::new(),
        }
    }

    /// Navigates to `href`: updates the route store (notifying
    /// subscribers) and resynchronizes dependent component state before
    /// the next frame renders.
    pub fn navigate(&mut self, href: &str) {
        self.store.set_current_route(href);
        self.sync_sidebar();
        self.section.on_route_changed();
    }

    /// Flips the sidebar collapse flag and resynchronizes the row set.
    pub fn toggle_sidebar(&mut self) {
        self.store.toggle_sidebar();
        self.sync_sidebar();
    }

    /// Recomputes the sidebar rows from the catalog and the store state.
    pub fn sync_sidebar(&mut self) {
        let route = self.store.current_route().to_string();
        let collapsed = self.store.sidebar_collapsed();
        self.sidebar.sync(&self.tree, &route, collapsed);
    }
}

impl HasFocus for App {
    fn build(&self, builder: &mut FocusBuilder) {
        builder.widget(&self.sidebar);
        builder.widget(&self.section);
    }

    fn focus(&self) -> FocusFlag {
        self.container_focus.clone()
    }

    fn area(&self) -> Rect {
        Rect::default()
    }
}
