//! Component trait for the Lumina console TUI.
//!
//! Components are self-contained UI elements: they handle the events the
//! main view routes to them, update their state struct on [`App`], and
//! render into the rect allocated by the layout. State changes never
//! happen during rendering; side effects are reported as [`Effect`]s for
//! the runtime to perform.

use crossterm::event::{KeyEvent, MouseEvent};
use lumina_types::{Effect, Msg};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

use crate::app::App;

/// A UI element with its own state and behavior.
///
/// All methods default to no-ops except `render`; components implement
/// only the hooks they care about.
pub trait Component: std::fmt::Debug {
    /// Handle an application-level message this component cares about.
    fn handle_message(&mut self, _app: &mut App, _msg: Msg) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle a key event when this component has focus.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle a mouse event targeting this component's area.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into the given area. Side-effect free except
    /// for frame drawing and recording hit-test areas.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);

    /// Styled hint spans describing the component's key bindings.
    fn get_hint_spans(&self, _app: &App) -> Vec<Span<'_>> {
        Vec::new()
    }
}
