//! Help modal listing the console key bindings.

use crossterm::event::{KeyCode, KeyEvent};
use lumina_types::Effect;
use ratatui::{
    Frame,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Borders, Paragraph},
};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::helpers as th;

const BINDINGS: &[(&str, &str)] = &[
    ("↑ / ↓", "Move between sidebar rows / scroll content"),
    ("Enter", "Open section or toggle a parent"),
    ("→ / ←", "Expand / close a parent section"),
    ("Tab / Shift+Tab", "Cycle focus between panels"),
    ("Ctrl+B", "Collapse or expand the sidebar"),
    ("?", "Show this help"),
    ("Esc", "Close this help"),
    ("Ctrl+C", "Quit"),
];

/// Keyboard shortcut reference shown as a modal overlay.
#[derive(Debug, Default)]
pub struct HelpComponent;

impl Component for HelpComponent {
    fn handle_key_events(&mut self, _app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => vec![Effect::CloseModal],
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let key_width = BINDINGS.iter().map(|(key, _)| key.len()).max().unwrap_or(0);

        let mut lines: Vec<Line> = vec![Line::default()];
        for (key, action) in BINDINGS {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {key:>key_width$}  "),
                    theme.accent_primary_style().add_modifier(Modifier::BOLD),
                ),
                Span::styled(*action, theme.text_primary_style()),
            ]));
        }

        let block = th::block(theme, Some("Help"), true).borders(Borders::ALL);
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        th::build_hint_spans(&*app.ctx.theme, &[(" Esc", " Close ")])
    }
}
