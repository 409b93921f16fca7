use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use lumina_nav::is_child_active;
use lumina_types::{Effect, NavigationItem};
use ratatui::{
    Frame,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Borders, Paragraph},
};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::icons;
use crate::ui::theme::helpers as th;

/// Content pane for the current route.
///
/// Resolves the route against the catalog and renders an informational
/// panel: section heading, description, badge, the child sections with the
/// active one marked, and the parent section for child routes. A lookup
/// miss renders a "no such section" pane instead of failing.
#[derive(Debug, Default)]
pub struct SectionComponent;

impl SectionComponent {
    /// Builds the body as owned lines so scroll state can be updated while
    /// they are held.
    fn build_lines(app: &App, item: Option<&NavigationItem>) -> Vec<Line<'static>> {
        let theme = &*app.ctx.theme;
        let route = app.store.current_route();
        let mut lines: Vec<Line<'static>> = Vec::new();

        let Some(item) = item else {
            lines.push(Line::from(Span::styled(
                "No section matches this route.".to_string(),
                theme.text_secondary_style(),
            )));
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(route.to_string(), theme.text_muted_style())));
            return lines;
        };

        // Child routes show their parent section for context.
        let parent = app
            .tree
            .groups
            .iter()
            .flat_map(|group| group.items.iter())
            .find(|candidate| candidate.has_children() && is_child_active(candidate, route));

        let mut heading = vec![Span::styled(
            format!("{} {}", icons::glyph(&item.icon), item.label),
            theme.text_primary_style().add_modifier(Modifier::BOLD),
        )];
        if let Some(badge) = item.badge.as_deref() {
            heading.push(Span::raw(" "));
            heading.push(Span::styled(format!("[{badge}]"), theme.badge_style()));
        }
        lines.push(Line::from(heading));

        if let Some(parent) = parent {
            lines.push(Line::from(Span::styled(
                format!("in {}", parent.label),
                theme.text_muted_style(),
            )));
        }
        lines.push(Line::default());

        if let Some(description) = item.description.as_deref() {
            lines.push(Line::from(Span::styled(
                description.to_string(),
                theme.text_secondary_style(),
            )));
            lines.push(Line::default());
        }

        lines.push(Line::from(Span::styled(item.href.clone(), theme.text_muted_style())));

        if item.has_children() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "Subsections".to_string(),
                theme.text_secondary_style().add_modifier(Modifier::BOLD),
            )));
            for child in &item.children {
                let active = child.href == route;
                let marker = if active { "▸ " } else { "  " };
                let style = if active {
                    theme.accent_emphasis_style()
                } else {
                    theme.text_primary_style()
                };
                lines.push(Line::from(vec![
                    Span::styled(marker.to_string(), theme.accent_primary_style()),
                    Span::styled(format!("{} {}", icons::glyph(&child.icon), child.label), style),
                    Span::styled(format!("  {}", child.href), theme.text_muted_style()),
                ]));
            }
        }

        lines
    }
}

impl Component for SectionComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Tab => {
                app.focus.next();
            }
            KeyCode::BackTab => {
                app.focus.prev();
            }
            KeyCode::Down => app.section.scroll.scroll_lines(1),
            KeyCode::Up => app.section.scroll.scroll_lines(-1),
            _ => {}
        }
        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        match mouse.kind {
            MouseEventKind::ScrollDown => app.section.scroll.scroll_lines(1),
            MouseEventKind::ScrollUp => app.section.scroll.scroll_lines(-1),
            _ => {}
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let item = app.tree.find_by_href(app.store.current_route());
        let lines = Self::build_lines(app, item);
        let focused = app.section.body_focus.get();

        let block = th::block(&*app.ctx.theme, Some("Section"), focused).borders(Borders::ALL);
        let inner = block.inner(area);

        app.section.scroll.update_viewport_height(inner.height as usize);
        app.section.scroll.update_content_height(lines.len());
        let offset = app.section.scroll.offset();

        let body = Paragraph::new(lines).block(block).scroll((offset as u16, 0));
        frame.render_widget(body, area);

        app.section.last_area = area;
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        th::build_hint_spans(&*app.ctx.theme, &[(" ↑/↓", " Scroll ")])
    }
}
