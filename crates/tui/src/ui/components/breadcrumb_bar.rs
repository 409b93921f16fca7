//! Breadcrumb bar above the content pane.

use lumina_nav::breadcrumbs;
use ratatui::{
    Frame,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::icons;

/// Renders the breadcrumb trail for the current route.
///
/// Purely presentational: no focus, no input handling. The trail always
/// starts at the console root and appends the resolved section when the
/// route matches one; unresolved routes show the root alone.
#[derive(Debug, Default)]
pub struct BreadcrumbBarComponent;

impl Component for BreadcrumbBarComponent {
    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let trail = breadcrumbs(&app.tree, app.store.current_route());

        let mut spans: Vec<Span> = vec![Span::raw(" ")];
        let last = trail.len() - 1;
        for (index, crumb) in trail.iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled(" › ", theme.text_muted_style()));
            }
            let style = if index == last {
                theme.text_primary_style().add_modifier(Modifier::BOLD)
            } else {
                theme.text_secondary_style()
            };
            spans.push(Span::styled(
                format!("{} {}", icons::glyph(&crumb.icon), crumb.label),
                style,
            ));
        }

        let bar = Paragraph::new(Line::from(spans)).style(
            ratatui::style::Style::default().bg(theme.roles().surface_muted),
        );
        frame.render_widget(bar, area);
    }
}
