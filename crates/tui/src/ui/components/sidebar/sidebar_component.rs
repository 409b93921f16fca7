use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
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
use crate::ui::icons;
use crate::ui::theme::helpers as th;
use crate::ui::utils::{find_target_index_by_mouse_position, truncate_to_width};

/// The collapsible navigation sidebar.
///
/// Renders the projected row set with group headings, nesting indents,
/// expand chevrons, badges, and active/focus styling; in collapsed mode it
/// narrows to an icon rail. Activation follows the collapse-aware dispatch
/// rules: leaves navigate, collapsed parents navigate to their default
/// target, expanded parents toggle open/closed.
#[derive(Debug, Default)]
pub struct SidebarComponent;

impl SidebarComponent {
    /// Activates the row at `index`: dispatches through the collapse
    /// controller and resynchronizes the row set when expansion changed.
    fn activate_row(app: &mut App, index: usize) -> Vec<Effect> {
        let Some(row) = app.sidebar.rows.get(index) else {
            return Vec::new();
        };
        let id = row.id.clone();
        let collapsed = app.store.sidebar_collapsed();
        let Some(item) = app.tree.find_by_id(&id) else {
            return Vec::new();
        };

        match app.sidebar.controller.handle_click(item, collapsed) {
            Some(target) => vec![Effect::Navigate(target)],
            None => {
                // Expansion toggled; rebuild rows around the new open set.
                app.sync_sidebar();
                Vec::new()
            }
        }
    }

    /// Opens or closes the focused parent row to match `open`. No-op for
    /// leaves, in collapsed mode, or when already in the requested state.
    fn set_focused_expansion(app: &mut App, open: bool) {
        if app.store.sidebar_collapsed() {
            return;
        }
        let Some((_, row)) = app.sidebar.focused_row() else {
            return;
        };
        if !row.has_children || row.is_expanded == open {
            return;
        }
        let id = row.id.clone();
        let Some(item) = app.tree.find_by_id(&id) else {
            return;
        };
        app.sidebar.controller.handle_click(item, false);
        app.sync_sidebar();
    }
}

impl Component for SidebarComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        // Ensure a valid child focus when the container gains focus.
        let needs_init = app.sidebar.container_focus.get()
            && !app.sidebar.row_focus_flags.iter().any(|flag| flag.get());
        if needs_init {
            app.focus.focus(&app.sidebar);
        }

        match key.code {
            KeyCode::Tab => {
                app.focus.next();
                Vec::new()
            }
            KeyCode::BackTab => {
                app.focus.prev();
                Vec::new()
            }
            KeyCode::Down => {
                if let Some(flag) = app.sidebar.cycle_focus(true) {
                    app.focus.by_widget_id(flag.widget_id());
                }
                Vec::new()
            }
            KeyCode::Up => {
                if let Some(flag) = app.sidebar.cycle_focus(false) {
                    app.focus.by_widget_id(flag.widget_id());
                }
                Vec::new()
            }
            KeyCode::Right => {
                Self::set_focused_expansion(app, true);
                Vec::new()
            }
            KeyCode::Left => {
                Self::set_focused_expansion(app, false);
                Vec::new()
            }
            KeyCode::Enter => match app.sidebar.focused_row() {
                Some((index, _)) => Self::activate_row(app, index),
                None => Vec::new(),
            },
            _ => Vec::new(),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let Some(index) = find_target_index_by_mouse_position(
            &app.sidebar.last_area,
            &app.sidebar.row_areas,
            mouse.column,
            mouse.row,
        ) else {
            return Vec::new();
        };

        if let Some(flag) = app.sidebar.row_focus_flags.get(index) {
            app.focus.focus(flag);
        }
        Self::activate_row(app, index)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let collapsed = app.store.sidebar_collapsed();
        let focused = app.sidebar.row_focus_flags.iter().any(|flag| flag.get());
        let theme = &*app.ctx.theme;

        let title = if collapsed { None } else { Some("Lumina Admin") };
        let block = th::block(theme, title, focused).borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut row_areas: Vec<Rect> = Vec::with_capacity(app.sidebar.rows.len());
        let mut y = inner.y;
        let bottom = inner.y.saturating_add(inner.height);
        let label_width = inner.width.saturating_sub(2) as usize;

        for (index, row) in app.sidebar.rows.iter().enumerate() {
            if y >= bottom {
                // Off-screen rows get a zero rect so hit testing misses them.
                row_areas.push(Rect::default());
                continue;
            }

            if let Some(group) = row.group_label.as_deref() {
                if index > 0 && y + 1 < bottom {
                    y += 1;
                }
                if y >= bottom {
                    row_areas.push(Rect::default());
                    continue;
                }
                let heading = Paragraph::new(Line::from(Span::styled(
                    group.to_uppercase(),
                    theme.text_muted_style().add_modifier(Modifier::BOLD),
                )));
                frame.render_widget(heading, Rect::new(inner.x + 1, y, inner.width.saturating_sub(1), 1));
                y += 1;
                if y >= bottom {
                    row_areas.push(Rect::default());
                    continue;
                }
            }

            let is_row_focused = app
                .sidebar
                .row_focus_flags
                .get(index)
                .map(|flag| flag.get())
                .unwrap_or_default();

            let line = if collapsed {
                Line::from(Span::raw(format!("  {}  ", icons::glyph(&row.icon))))
            } else {
                let indent = "  ".repeat(row.depth as usize);
                let chevron = if row.has_children {
                    if row.is_expanded { "▾ " } else { "▸ " }
                } else {
                    "  "
                };
                let mut spans = vec![
                    Span::raw(format!("{indent}{chevron}")),
                    Span::raw(format!("{} ", icons::glyph(&row.icon))),
                    Span::raw(truncate_to_width(&row.label, label_width.saturating_sub(indent.len() + 4))),
                ];
                if let Some(badge) = row.badge.as_deref() {
                    spans.push(Span::raw(" "));
                    spans.push(Span::styled(format!("[{badge}]"), theme.badge_style()));
                }
                Line::from(spans)
            };

            let style = if row.show_as_active {
                theme.selection_style()
            } else if is_row_focused {
                theme.accent_emphasis_style()
            } else if row.depth > 0 {
                theme.text_secondary_style()
            } else {
                theme.text_primary_style()
            };

            let rect = Rect::new(inner.x, y, inner.width, 1);
            frame.render_widget(Paragraph::new(line).style(style), rect);
            row_areas.push(rect);
            y += 1;
        }

        app.sidebar.last_area = area;
        app.sidebar.row_areas = row_areas;
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        let mut spans = th::build_hint_spans(
            &*app.ctx.theme,
            &[(" ↑/↓", " Navigate "), ("Enter", " Open "), ("→/←", " Expand/close ")],
        );
        // Collapsed mode hides labels; surface the focused item's label and
        // badge in the hint bar instead.
        if app.store.sidebar_collapsed()
            && let Some((_, row)) = app.sidebar.focused_row()
        {
            let annotation = match row.badge.as_deref() {
                Some(badge) => format!(" {} [{badge}]", row.label),
                None => format!(" {}", row.label),
            };
            spans.push(Span::styled(annotation, app.ctx.theme.accent_primary_style()));
        }
        spans
    }
}
