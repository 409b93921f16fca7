//! Top-level view composition and event routing.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use lumina_types::{Effect, Modal, Msg};
use ratatui::{
    prelude::*,
    widgets::{Block, Clear, Paragraph},
};

use crate::app::App;
use crate::ui::components::{
    BreadcrumbBarComponent, Component, HelpComponent, SectionComponent, SidebarComponent,
};
use crate::ui::layout::create_main_layout;
use crate::ui::theme::helpers as th;
use crate::ui::utils::centered_rect;

/// Composes the console shell: sidebar, breadcrumb bar, content pane and
/// hint bar, with the help modal rendered on top when open.
///
/// Key events flow to the open modal first, then to whichever component
/// holds focus; global chords (Ctrl+B, `?`) are handled here.
#[derive(Debug, Default)]
pub struct MainView {
    sidebar_view: SidebarComponent,
    breadcrumbs_view: BreadcrumbBarComponent,
    section_view: SectionComponent,
    help_view: HelpComponent,
}

impl Component for MainView {
    fn handle_message(&mut self, app: &mut App, msg: Msg) -> Vec<Effect> {
        app.update(&msg)
    }

    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if app.open_modal_kind.is_some() {
            return self.help_view.handle_key_events(app, key);
        }

        if key.code == KeyCode::Char('b') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return vec![Effect::ToggleSidebar];
        }
        if key.code == KeyCode::Char('?') {
            return vec![Effect::ShowModal(Modal::Help)];
        }

        if app.sidebar.container_focus.get() {
            return self.sidebar_view.handle_key_events(app, key);
        }
        if app.section.container_focus.get() {
            return self.section_view.handle_key_events(app, key);
        }

        // Nothing focused yet: fall back to focus cycling.
        match key.code {
            KeyCode::Tab => {
                app.focus.next();
            }
            KeyCode::BackTab => {
                app.focus.prev();
            }
            _ => {}
        }
        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if app.open_modal_kind.is_some() {
            return self.help_view.handle_mouse_events(app, mouse);
        }

        let mut effects = Vec::new();
        effects.extend(self.sidebar_view.handle_mouse_events(app, mouse));
        effects.extend(self.section_view.handle_mouse_events(app, mouse));
        effects
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        // Fill the whole background for consistency across panels.
        let bg_fill = Paragraph::new("").style(Style::default().bg(app.ctx.theme.roles().background));
        frame.render_widget(bg_fill, area);

        let regions = create_main_layout(area, app.store.sidebar_collapsed());

        self.sidebar_view.render(frame, regions[0], app);
        self.breadcrumbs_view.render(frame, regions[1], app);
        self.section_view.render(frame, regions[2], app);

        let hint_spans = self.get_hint_spans(app);
        let hints = Paragraph::new(Line::from(hint_spans)).style(app.ctx.theme.text_muted_style());
        frame.render_widget(hints, regions[3]);

        if app.open_modal_kind.is_some() {
            frame.render_widget(
                Block::default().style(app.ctx.theme.modal_background_style()).dim(),
                frame.area(),
            );
            let modal_area = centered_rect(60, 60, area);
            frame.render_widget(Clear, modal_area);
            self.help_view.render(frame, modal_area, app);
        }
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        let mut spans: Vec<Span> = vec![Span::styled("Hints: ", app.ctx.theme.text_muted_style())];

        if app.open_modal_kind.is_some() {
            spans.extend(self.help_view.get_hint_spans(app));
            return spans;
        }

        if app.sidebar.container_focus.get() {
            spans.extend(self.sidebar_view.get_hint_spans(app));
        } else if app.section.container_focus.get() {
            spans.extend(self.section_view.get_hint_spans(app));
        }

        spans.extend(th::build_hint_spans(
            &*app.ctx.theme,
            &[(" Ctrl+B", " Toggle sidebar "), ("?", " Help "), ("Ctrl+C", " Quit ")],
        ));
        spans
    }
}
