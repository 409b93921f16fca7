use ratatui::{
    style::Modifier,
    text::Span,
    widgets::{Block, BorderType, Borders},
};

use super::roles::Theme;

/// Build a standard Block with theme surfaces and borders.
pub fn block<'a, T: Theme + ?Sized>(theme: &'a T, title: Option<&'a str>, focused: bool) -> Block<'a> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(theme.border_style(focused))
        .style(panel_style(theme));
    if let Some(t) = title {
        block = block.title(Span::styled(
            t,
            theme.text_secondary_style().add_modifier(Modifier::BOLD),
        ));
    }
    block
}

/// Style for panel-like containers (set background on widget using `.style`).
pub fn panel_style<T: Theme + ?Sized>(theme: &T) -> ratatui::style::Style {
    let roles = theme.roles();
    ratatui::style::Style::default().bg(roles.surface).fg(roles.text)
}

/// Builds the `" Key", " action"` span pairs shown in the hint bar: keys in
/// the accent color, descriptions muted.
pub fn build_hint_spans<'a, T: Theme + ?Sized>(theme: &T, pairs: &[(&'a str, &'a str)]) -> Vec<Span<'a>> {
    let mut spans = Vec::with_capacity(pairs.len() * 2);
    for (key, action) in pairs {
        spans.push(Span::styled(*key, theme.accent_emphasis_style()));
        spans.push(Span::styled(*action, theme.text_muted_style()));
    }
    spans
}
