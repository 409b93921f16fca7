//! Shared rendering utilities.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Returns a rect centered in `r` covering the given percentages of it.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    let area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1]);
    area[1]
}

/// Maps a mouse position to the index of the containing row rect, if the
/// position falls inside `container` at all.
pub fn find_target_index_by_mouse_position(container: &Rect, rows: &[Rect], x: u16, y: u16) -> Option<usize> {
    if !container.contains(ratatui::layout::Position { x, y }) {
        return None;
    }
    rows.iter()
        .position(|rect| rect.contains(ratatui::layout::Position { x, y }))
}

/// Truncates `text` to at most `max_width` display columns, appending an
/// ellipsis when anything was cut. Width-aware so wide glyphs count as two
/// columns.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(text) <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0usize;
    let budget = max_width.saturating_sub(1);
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_preserves_short_text() {
        assert_eq!(truncate_to_width("Images", 10), "Images");
    }

    #[test]
    fn truncation_appends_ellipsis() {
        assert_eq!(truncate_to_width("Storage Strategies", 10), "Storage S…");
    }

    #[test]
    fn hit_test_maps_rows_and_rejects_outside() {
        let container = Rect::new(0, 0, 20, 10);
        let rows = vec![Rect::new(0, 1, 20, 1), Rect::new(0, 2, 20, 1)];
        assert_eq!(find_target_index_by_mouse_position(&container, &rows, 5, 2), Some(1));
        assert_eq!(find_target_index_by_mouse_position(&container, &rows, 5, 5), None);
        assert_eq!(find_target_index_by_mouse_position(&container, &rows, 30, 1), None);
    }
}
