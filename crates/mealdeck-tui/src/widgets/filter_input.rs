//! Inline row filter prompt

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Clear, Widget},
};

use mealdeck_app::view::ListCursor;

use crate::theme::styles;

/// Split a list area into the list and, when a filter is shown, a
/// one-line prompt below it
pub fn split_for_filter(area: Rect, cursor: &ListCursor, active: bool) -> (Rect, Option<Rect>) {
    if !active && cursor.filter.is_empty() {
        return (area, None);
    }
    let [list, prompt] = Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(area);
    (list, Some(prompt))
}

/// One-line prompt: `/text_` while typing, `/text` once committed
pub struct FilterInput<'a> {
    text: &'a str,
    active: bool,
    matches: usize,
}

impl<'a> FilterInput<'a> {
    pub fn new(text: &'a str, active: bool, matches: usize) -> Self {
        Self {
            text,
            active,
            matches,
        }
    }
}

impl Widget for FilterInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        Clear.render(area, buf);

        let mut spans = vec![
            Span::styled("/", styles::keybinding()),
            Span::styled(self.text, styles::text_primary()),
        ];
        if self.active {
            spans.push(Span::styled("_", styles::keybinding()));
        }
        if !self.text.is_empty() {
            let label = if self.matches == 1 { "match" } else { "matches" };
            spans.push(Span::styled(
                format!("  {} {}", self.matches, label),
                styles::text_muted(),
            ));
        }

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
