//! Scrolling list of labelled rows with one highlighted row

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthChar;

use crate::theme::styles;

/// A bordered list that keeps the highlighted row in view
pub struct RowList<'a> {
    title: Line<'a>,
    rows: Vec<&'a str>,
    selected: usize,
    icon: &'a str,
    empty_text: Option<&'a str>,
}

impl<'a> RowList<'a> {
    pub fn new(title: impl Into<Line<'a>>, rows: Vec<&'a str>) -> Self {
        Self {
            title: title.into(),
            rows,
            selected: 0,
            icon: "",
            empty_text: None,
        }
    }

    pub fn selected(mut self, selected: usize) -> Self {
        self.selected = selected;
        self
    }

    /// Glyph drawn before each row
    pub fn icon(mut self, icon: &'a str) -> Self {
        self.icon = icon;
        self
    }

    /// Text shown when there are no rows
    pub fn empty_text(mut self, text: &'a str) -> Self {
        self.empty_text = Some(text);
        self
    }
}

impl Widget for RowList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true).title(self.title);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.rows.is_empty() {
            if let Some(text) = self.empty_text {
                buf.set_stringn(
                    inner.x + 1,
                    inner.y,
                    text,
                    inner.width.saturating_sub(1) as usize,
                    styles::text_muted(),
                );
            }
            return;
        }

        let height = inner.height as usize;
        let selected = self.selected.min(self.rows.len() - 1);
        let offset = (selected + 1).saturating_sub(height);

        for (i, label) in self.rows.iter().enumerate().skip(offset).take(height) {
            let y = inner.y + (i - offset) as u16;
            let is_selected = i == selected;
            let row_style = if is_selected {
                styles::focused_selected()
            } else {
                styles::text_primary()
            };

            let mut spans = Vec::new();
            if !self.icon.is_empty() {
                let icon_style = if is_selected {
                    row_style
                } else {
                    styles::text_muted()
                };
                spans.push(Span::styled(format!(" {} ", self.icon), icon_style));
            } else {
                spans.push(Span::styled(" ", row_style));
            }
            let used: usize = spans.iter().map(Span::width).sum();
            let room = (inner.width as usize).saturating_sub(used + 1);
            spans.push(Span::styled(truncate_to_width(label, room), row_style));

            let row_area = Rect::new(inner.x, y, inner.width, 1);
            if is_selected {
                buf.set_style(row_area, row_style);
            }
            buf.set_line(inner.x, y, &Line::from(spans), inner.width);
        }
    }
}

/// Cut `text` to at most `max_width` columns, ending in `…` when shortened
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width - 1 {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('\u{2026}');
    out
}
