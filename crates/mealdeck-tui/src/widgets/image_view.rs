//! Thumbnail rendering with upper half blocks
//!
//! Each cell shows two vertical pixels: the foreground colors the upper half
//! (`▀`) and the background the lower half.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use mealdeck_core::Thumbnail;

use crate::theme::{palette, styles};

const UPPER_HALF: &str = "\u{2580}";

/// A thumbnail, or a placeholder while it is missing
pub struct ImageView<'a> {
    thumbnail: Option<&'a Thumbnail>,
    placeholder: &'a str,
}

impl<'a> ImageView<'a> {
    pub fn new(thumbnail: Option<&'a Thumbnail>) -> Self {
        Self {
            thumbnail,
            placeholder: "",
        }
    }

    /// Text centered in the placeholder
    pub fn placeholder(mut self, text: &'a str) -> Self {
        self.placeholder = text;
        self
    }
}

impl Widget for ImageView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        match self.thumbnail {
            Some(thumbnail) => render_thumbnail(thumbnail, area, buf),
            None => render_placeholder(self.placeholder, area, buf),
        }
    }
}

fn render_thumbnail(thumbnail: &Thumbnail, area: Rect, buf: &mut Buffer) {
    let (px_w, px_h) = thumbnail.fit_within(area.width as u32, area.height as u32 * 2);
    let cols = px_w as u16;
    let rows = px_h.div_ceil(2) as u16;

    // Center within the area
    let x0 = area.x + (area.width - cols) / 2;
    let y0 = area.y + (area.height - rows) / 2;

    for row in 0..rows {
        for col in 0..cols {
            let top = thumbnail.sample(col as u32, row as u32 * 2, px_w, px_h);
            let bottom = if (row as u32 * 2 + 1) < px_h {
                Some(thumbnail.sample(col as u32, row as u32 * 2 + 1, px_w, px_h))
            } else {
                None
            };

            if let Some(cell) = buf.cell_mut((x0 + col, y0 + row)) {
                cell.set_symbol(UPPER_HALF).set_fg(rgb(top));
                match bottom {
                    Some(bottom) => cell.set_bg(rgb(bottom)),
                    None => cell.set_bg(palette::CARD_BG),
                };
            }
        }
    }
}

fn render_placeholder(text: &str, area: Rect, buf: &mut Buffer) {
    buf.set_style(area, Style::default().bg(palette::PLACEHOLDER_BG));

    if text.is_empty() {
        return;
    }
    let width = unicode_width::UnicodeWidthStr::width(text) as u16;
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height / 2;
    buf.set_stringn(
        x,
        y,
        text,
        area.width as usize,
        styles::text_muted().bg(palette::PLACEHOLDER_BG),
    );
}

fn rgb([r, g, b]: [u8; 3]) -> Color {
    Color::Rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    fn two_tone() -> Thumbnail {
        // Top row red, bottom row blue
        Thumbnail::new(2, 2, vec![[255, 0, 0], [255, 0, 0], [0, 0, 255], [0, 0, 255]]).unwrap()
    }

    #[test]
    fn test_placeholder_shows_text() {
        let mut term = TestTerminal::with_size(12, 4);
        term.render_widget(ImageView::new(None).placeholder("img"), term.area());
        assert!(term.buffer_contains("img"));
    }

    #[test]
    fn test_thumbnail_uses_half_blocks() {
        let mut term = TestTerminal::with_size(2, 1);
        let thumb = two_tone();
        term.render_widget(ImageView::new(Some(&thumb)), term.area());

        let cell = &term.buffer()[(0, 0)];
        assert_eq!(cell.symbol(), UPPER_HALF);
        assert_eq!(cell.fg, Color::Rgb(255, 0, 0));
        assert_eq!(cell.bg, Color::Rgb(0, 0, 255));
    }

    #[test]
    fn test_thumbnail_centered_in_wide_area() {
        let mut term = TestTerminal::with_size(10, 1);
        let thumb = two_tone();
        term.render_widget(ImageView::new(Some(&thumb)), term.area());

        // 2x2 pixels fit in 2 columns; (10 - 2) / 2 = 4
        assert_eq!(term.cell_at(3, 0), Some(" "));
        assert_eq!(term.cell_at(4, 0), Some(UPPER_HALF));
        assert_eq!(term.cell_at(5, 0), Some(UPPER_HALF));
        assert_eq!(term.cell_at(6, 0), Some(" "));
    }

    #[test]
    fn test_zero_area_is_noop() {
        let mut term = TestTerminal::with_size(4, 2);
        let thumb = two_tone();
        term.render_widget(ImageView::new(Some(&thumb)), Rect::new(0, 0, 0, 0));
        assert!(!term.buffer_contains(UPPER_HALF));
    }
}
