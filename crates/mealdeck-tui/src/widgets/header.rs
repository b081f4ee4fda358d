//! Header bar showing the app title and the navigation breadcrumb

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{icons::IconSet, styles};

/// Main header: app title followed by the view path, e.g.
/// `MealDeck  Categories › Beef › Beef Stew`
pub struct MainHeader<'a> {
    breadcrumb: Vec<&'a str>,
    icons: IconSet,
}

impl<'a> MainHeader<'a> {
    pub fn new(breadcrumb: Vec<&'a str>, icons: IconSet) -> Self {
        Self { breadcrumb, icons }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut spans = vec![
            Span::styled(format!(" {} ", self.icons.app()), styles::accent()),
            Span::styled("MealDeck", styles::accent_bold()),
            Span::raw("  "),
        ];

        let last = self.breadcrumb.len().saturating_sub(1);
        for (i, crumb) in self.breadcrumb.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(
                    format!(" {} ", self.icons.separator()),
                    styles::text_muted(),
                ));
            }
            let style = if i == last {
                styles::text_bright_bold()
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(*crumb, style));
        }

        buf.set_line(inner.x, inner.y, &Line::from(spans), inner.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use mealdeck_app::config::IconMode;

    #[test]
    fn test_header_renders_title() {
        let mut term = TestTerminal::new();
        let header = MainHeader::new(vec!["Categories"], IconSet::new(IconMode::Unicode));

        term.render_widget(header, term.area());

        assert!(term.buffer_contains("MealDeck"));
        assert!(term.buffer_contains("Categories"));
    }

    #[test]
    fn test_header_renders_breadcrumb_path() {
        let mut term = TestTerminal::new();
        let header = MainHeader::new(
            vec!["Categories", "Beef", "Beef Stew"],
            IconSet::new(IconMode::Unicode),
        );

        term.render_widget(header, term.area());

        assert!(term.line_contains(1, "Categories \u{203a} Beef \u{203a} Beef Stew"));
    }
}
