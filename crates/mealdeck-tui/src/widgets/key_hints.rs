//! Footer line listing the keys that do something on the current view

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use mealdeck_app::state::UiMode;
use mealdeck_app::view::Screen;

use crate::theme::styles;

pub struct KeyHints<'a> {
    screen: &'a Screen,
    ui_mode: UiMode,
    is_root: bool,
}

impl<'a> KeyHints<'a> {
    pub fn new(screen: &'a Screen, ui_mode: UiMode, is_root: bool) -> Self {
        Self {
            screen,
            ui_mode,
            is_root,
        }
    }

    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        if self.ui_mode == UiMode::FilterInput {
            return vec![
                ("Enter", "keep filter"),
                ("Esc", "clear"),
                ("Ctrl+U", "erase"),
            ];
        }

        let back = if self.is_root { "quit" } else { "back" };
        match self.screen {
            Screen::CategoryList(_) | Screen::CategoryDetail(_) => vec![
                ("\u{2191}\u{2193}", "move"),
                ("Enter", "open"),
                ("/", "filter"),
                ("Esc", back),
                ("q", "quit"),
            ],
            Screen::MealDetail(view) => {
                let mut hints = vec![("\u{2191}\u{2193}", "scroll")];
                if view.meal.video_url().is_some() {
                    hints.push(("o", "watch video"));
                }
                hints.push(("Esc", "back"));
                hints.push(("q", "quit"));
                hints
            }
        }
    }
}

impl Widget for KeyHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let mut spans = vec![Span::raw(" ")];
        for (i, (key, action)) in self.hints().into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", styles::text_muted()));
            }
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::styled(format!(" {action}"), styles::text_muted()));
        }

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
