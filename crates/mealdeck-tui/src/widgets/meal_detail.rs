//! Meal detail: thumbnail, name, facts, video link and instructions

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget, Wrap},
};

use mealdeck_app::view::{MealDetailView, TextViewport};
use mealdeck_core::Meal;

use crate::theme::{icons::IconSet, styles};

use super::ImageView;

const TOP_HEIGHT: u16 = 12;
const IMAGE_WIDTH: u16 = 24;

pub const WATCH_ON_YOUTUBE: &str = "Watch on YouTube";

/// Draws a [`MealDetailView`] and records the wrapped height of its
/// instructions back into the view, so scrolling stops at the last row.
pub struct MealDetailPane {
    icons: IconSet,
    show_images: bool,
}

impl MealDetailPane {
    pub fn new(icons: IconSet) -> Self {
        Self {
            icons,
            show_images: true,
        }
    }

    pub fn show_images(mut self, show: bool) -> Self {
        self.show_images = show;
        self
    }
}

fn facts<'a>(meal: &'a Meal, icons: &IconSet) -> Vec<Line<'a>> {
    let mut lines = vec![
        Line::from(Span::styled(meal.name.as_str(), styles::text_bright_bold())),
        Line::from(""),
    ];

    let fact = |label: &'static str, value: &Option<String>| {
        value
            .as_deref()
            .filter(|v| !v.trim().is_empty())
            .map(|v| {
                Line::from(vec![
                    Span::styled(format!("{label:<9}"), styles::text_muted()),
                    Span::styled(v.to_string(), styles::text_secondary()),
                ])
            })
    };
    lines.extend(fact("Category", &meal.category));
    lines.extend(fact("Area", &meal.area));

    let tags = meal.tag_list();
    if !tags.is_empty() {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<9}", "Tags"), styles::text_muted()),
            Span::styled(tags.join(", "), styles::text_secondary()),
        ]));
    }
    lines.extend(fact("Source", &meal.source_url));

    if meal.video_url().is_some() {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", icons.video()), styles::link()),
            Span::styled(WATCH_ON_YOUTUBE, styles::link()),
            Span::styled("  (o)", styles::keybinding()),
        ]));
    }

    lines
}

impl StatefulWidget for MealDetailPane {
    type State = MealDetailView;

    fn render(self, area: Rect, buf: &mut Buffer, view: &mut MealDetailView) {
        let instructions = view.meal.instructions().map(str::to_owned);
        let constraints = if instructions.is_some() {
            [Constraint::Length(TOP_HEIGHT), Constraint::Min(0)]
        } else {
            [Constraint::Min(0), Constraint::Length(0)]
        };
        let [top, bottom] = Layout::vertical(constraints).areas(area);

        let block = styles::glass_block(false);
        let inner = block.inner(top);
        block.render(top, buf);

        if inner.height > 0 && inner.width > 0 {
            let image_width = if self.show_images {
                IMAGE_WIDTH.min(inner.width / 3)
            } else {
                0
            };
            let [image_area, text_area] =
                Layout::horizontal([Constraint::Length(image_width), Constraint::Min(0)])
                    .spacing(1)
                    .areas(inner);

            if image_width > 0 {
                ImageView::new(view.images.get(&view.meal.thumbnail_url))
                    .placeholder(self.icons.image())
                    .render(image_area, buf);
            }

            Paragraph::new(facts(&view.meal, &self.icons))
                .wrap(Wrap { trim: true })
                .render(text_area, buf);
        }

        let Some(text) = instructions else {
            return;
        };
        let block = styles::glass_block(true).title(" Instructions ");
        let text_area = block.inner(bottom);
        block.render(bottom, buf);

        let paragraph = Paragraph::new(text)
            .style(styles::text_primary())
            .wrap(Wrap { trim: false });
        let content_rows =
            u16::try_from(paragraph.line_count(text_area.width)).unwrap_or(u16::MAX);
        view.set_viewport(TextViewport {
            content_rows,
            visible_rows: text_area.height,
        });

        paragraph.scroll((view.scroll, 0)).render(text_area, buf);
    }
}
