//! Category detail: header from the held category and its meal list

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use mealdeck_app::view::{CategoryDetailView, Listable};

use crate::theme::{icons::IconSet, styles};

use super::{filter_input::split_for_filter, FilterInput, ImageView, RowList};

/// Rows given to the category header
const HEADER_HEIGHT: u16 = 9;

/// Columns given to the header thumbnail
const HEADER_IMAGE_WIDTH: u16 = 16;

pub const LOADING_MEALS: &str = "Loading meals...";

pub struct CategoryDetailPane<'a> {
    view: &'a CategoryDetailView,
    icons: IconSet,
    filter_active: bool,
    show_images: bool,
}

impl<'a> CategoryDetailPane<'a> {
    pub fn new(view: &'a CategoryDetailView, icons: IconSet) -> Self {
        Self {
            view,
            icons,
            filter_active: false,
            show_images: true,
        }
    }

    pub fn filter_active(mut self, active: bool) -> Self {
        self.filter_active = active;
        self
    }

    pub fn show_images(mut self, show: bool) -> Self {
        self.show_images = show;
        self
    }
}

impl Widget for CategoryDetailPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [header, body] =
            Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)]).areas(area);

        self.render_header(header, buf);

        let [left, right] =
            Layout::horizontal([Constraint::Percentage(55), Constraint::Min(0)]).areas(body);
        self.render_meals(left, buf);
        self.render_meal_preview(right, buf);
    }
}

impl CategoryDetailPane<'_> {
    /// Renders from the held category, before any meal data arrives
    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let category = &self.view.category;
        let image_width = if self.show_images {
            HEADER_IMAGE_WIDTH.min(inner.width / 3)
        } else {
            0
        };
        let [image_area, text_area] =
            Layout::horizontal([Constraint::Length(image_width), Constraint::Min(0)])
                .spacing(1)
                .areas(inner);

        if image_width > 0 {
            ImageView::new(self.view.images.get(&category.thumbnail_url))
                .placeholder(self.icons.image())
                .render(image_area, buf);
        }

        let lines = vec![
            Line::from(Span::styled(category.name.as_str(), styles::text_bright_bold())),
            Line::from(Span::styled(
                category.description.as_str(),
                styles::text_secondary(),
            )),
        ];
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(text_area, buf);
    }

    fn render_meals(&self, area: Rect, buf: &mut Buffer) {
        let cursor = &self.view.cursor;
        let visible = cursor.visible(self.view.items());
        let (list_area, prompt_area) = split_for_filter(area, cursor, self.filter_active);

        let title = format!(" Meals ({}) ", visible.len());
        let empty_text = if self.view.is_loading() {
            LOADING_MEALS
        } else {
            "No matching meals"
        };
        RowList::new(title, visible.iter().map(|m| m.label()).collect())
            .selected(cursor.selected)
            .icon(self.icons.meal())
            .empty_text(empty_text)
            .render(list_area, buf);

        if let Some(prompt_area) = prompt_area {
            FilterInput::new(&cursor.filter, self.filter_active, visible.len())
                .render(prompt_area, buf);
        }
    }

    fn render_meal_preview(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        let Some(meal) = self.view.selected() else {
            return;
        };
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let image_rows = if self.show_images {
            inner.height.saturating_sub(2)
        } else {
            0
        };
        let [image_area, text_area] =
            Layout::vertical([Constraint::Length(image_rows), Constraint::Min(0)]).areas(inner);

        if image_rows > 0 {
            ImageView::new(self.view.images.get(&meal.thumbnail_url))
                .placeholder(self.icons.image())
                .render(image_area, buf);
        }

        Paragraph::new(Line::from(Span::styled(
            meal.name.as_str(),
            styles::text_primary(),
        )))
        .wrap(Wrap { trim: true })
        .render(text_area, buf);
    }
}
