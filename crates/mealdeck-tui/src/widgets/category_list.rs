//! Root view: category rows and a preview of the highlighted category

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use mealdeck_app::view::{CategoryListView, Listable};

use crate::theme::{icons::IconSet, styles};

use super::{filter_input::split_for_filter, FilterInput, ImageView, RowList};

pub struct CategoryBrowser<'a> {
    view: &'a CategoryListView,
    icons: IconSet,
    filter_active: bool,
    show_images: bool,
}

impl<'a> CategoryBrowser<'a> {
    pub fn new(view: &'a CategoryListView, icons: IconSet) -> Self {
        Self {
            view,
            icons,
            filter_active: false,
            show_images: true,
        }
    }

    /// Draw the filter prompt in input mode
    pub fn filter_active(mut self, active: bool) -> Self {
        self.filter_active = active;
        self
    }

    pub fn show_images(mut self, show: bool) -> Self {
        self.show_images = show;
        self
    }
}

impl Widget for CategoryBrowser<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [left, right] =
            Layout::horizontal([Constraint::Percentage(40), Constraint::Min(0)]).areas(area);

        let cursor = &self.view.cursor;
        let visible = cursor.visible(self.view.items());
        let (list_area, prompt_area) = split_for_filter(left, cursor, self.filter_active);

        let title = format!(" Categories ({}) ", visible.len());
        let mut list = RowList::new(title, visible.iter().map(|c| c.label()).collect())
            .selected(cursor.selected)
            .icon(self.icons.category());
        if !self.view.categories.is_pending() && !cursor.filter.is_empty() {
            list = list.empty_text("No matching categories");
        }
        list.render(list_area, buf);

        if let Some(prompt_area) = prompt_area {
            FilterInput::new(&cursor.filter, self.filter_active, visible.len())
                .render(prompt_area, buf);
        }

        self.render_preview(right, buf);
    }
}

impl CategoryBrowser<'_> {
    fn render_preview(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).title(" Preview ");
        let inner = block.inner(area);
        block.render(area, buf);

        let Some(category) = self.view.selected() else {
            return;
        };
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let image_rows = if self.show_images {
            inner.height.saturating_sub(4).min(12)
        } else {
            0
        };
        let [image_area, text_area] =
            Layout::vertical([Constraint::Length(image_rows), Constraint::Min(0)]).areas(inner);

        if image_rows > 0 {
            ImageView::new(self.view.images.get(&category.thumbnail_url))
                .placeholder(self.icons.image())
                .render(image_area, buf);
        }

        let lines = vec![
            Line::from(Span::styled(category.name.as_str(), styles::text_bright_bold())),
            Line::from(Span::styled(
                category.thumbnail_url.as_str(),
                styles::text_muted(),
            )),
            Line::from(""),
            Line::from(Span::styled(
                category.description.as_str(),
                styles::text_secondary(),
            )),
        ];
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(text_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use mealdeck_api::test_utils::test_category;
    use mealdeck_app::config::IconMode;
    use mealdeck_app::view::{Remote, ViewId};

    fn icons() -> IconSet {
        IconSet::new(IconMode::Unicode)
    }

    fn loaded_view() -> CategoryListView {
        let mut view = CategoryListView::new(ViewId(1));
        view.categories = Remote::Loaded(vec![
            test_category("1", "Beef"),
            test_category("2", "Chicken"),
            test_category("3", "Dessert"),
        ]);
        view
    }

    #[test]
    fn test_pending_renders_empty_list() {
        let view = CategoryListView::new(ViewId(1));
        let mut term = TestTerminal::new();
        term.render_widget(CategoryBrowser::new(&view, icons()), term.area());

        assert!(term.buffer_contains("Categories (0)"));
        assert!(!term.buffer_contains("Beef"));
    }

    #[test]
    fn test_rows_and_preview() {
        let mut view = loaded_view();
        view.cursor.selected = 1;
        let mut term = TestTerminal::new();
        term.render_widget(CategoryBrowser::new(&view, icons()), term.area());

        assert!(term.buffer_contains("Categories (3)"));
        assert!(term.buffer_contains("Beef"));
        assert!(term.buffer_contains("Dessert"));
        assert!(term.buffer_contains("http://img.test/chicken.png"));
        assert!(term.buffer_contains("Chicken dishes"));
    }

    #[test]
    fn test_filter_prompt_and_no_matches() {
        let mut view = loaded_view();
        view.cursor.filter = "zzz".to_string();
        let mut term = TestTerminal::new();
        term.render_widget(
            CategoryBrowser::new(&view, icons()).filter_active(true),
            term.area(),
        );

        assert!(term.buffer_contains("/zzz_"));
        assert!(term.buffer_contains("No matching categories"));
    }
}
