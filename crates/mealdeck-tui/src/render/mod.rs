//! Main render/view function (View in TEA pattern)


use mealdeck_app::state::{AppState, UiMode};
use mealdeck_app::view::Screen;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::{icons::IconSet, palette};

/// Render the complete UI (View function in TEA)
///
/// Everything drawn comes from the current view on the navigation stack.
/// The only write back is the meal view's instruction viewport, which
/// bounds its scrolling.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);
    let icons = IconSet::new(state.settings.ui.icons);
    let show_images = state.settings.ui.show_images;
    let filter_active = state.ui_mode == UiMode::FilterInput;

    frame.render_widget(
        widgets::MainHeader::new(state.breadcrumb(), icons),
        areas.header,
    );

    match state.current_mut() {
        Screen::CategoryList(view) => frame.render_widget(
            widgets::CategoryBrowser::new(view, icons)
                .filter_active(filter_active)
                .show_images(show_images),
            areas.body,
        ),
        Screen::CategoryDetail(view) => frame.render_widget(
            widgets::CategoryDetailPane::new(view, icons)
                .filter_active(filter_active)
                .show_images(show_images),
            areas.body,
        ),
        Screen::MealDetail(view) => frame.render_stateful_widget(
            widgets::MealDetailPane::new(icons).show_images(show_images),
            areas.body,
            view,
        ),
    }

    frame.render_widget(
        widgets::KeyHints::new(state.current(), state.ui_mode, state.depth() == 1),
        areas.footer,
    );
}
