//! Highlight movement, drill-down and back navigation

use mealdeck_core::prelude::*;

use crate::message::Message;
use crate::state::{AppState, UiMode};
use crate::view::{CategoryDetailView, MealDetailView, Screen};

use super::{UpdateAction, UpdateResult};

/// Move the highlight (or scroll a meal's instructions) by `delta`
pub fn handle_move(state: &mut AppState, delta: isize) -> UpdateResult {
    let screen = state.current_mut();

    if let Screen::MealDetail(view) = screen {
        view.scroll_by(delta);
        return UpdateResult::none();
    }

    let visible_len = screen.visible_len();
    let moved = screen
        .cursor_mut()
        .is_some_and(|cursor| cursor.move_by(delta, visible_len));

    refresh_if(moved)
}

pub fn handle_select_first(state: &mut AppState) -> UpdateResult {
    let screen = state.current_mut();

    if let Screen::MealDetail(view) = screen {
        view.scroll = 0;
        return UpdateResult::none();
    }

    let moved = screen.cursor_mut().is_some_and(|cursor| cursor.select_first());
    refresh_if(moved)
}

pub fn handle_select_last(state: &mut AppState) -> UpdateResult {
    let screen = state.current_mut();

    if let Screen::MealDetail(view) = screen {
        view.scroll = view.max_scroll();
        return UpdateResult::none();
    }

    let visible_len = screen.visible_len();
    let moved = screen
        .cursor_mut()
        .is_some_and(|cursor| cursor.select_last(visible_len));
    refresh_if(moved)
}

/// A new highlight may need its thumbnail
fn refresh_if(moved: bool) -> UpdateResult {
    if moved {
        UpdateResult::message(Message::RefreshImages)
    } else {
        UpdateResult::none()
    }
}

/// Push a view for the highlighted row
pub fn handle_activate(state: &mut AppState) -> UpdateResult {
    match state.current() {
        Screen::CategoryList(view) => {
            let Some(category) = view.selected().cloned() else {
                return UpdateResult::none();
            };

            let view_id = state.allocate_view_id();
            let name = category.name.clone();
            debug!("Opening category '{}' as {}", name, view_id);
            state.push(Screen::CategoryDetail(CategoryDetailView::new(
                view_id, category,
            )));
            state.ui_mode = UiMode::Browse;

            UpdateResult::action_with_message(
                UpdateAction::FetchMeals {
                    view_id,
                    category: name,
                },
                Message::RefreshImages,
            )
        }

        Screen::CategoryDetail(view) => {
            let Some(meal) = view.selected().cloned() else {
                return UpdateResult::none();
            };

            let view_id = state.allocate_view_id();
            debug!("Opening meal '{}' ({}) as {}", meal.name, meal.id, view_id);
            state.push(Screen::MealDetail(MealDetailView::new(view_id, meal)));
            state.ui_mode = UiMode::Browse;

            UpdateResult::message(Message::RefreshImages)
        }

        Screen::MealDetail(_) => UpdateResult::none(),
    }
}

/// Pop the current view; on the root, clear an active filter or quit
pub fn handle_back(state: &mut AppState) -> UpdateResult {
    if state.ui_mode == UiMode::FilterInput {
        return UpdateResult::message(Message::CancelFilter);
    }

    if let Some(popped) = state.pop() {
        let view_id = popped.id();
        debug!("Closed {}", view_id);
        return UpdateResult::action(UpdateAction::CancelView { view_id });
    }

    let filtered = state
        .current()
        .cursor()
        .is_some_and(|cursor| !cursor.filter.is_empty());

    if filtered {
        UpdateResult::message(Message::CancelFilter)
    } else {
        UpdateResult::message(Message::Quit)
    }
}

/// Open the current meal's video link, if it has a usable one
pub fn handle_open_video(state: &mut AppState) -> UpdateResult {
    let Screen::MealDetail(view) = state.current() else {
        return UpdateResult::none();
    };

    match view.meal.video_url() {
        Some(url) => UpdateResult::action(UpdateAction::OpenUrl {
            url: url.to_string(),
            browser: state.settings.behavior.browser.clone(),
        }),
        None => {
            debug!("Meal {} has no video link", view.meal.id);
            UpdateResult::none()
        }
    }
}
