//! Row filter handlers

use crate::message::Message;
use crate::state::{AppState, UiMode};
use crate::view::Screen;

use super::UpdateResult;

pub fn handle_start(state: &mut AppState) -> UpdateResult {
    if state.current().is_list() {
        state.ui_mode = UiMode::FilterInput;
    }
    UpdateResult::none()
}

/// Replace the filter text of the current list
pub fn handle_input(state: &mut AppState, text: &str) -> UpdateResult {
    let before = state.current().wanted_images();
    set_filter(state.current_mut(), text);

    if state.current().wanted_images() != before {
        UpdateResult::message(Message::RefreshImages)
    } else {
        UpdateResult::none()
    }
}

pub fn handle_commit(state: &mut AppState) -> UpdateResult {
    state.ui_mode = UiMode::Browse;
    UpdateResult::none()
}

pub fn handle_cancel(state: &mut AppState) -> UpdateResult {
    state.ui_mode = UiMode::Browse;
    handle_input(state, "")
}

fn set_filter(screen: &mut Screen, text: &str) {
    match screen {
        Screen::CategoryList(view) => {
            let items = view.categories.loaded().map(Vec::as_slice).unwrap_or(&[]);
            view.cursor.set_filter(items, text);
        }
        Screen::CategoryDetail(view) => {
            let items = view.meals.loaded().map(Vec::as_slice).unwrap_or(&[]);
            view.cursor.set_filter(items, text);
        }
        Screen::MealDetail(_) => {}
    }
}
