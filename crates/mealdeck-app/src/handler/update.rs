//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;
use crate::view::PAGE_SIZE;

use super::{filter, keys::handle_key, loaded, navigation, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        Message::Start => UpdateResult::action(UpdateAction::FetchCategories {
            view_id: state.root_id(),
        }),

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::SelectNext => navigation::handle_move(state, 1),
        Message::SelectPrevious => navigation::handle_move(state, -1),
        Message::PageDown => navigation::handle_move(state, PAGE_SIZE as isize),
        Message::PageUp => navigation::handle_move(state, -(PAGE_SIZE as isize)),
        Message::SelectFirst => navigation::handle_select_first(state),
        Message::SelectLast => navigation::handle_select_last(state),
        Message::Activate => navigation::handle_activate(state),
        Message::Back => navigation::handle_back(state),
        Message::OpenVideo => navigation::handle_open_video(state),

        // ─────────────────────────────────────────────────────────
        // Row filter
        // ─────────────────────────────────────────────────────────
        Message::StartFilter => filter::handle_start(state),
        Message::FilterInput { text } => filter::handle_input(state, &text),
        Message::CommitFilter => filter::handle_commit(state),
        Message::CancelFilter => filter::handle_cancel(state),

        // ─────────────────────────────────────────────────────────
        // Remote data
        // ─────────────────────────────────────────────────────────
        Message::RefreshImages => loaded::handle_refresh_images(state),

        Message::CategoriesLoaded {
            view_id,
            categories,
        } => loaded::handle_categories_loaded(state, view_id, categories),

        Message::MealsLoaded { view_id, meals } => {
            loaded::handle_meals_loaded(state, view_id, meals)
        }

        Message::FetchFailed {
            view_id,
            kind,
            error,
        } => loaded::handle_fetch_failed(view_id, kind, &error),

        Message::ImageLoaded {
            view_id,
            url,
            thumbnail,
        } => loaded::handle_image_loaded(state, view_id, &url, thumbnail),
    }
}
