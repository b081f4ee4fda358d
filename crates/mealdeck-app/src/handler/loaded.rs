//! Fetch and image results
//!
//! Every result carries the [`ViewId`] of the view that asked for it. A view
//! that is no longer on the stack is gone for good, so its results are
//! dropped here.

use mealdeck_core::prelude::*;
use mealdeck_core::{Category, FetchErrorKind, Meal, Thumbnail};

use crate::message::Message;
use crate::state::AppState;
use crate::view::{Remote, Screen, ViewId};

use super::{UpdateAction, UpdateResult};

/// Request the images the current view shows that it hasn't asked for yet
pub fn handle_refresh_images(state: &mut AppState) -> UpdateResult {
    if !state.settings.ui.show_images {
        return UpdateResult::none();
    }

    let screen = state.current_mut();
    let view_id = screen.id();
    let wanted = screen.wanted_images();
    let images = screen.images_mut();
    let urls: Vec<String> = wanted
        .into_iter()
        .filter(|url| images.request(url))
        .collect();

    if urls.is_empty() {
        UpdateResult::none()
    } else {
        UpdateResult::action(UpdateAction::LoadImages { view_id, urls })
    }
}

pub fn handle_categories_loaded(
    state: &mut AppState,
    view_id: ViewId,
    categories: Vec<Category>,
) -> UpdateResult {
    match state.view_mut(view_id) {
        Some(Screen::CategoryList(view)) => {
            info!("Loaded {} categories", categories.len());
            view.categories = Remote::Loaded(categories);
            let visible = view.cursor.visible_indices(view.items()).len();
            view.cursor.clamp(visible);
        }
        Some(_) => {
            warn!("Categories delivered to {} which is not a category list", view_id);
            return UpdateResult::none();
        }
        None => {
            debug!("Dropping categories for closed {}", view_id);
            return UpdateResult::none();
        }
    }

    refresh_if_current(state, view_id)
}

pub fn handle_meals_loaded(state: &mut AppState, view_id: ViewId, meals: Vec<Meal>) -> UpdateResult {
    match state.view_mut(view_id) {
        Some(Screen::CategoryDetail(view)) => {
            info!("Loaded {} meals for '{}'", meals.len(), view.category.name);
            view.meals = Remote::Loaded(meals);
            let visible = view.cursor.visible_indices(view.items()).len();
            view.cursor.clamp(visible);
        }
        Some(_) => {
            warn!("Meals delivered to {} which is not a category", view_id);
            return UpdateResult::none();
        }
        None => {
            debug!("Dropping meals for closed {}", view_id);
            return UpdateResult::none();
        }
    }

    refresh_if_current(state, view_id)
}

/// Failures are logged and otherwise ignored: the view keeps whatever it had
pub fn handle_fetch_failed(
    view_id: ViewId,
    kind: Option<FetchErrorKind>,
    error: &str,
) -> UpdateResult {
    match kind {
        Some(kind) => warn!("Fetch failed: {} ({}, {})", error, kind, view_id),
        None => warn!("Fetch failed: {} ({})", error, view_id),
    }
    UpdateResult::none()
}

pub fn handle_image_loaded(
    state: &mut AppState,
    view_id: ViewId,
    url: &str,
    thumbnail: Thumbnail,
) -> UpdateResult {
    match state.view_mut(view_id) {
        Some(screen) => {
            if !screen.images_mut().store(url, thumbnail) {
                debug!("Ignoring unrequested image {} for {}", url, view_id);
            }
        }
        None => debug!("Dropping image {} for closed {}", url, view_id),
    }
    UpdateResult::none()
}

fn refresh_if_current(state: &AppState, view_id: ViewId) -> UpdateResult {
    if state.current().id() == view_id {
        UpdateResult::message(Message::RefreshImages)
    } else {
        UpdateResult::none()
    }
}
