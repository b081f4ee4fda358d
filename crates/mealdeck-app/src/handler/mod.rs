//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for each input mode
//! - `navigation`: Highlight movement, drill-down and back
//! - `filter`: Row filter input
//! - `loaded`: Fetch and image results

pub(crate) mod filter;
pub(crate) mod keys;
pub(crate) mod loaded;
pub(crate) mod navigation;
pub(crate) mod update;


use crate::message::Message;
use crate::view::ViewId;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Fetch the category list for the root view
    FetchCategories { view_id: ViewId },

    /// Fetch the meals filed under `category` for a detail view
    FetchMeals { view_id: ViewId, category: String },

    /// Download and decode thumbnails for a view
    LoadImages { view_id: ViewId, urls: Vec<String> },

    /// Hand a URL to the system browser (or the configured command)
    OpenUrl { url: String, browser: String },

    /// Abort every background task owned by a popped view
    CancelView { view_id: ViewId },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }

    pub fn action_with_message(action: UpdateAction, msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: Some(action),
        }
    }
}
