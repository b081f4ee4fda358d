//! Message types for the application (TEA pattern)

use mealdeck_core::{Category, FetchErrorKind, Meal, Thumbnail};

use crate::input_key::InputKey;
use crate::view::ViewId;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick for periodic updates
    Tick,

    /// Kick off the root view's fetch
    Start,

    /// Request to quit
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    SelectNext,
    SelectPrevious,
    SelectFirst,
    SelectLast,
    PageUp,
    PageDown,

    /// Drill into the highlighted row
    Activate,

    /// Pop the top view (quits on the root)
    Back,

    /// Open the current meal's video link
    OpenVideo,

    // ─────────────────────────────────────────────────────────
    // Row filter
    // ─────────────────────────────────────────────────────────
    /// Enter filter input mode on the current list
    StartFilter,

    /// Replace the filter text
    FilterInput { text: String },

    /// Keep the filter and leave input mode
    CommitFilter,

    /// Clear the filter and leave input mode
    CancelFilter,

    // ─────────────────────────────────────────────────────────
    // Remote data
    // ─────────────────────────────────────────────────────────
    /// Request the images the current view needs right now
    RefreshImages,

    CategoriesLoaded {
        view_id: ViewId,
        categories: Vec<Category>,
    },

    MealsLoaded {
        view_id: ViewId,
        meals: Vec<Meal>,
    },

    /// A data fetch failed. Logged only; the view keeps its state.
    FetchFailed {
        view_id: ViewId,
        kind: Option<FetchErrorKind>,
        error: String,
    },

    ImageLoaded {
        view_id: ViewId,
        url: String,
        thumbnail: Thumbnail,
    },
}
