//! Headless mode - NDJSON event output without a terminal UI
//!
//! Fetches the category list (and optionally the meals of one category)
//! through the same engine the TUI uses, and writes one JSON object per
//! line to stdout. Handy for scripting and for checking an API mirror.
//!
//! # Example Output
//!
//! ```json
//! {"event":"categories_loaded","count":14,"timestamp":1704700001000}
//! {"event":"category","id":"1","name":"Beef","thumbnail_url":"https://...","timestamp":1704700001000}
//! {"event":"meals_loaded","category":"Beef","count":42,"timestamp":1704700002000}
//! {"event":"meal","id":"52874","name":"Beef and Mustard Pie","thumbnail_url":"https://...","timestamp":1704700002000}
//! ```

pub mod runner;

use std::io::Write;

use chrono::Utc;
use serde::Serialize;
use tracing::error;

use mealdeck_core::{Category, FetchErrorKind, Meal};

pub use runner::run_headless;

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// The category list arrived
    CategoriesLoaded { count: usize, timestamp: i64 },

    /// One row of the category list
    Category {
        id: String,
        name: String,
        thumbnail_url: String,
        timestamp: i64,
    },

    /// The meal list of a category arrived
    MealsLoaded {
        category: String,
        count: usize,
        timestamp: i64,
    },

    /// One row of a meal list
    Meal {
        id: String,
        name: String,
        thumbnail_url: String,
        timestamp: i64,
    },

    /// A fetch failed or the request could not be served
    Error {
        message: String,
        kind: Option<FetchErrorKind>,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Write this event to `out` as one NDJSON line and flush
    pub fn write_to(&self, out: &mut impl Write) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        if let Err(e) = writeln!(out, "{}", json) {
            error!("Failed to write headless event: {}", e);
            return;
        }

        if let Err(e) = out.flush() {
            error!("Failed to flush headless output: {}", e);
        }
    }

    /// Current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    pub fn categories_loaded(count: usize) -> Self {
        Self::CategoriesLoaded {
            count,
            timestamp: Self::now(),
        }
    }

    pub fn category(category: &Category) -> Self {
        Self::Category {
            id: category.id.clone(),
            name: category.name.clone(),
            thumbnail_url: category.thumbnail_url.clone(),
            timestamp: Self::now(),
        }
    }

    pub fn meals_loaded(category: &str, count: usize) -> Self {
        Self::MealsLoaded {
            category: category.to_string(),
            count,
            timestamp: Self::now(),
        }
    }

    pub fn meal(meal: &Meal) -> Self {
        Self::Meal {
            id: meal.id.clone(),
            name: meal.name.clone(),
            thumbnail_url: meal.thumbnail_url.clone(),
            timestamp: Self::now(),
        }
    }

    pub fn error(message: impl Into<String>, kind: Option<FetchErrorKind>) -> Self {
        Self::Error {
            message: message.into(),
            kind,
            timestamp: Self::now(),
        }
    }
}
