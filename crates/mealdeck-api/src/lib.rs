//! # mealdeck-api - TheMealDB Client
//!
//! HTTP access to TheMealDB's JSON endpoints and the image hosts its records
//! link to. Depends on [`mealdeck_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! ### Data Fetching
//! - [`MealDbClient`] - Explicitly constructed, cloneable client (reqwest)
//! - [`MealDbClient::fetch_categories()`] - `GET /categories.php`
//! - [`MealDbClient::fetch_meals()`] - `GET /filter.php?c=<name>`
//! - [`ClientOptions`] - Timeout and user agent
//!
//! ### Image Loading
//! - [`MealDbClient::load_thumbnail()`] - GET + decode into a [`mealdeck_core::Thumbnail`]
//! - [`decode_thumbnail()`] - Decode raw image bytes

pub mod client;
pub mod decode;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

// Public API re-exports
pub use client::{ClientOptions, MealDbClient, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
pub use decode::decode_thumbnail;
