//! # mealdeck-core - Core Domain Types
//!
//! Foundation crate for MealDeck. Provides the recipe domain types, error
//! handling, decoded thumbnails and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing, url).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Category`] - A named grouping of meals
//! - [`Meal`] - A recipe; summary or full form depending on the endpoint
//! - [`CategoryResponse`], [`MealResponse`] - Top-level JSON envelopes
//! - [`MealListPayload`] - A meal list as either a bare array or an envelope
//!
//! ### Thumbnails (`thumbnail`)
//! - [`Thumbnail`] - Decoded, downscaled RGB pixels ready for cell rendering
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum, one variant per failure source
//! - [`FetchErrorKind`] - Invalid URL / transport / decode / empty payload
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use mealdeck_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod thumbnail;
pub mod types;

/// Prelude for common imports used throughout all MealDeck crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, FetchErrorKind, Result};
pub use thumbnail::{Thumbnail, MAX_THUMBNAIL_EDGE};
pub use types::{Category, CategoryResponse, Meal, MealListPayload, MealResponse};
