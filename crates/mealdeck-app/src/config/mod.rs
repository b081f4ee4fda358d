//! Configuration file parsing for MealDeck
//!
//! Settings live in `<config_dir>/mealdeck/config.toml`, or wherever
//! `--config` points.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config_file, load_settings};
pub use types::*;
