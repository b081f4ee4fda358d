//! mealdeck-app - Application state and orchestration for MealDeck
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: a single [`AppState`], a [`Message`] enum, a pure
//! [`handler::update`] returning [`UpdateAction`]s, and the [`Engine`] that
//! runs actions as background tasks and feeds their results back through one
//! channel.

pub mod actions;
pub mod config;
pub mod engine;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;
pub mod view;

// Re-export primary types
pub use engine::Engine;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppPhase, AppState, UiMode};
pub use view::{Remote, Screen, ViewId};
