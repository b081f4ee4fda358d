//! mealdeck-tui - Terminal UI for MealDeck
//!
//! This crate provides the ratatui-based terminal interface. It creates an
//! Engine from mealdeck-app and adds terminal rendering, event polling and
//! the widgets for each view.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::run;
