//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Browse => handle_key_browse(state, key),
        UiMode::FilterInput => handle_key_filter_input(state, key),
    }
}

/// Handle key events while navigating
fn handle_key_browse(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPrevious),
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNext),
        InputKey::Home | InputKey::Char('g') => Some(Message::SelectFirst),
        InputKey::End | InputKey::Char('G') => Some(Message::SelectLast),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),

        InputKey::Enter | InputKey::Right | InputKey::Char('l') => Some(Message::Activate),
        InputKey::Esc | InputKey::Left | InputKey::Char('h') | InputKey::Backspace => {
            Some(Message::Back)
        }

        // Only lists can be filtered
        InputKey::Char('/') if state.current().is_list() => Some(Message::StartFilter),

        InputKey::Char('o') => Some(Message::OpenVideo),

        _ => None,
    }
}

/// Handle key events while typing a row filter
fn handle_key_filter_input(state: &AppState, key: InputKey) -> Option<Message> {
    let current = state
        .current()
        .cursor()
        .map(|cursor| cursor.filter.clone())
        .unwrap_or_default();

    match key {
        InputKey::CharCtrl('c') => Some(Message::Quit),

        // Drop the filter and return to browsing
        InputKey::Esc => Some(Message::CancelFilter),

        // Keep the filter, stop typing
        InputKey::Enter => Some(Message::CommitFilter),

        InputKey::Backspace => {
            let mut text = current;
            text.pop();
            Some(Message::FilterInput { text })
        }

        // Clear all input
        InputKey::CharCtrl('u') => Some(Message::FilterInput {
            text: String::new(),
        }),

        InputKey::Char(c) => {
            let mut text = current;
            text.push(c);
            Some(Message::FilterInput { text })
        }

        // The highlight can still move while typing
        InputKey::Up => Some(Message::SelectPrevious),
        InputKey::Down => Some(Message::SelectNext),

        _ => None,
    }
}
