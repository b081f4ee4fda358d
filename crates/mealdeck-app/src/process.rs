//! Message processing
//!
//! Runs the TEA update loop for one message, including follow-up messages,
//! and dispatches every resulting action.

use tokio::sync::mpsc;

use mealdeck_api::MealDbClient;

use crate::actions::{handle_action, ViewTaskMap};
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    client: &MealDbClient,
    view_tasks: &ViewTaskMap,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), client, view_tasks);
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
