//! Message processing
//!
//! Runs a message through the TEA update loop, executing each returned
//! action and feeding its outcome back in until the chain settles.

use std::collections::VecDeque;

use tokio::sync::mpsc;

use crate::actions::{handle_action, Services};
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message(
    state: &mut AppState,
    message: Message,
    services: &mut Services,
    msg_tx: &mpsc::Sender<Message>,
) {
    let mut pending = VecDeque::from([message]);
    while let Some(msg) = pending.pop_front() {
        let result = handler::update(state, msg);

        if let Some(action) = result.action {
            if let Some(outcome) = handle_action(action, services, msg_tx) {
                pending.push_back(outcome);
            }
        }

        if let Some(follow_up) = result.message {
            pending.push_back(follow_up);
        }
    }
}
