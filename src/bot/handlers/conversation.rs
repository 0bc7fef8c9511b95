use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::KeyboardRemove;

use super::{HandlerResult, StateDialogue};
use crate::bot::state::{ConversationState, MenuAction};
use crate::store::WorkHoursStore;
use crate::utils::logging::{log_store_error, log_transition, log_validation_error};
use crate::utils::parsing;

/// Reply sent for unrecognized text at the menu and for /cancel.
pub const CANCELLED_REPLY: &str = "Action cancelled.";

/// Reply sent after a successful insert.
pub const ADDED_REPLY: &str = "Work hours added successfully.";

/// Advances the conversation one step: resolves the current state, applies
/// the text to it, and produces the next state plus the reply to send.
///
/// Every `Awaiting*` state returns to `Idle` regardless of outcome; a failed
/// parse or store call surfaces its message as `Error: <details>` and never
/// re-prompts. `Idle` either enters the selected action's awaiting state or
/// stays put with a cancellation reply.
pub async fn advance(
    state: ConversationState,
    text: &str,
    store: &dyn WorkHoursStore,
) -> (ConversationState, String) {
    match state {
        ConversationState::Idle => match MenuAction::from_label(text) {
            Some(action) => (action.awaiting_state(), action.prompt().to_string()),
            None => (ConversationState::Idle, CANCELLED_REPLY.to_string()),
        },
        ConversationState::AwaitingAddEntry => {
            let reply = render(&state, text, add_entry(text, store).await);
            (ConversationState::Idle, reply)
        }
        ConversationState::AwaitingDayQuery => {
            let reply = render(&state, text, day_query(text, store).await);
            (ConversationState::Idle, reply)
        }
        ConversationState::AwaitingMonthQuery => {
            let reply = render(&state, text, month_query(text, store).await);
            (ConversationState::Idle, reply)
        }
        ConversationState::AwaitingRangeQuery => {
            let reply = render(&state, text, range_query(text, store).await);
            (ConversationState::Idle, reply)
        }
    }
}

/// teloxide endpoint for non-command text messages.
pub async fn conversation_handler(
    bot: Bot,
    dialogue: StateDialogue,
    msg: Message,
    store: Arc<dyn WorkHoursStore>,
) -> HandlerResult {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    let state = dialogue.get_or_default().await?;
    let (next, reply) = advance(state.clone(), text, store.as_ref()).await;
    log_transition(msg.chat.id.0, state.name(), next.name());

    if cancels_menu(&state, &next) {
        bot.send_message(msg.chat.id, reply)
            .reply_markup(KeyboardRemove::new())
            .await?;
    } else {
        bot.send_message(msg.chat.id, reply).await?;
    }
    dialogue.update(next).await?;
    Ok(())
}

/// Unrecognized text at the menu dismisses the reply keyboard along with the
/// cancellation reply, just like /cancel does.
pub fn cancels_menu(state: &ConversationState, next: &ConversationState) -> bool {
    *state == ConversationState::Idle && *next == ConversationState::Idle
}

fn render(state: &ConversationState, input: &str, result: anyhow::Result<String>) -> String {
    match result {
        Ok(reply) => reply,
        Err(e) => {
            log_validation_error(state.name(), input, &e.to_string());
            format!("Error: {e}")
        }
    }
}

async fn add_entry(text: &str, store: &dyn WorkHoursStore) -> anyhow::Result<String> {
    let (date, hours) = parsing::parse_add_entry(text)?;
    store.insert(date, hours).await.inspect_err(|e| {
        log_store_error("insert", &e.to_string());
    })?;
    Ok(ADDED_REPLY.to_string())
}

async fn day_query(text: &str, store: &dyn WorkHoursStore) -> anyhow::Result<String> {
    let date = parsing::parse_day_query(text)?;
    let total = store.sum_by_date(date).await?;
    Ok(format!("Hours worked on that day: {total}"))
}

async fn month_query(text: &str, store: &dyn WorkHoursStore) -> anyhow::Result<String> {
    let (year, month) = parsing::parse_month_query(text)?;
    let total = store.sum_by_month(year, month).await?;
    Ok(format!("Hours worked in that month: {total}"))
}

async fn range_query(text: &str, store: &dyn WorkHoursStore) -> anyhow::Result<String> {
    let (start, end) = parsing::parse_range_query(text)?;
    let total = store.sum_by_range(start, end).await?;
    Ok(format!("Hours worked in that period: {total}"))
}
