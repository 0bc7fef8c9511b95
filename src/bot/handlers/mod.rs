pub mod conversation;
pub mod message;

use std::sync::Arc;

use teloxide::{
    dispatching::{dialogue, dialogue::InMemStorage, UpdateHandler},
    prelude::*,
};

use crate::bot::state::ConversationState;
use crate::store::WorkHoursStore;

/// Error type threaded through the dptree schema.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;
pub type HandlerResult = Result<(), HandlerError>;

/// Per-chat dialogue handle over in-memory state storage.
pub type StateDialogue = Dialogue<ConversationState, InMemStorage<ConversationState>>;

pub struct BotHandler {
    pub store: Arc<dyn WorkHoursStore>,
}

impl BotHandler {
    pub fn new(store: Arc<dyn WorkHoursStore>) -> Self {
        Self { store }
    }

    /// Builds the update schema: commands first, then free-text messages
    /// dispatched through the conversation state machine.
    pub fn schema(&self) -> UpdateHandler<HandlerError> {
        use teloxide::dispatching::UpdateFilterExt;

        let store = Arc::clone(&self.store);

        dialogue::enter::<Update, InMemStorage<ConversationState>, ConversationState, _>()
            .branch(
                Update::filter_message()
                    .filter_command::<crate::bot::commands::Command>()
                    .endpoint(message::command_handler),
            )
            .branch(Update::filter_message().endpoint(
                move |bot: Bot, dialogue: StateDialogue, msg: Message| {
                    let store = Arc::clone(&store);
                    async move { conversation::conversation_handler(bot, dialogue, msg, store).await }
                },
            ))
    }
}
