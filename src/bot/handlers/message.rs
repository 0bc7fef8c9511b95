use teloxide::prelude::*;
use teloxide::types::KeyboardRemove;
use teloxide::utils::command::BotCommands;

use super::{HandlerResult, StateDialogue};
use crate::bot::commands::Command;
use crate::bot::state::{menu_keyboard, ConversationState};
use crate::utils::logging::{log_command_start, log_command_success};

use super::conversation::CANCELLED_REPLY;

const GREETING: &str = "Hi! I am a bot for tracking work hours.\nChoose an action:";

pub async fn command_handler(
    bot: Bot,
    dialogue: StateDialogue,
    msg: Message,
    cmd: Command,
) -> HandlerResult {
    let user = msg
        .from()
        .and_then(|u| u.username.clone())
        .unwrap_or_else(|| "unknown".to_string());
    let user_id = msg.from().map(|u| u.id.0 as i64).unwrap_or(0);
    let chat_id = msg.chat.id;

    match cmd {
        Command::Help => {
            log_command_start("help", &user, user_id, chat_id.0);
            bot.send_message(chat_id, Command::descriptions().to_string())
                .await?;
        }
        Command::Start => {
            log_command_start("start", &user, user_id, chat_id.0);
            dialogue.update(ConversationState::Idle).await?;
            bot.send_message(chat_id, GREETING)
                .reply_markup(menu_keyboard())
                .await?;
            log_command_success("start", &user, user_id, chat_id.0);
        }
        Command::Cancel => {
            log_command_start("cancel", &user, user_id, chat_id.0);
            dialogue.update(ConversationState::Idle).await?;
            bot.send_message(chat_id, CANCELLED_REPLY)
                .reply_markup(KeyboardRemove::new())
                .await?;
            log_command_success("cancel", &user, user_id, chat_id.0);
        }
    }
    Ok(())
}
