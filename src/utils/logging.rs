use tracing::{debug, error, info, warn};

/// Logs command start with consistent format
pub fn log_command_start(command: &str, user: &str, user_id: i64, chat_id: i64) {
    info!(
        "CMD_START: {} by {}({}) in chat {}",
        command, user, user_id, chat_id
    );
}

/// Logs command completion with consistent format
pub fn log_command_success(command: &str, user: &str, user_id: i64, chat_id: i64) {
    info!(
        "CMD_SUCCESS: {} by {}({}) in chat {}",
        command, user, user_id, chat_id
    );
}

/// Logs a conversation step: the state an input arrived in and the state the
/// dialogue moved to.
pub fn log_transition(chat_id: i64, from: &str, to: &str) {
    debug!("TRANSITION: chat {} {} -> {}", chat_id, from, to);
}

/// Logs rejected user input with consistent format
pub fn log_validation_error(state: &str, input: &str, error: &str) {
    warn!(
        "VALIDATION_ERROR: {} input '{}' rejected: {}",
        state, input, error
    );
}

/// Logs store operations with consistent format
pub fn log_store_operation(operation: &str, details: Option<&str>) {
    match details {
        Some(d) => debug!("STORE_OP: {} - {}", operation, d),
        None => debug!("STORE_OP: {}", operation),
    }
}

/// Logs store errors with consistent format
pub fn log_store_error(operation: &str, error: &str) {
    error!("STORE_ERROR: {} failed: {}", operation, error);
}
