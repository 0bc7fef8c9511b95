/// Bot command definitions
pub mod commands;
/// dptree schema and message endpoints
pub mod handlers;
/// Conversation states and menu actions
pub mod state;
