/// HTTP health endpoints served alongside the bot
pub mod health;
