//! # Work Hours Bot
//!
//! A Telegram bot for recording work-hour entries and answering aggregate
//! queries over them.
//!
//! ## Features
//! - Record hours worked on a calendar date via a guided conversation
//! - Query total hours for a day, a calendar month, or an inclusive date range
//! - Two interchangeable storage backends: persistent SQLite or in-memory
//! - Health check endpoints for deployment monitoring

/// Conversation state machine, command handlers, and menu actions
pub mod bot;
/// Configuration management and environment variables
pub mod config;
/// Database connection and row models for the SQLite backend
pub mod database;
/// HTTP services run alongside the bot
pub mod services;
/// The work-hours store contract and its backends
pub mod store;
/// Utility functions for parsing and logging
pub mod utils;
