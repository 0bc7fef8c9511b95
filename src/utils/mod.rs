/// Structured logging helpers with consistent message prefixes
pub mod logging;
/// Parsers for the structured free-text inputs the bot prompts for
pub mod parsing;
