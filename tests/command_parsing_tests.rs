use teloxide::utils::command::BotCommands;
use work_hours_bot::bot::commands::Command;

#[test]
fn test_help_command_parsing() {
    let result = Command::parse("/help", "testbot");
    assert_eq!(result.unwrap(), Command::Help);
}

#[test]
fn test_start_command_parsing() {
    let result = Command::parse("/start", "testbot");
    assert_eq!(result.unwrap(), Command::Start);
}

#[test]
fn test_cancel_command_parsing() {
    let result = Command::parse("/cancel", "testbot");
    assert_eq!(result.unwrap(), Command::Cancel);
}

#[test]
fn test_command_with_bot_mention() {
    let result = Command::parse("/start@testbot", "testbot");
    assert_eq!(result.unwrap(), Command::Start);
}

#[test]
fn test_unknown_command_fails_to_parse() {
    assert!(Command::parse("/unknown", "testbot").is_err());
}

#[test]
fn test_plain_text_is_not_a_command() {
    assert!(Command::parse("Add work hours", "testbot").is_err());
    assert!(Command::parse("1 1 2024 4", "testbot").is_err());
}

#[test]
fn test_descriptions_mention_all_commands() {
    let descriptions = Command::descriptions().to_string();
    assert!(descriptions.contains("/help"));
    assert!(descriptions.contains("/start"));
    assert!(descriptions.contains("/cancel"));
}
