use teloxide::types::{KeyboardButton, KeyboardMarkup};

/// Which input the bot is currently awaiting from a chat.
///
/// `Idle` is the stable state: the bot waits for a menu selection and every
/// handled input, successful or not, eventually returns here. The dialogue
/// state lives in teloxide's in-memory storage and is not persisted across
/// restarts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConversationState {
    #[default]
    Idle,
    AwaitingAddEntry,
    AwaitingDayQuery,
    AwaitingMonthQuery,
    AwaitingRangeQuery,
}

impl ConversationState {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            ConversationState::Idle => "idle",
            ConversationState::AwaitingAddEntry => "awaiting_add_entry",
            ConversationState::AwaitingDayQuery => "awaiting_day_query",
            ConversationState::AwaitingMonthQuery => "awaiting_month_query",
            ConversationState::AwaitingRangeQuery => "awaiting_range_query",
        }
    }
}

/// The four menu actions, decoded from the message text exactly once at the
/// `Idle` boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    AddEntry,
    DayQuery,
    MonthQuery,
    RangeQuery,
}

impl MenuAction {
    pub const ALL: [MenuAction; 4] = [
        MenuAction::AddEntry,
        MenuAction::DayQuery,
        MenuAction::MonthQuery,
        MenuAction::RangeQuery,
    ];

    /// The keyboard label for this action. Matching is exact.
    pub fn label(self) -> &'static str {
        match self {
            MenuAction::AddEntry => "Add work hours",
            MenuAction::DayQuery => "Hours for a day",
            MenuAction::MonthQuery => "Hours for a month",
            MenuAction::RangeQuery => "Hours for a period",
        }
    }

    /// Reverse lookup from an exact label match.
    pub fn from_label(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.label() == text)
    }

    /// Prompt describing the input format the follow-up state expects.
    pub fn prompt(self) -> &'static str {
        match self {
            MenuAction::AddEntry => {
                "Enter the day, month, year and number of hours worked, separated by spaces."
            }
            MenuAction::DayQuery => "Enter the day, month and year, separated by spaces.",
            MenuAction::MonthQuery => "Enter the month and year, separated by spaces.",
            MenuAction::RangeQuery => {
                "Enter the start and end date as day month year, separating the dates with a comma."
            }
        }
    }

    /// The state awaiting this action's input.
    pub fn awaiting_state(self) -> ConversationState {
        match self {
            MenuAction::AddEntry => ConversationState::AwaitingAddEntry,
            MenuAction::DayQuery => ConversationState::AwaitingDayQuery,
            MenuAction::MonthQuery => ConversationState::AwaitingMonthQuery,
            MenuAction::RangeQuery => ConversationState::AwaitingRangeQuery,
        }
    }
}

/// One-time reply keyboard with one row per menu action.
pub fn menu_keyboard() -> KeyboardMarkup {
    let rows = MenuAction::ALL
        .into_iter()
        .map(|action| vec![KeyboardButton::new(action.label())]);
    KeyboardMarkup::new(rows).one_time_keyboard(true)
}
