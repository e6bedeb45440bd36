use serde::{Deserialize, Serialize};

use crate::category::Category;

/// The two languages the assistant speaks. Detection always resolves to one
/// of them; there is no unknown value carried across turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    English,
    Spanish,
}

impl Language {
    pub fn from_optional_str(value: Option<&str>) -> Option<Self> {
        match value.map(|v| v.trim().to_lowercase()) {
            Some(v) if v == "en" || v == "en-us" || v == "english" => Some(Self::English),
            Some(v) if v == "es" || v == "es-mx" || v == "spanish" || v == "español" => {
                Some(Self::Spanish)
            }
            _ => None,
        }
    }

    pub fn as_code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Spanish => "es",
        }
    }
}

/// Per-user conversation state. Created lazily on a user's first message and
/// kept in memory for the process lifetime.
///
/// `pending_suggestions` is non-empty exactly when `awaiting_confirmation` is
/// set; use `begin_selection` / `clear_selection` to keep that pairing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserSession {
    pub language: Option<Language>,
    pub awaiting_confirmation: bool,
    pub pending_suggestions: Vec<Category>,
}

impl UserSession {
    pub fn begin_selection(&mut self, suggestions: Vec<Category>) {
        debug_assert!(!suggestions.is_empty());
        self.pending_suggestions = suggestions;
        self.awaiting_confirmation = true;
    }

    pub fn clear_selection(&mut self) {
        self.pending_suggestions.clear();
        self.awaiting_confirmation = false;
    }
}

/// One inbound message: an opaque per-user key supplied by the transport plus
/// the raw text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageInput {
    pub user_id: String,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnOutcome {
    Answered,
    SuggestionsOffered,
    InvalidSelection,
    NoMatch,
}

/// What the conversation layer hands back to the transport for one turn.
/// `messages` is ordered; a resolved turn carries the answer and the
/// follow-up prompt as two separate outbound messages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnReply {
    pub messages: Vec<String>,
    pub language: Language,
    pub outcome: TurnOutcome,
    pub category: Option<Category>,
    pub awaiting_selection: bool,
}
