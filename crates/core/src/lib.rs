pub mod category;
pub mod fallback;
pub mod language;
pub mod messages;
pub mod models;

pub use category::Category;
pub use fallback::classify_fallback;
pub use language::detect_language;
pub use models::{Language, MessageInput, TurnOutcome, TurnReply, UserSession};
