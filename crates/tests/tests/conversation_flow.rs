//! End-to-end conversation scenarios against the real agent, catalog and
//! session store, with the generation capability replaced by stubs.

use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::Mutex;
use rplus_agents::SupportAgent;
use rplus_ai::{GeneratorError, TextGenerator, TextRequest};
use rplus_catalog::CategoryCatalog;
use rplus_core::{Category, Language, MessageInput, TurnOutcome};
use rplus_observability::AppMetrics;
use rplus_storage::MemoryStore;

/// Replays a fixed sequence of generator replies, then errors.
struct ScriptedGenerator {
    replies: Mutex<VecDeque<String>>,
}

impl ScriptedGenerator {
    fn new<I>(replies: I) -> Arc<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Arc::new(Self {
            replies: Mutex::new(replies.into_iter().map(Into::into).collect()),
        })
    }
}

impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, _request: TextRequest) -> Result<String, GeneratorError> {
        self.replies
            .lock()
            .pop_front()
            .ok_or(GeneratorError::EmptyOutput)
    }
}

/// Simulates an unreachable generation capability.
struct FailingGenerator;

impl TextGenerator for FailingGenerator {
    async fn generate(&self, _request: TextRequest) -> Result<String, GeneratorError> {
        Err(GeneratorError::Disabled)
    }
}

fn catalog() -> Arc<CategoryCatalog> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/responses.json");
    let catalog = CategoryCatalog::from_path(path);
    assert!(!catalog.is_empty(), "test catalog must load");
    Arc::new(catalog)
}

fn agent_with<G: TextGenerator>(generator: Arc<G>) -> SupportAgent<G, MemoryStore> {
    SupportAgent::new(
        catalog(),
        generator,
        Arc::new(MemoryStore::new()),
        AppMetrics::shared(),
    )
}

fn input(user: &str, text: &str) -> MessageInput {
    MessageInput {
        user_id: user.to_string(),
        text: text.to_string(),
    }
}

#[tokio::test]
async fn english_question_gets_canonical_answer() {
    let agent = agent_with(ScriptedGenerator::new(["WHAT_IS_REALTYPLUS"]));

    let reply = agent.handle_message(input("u1", "what is RealtyPlus")).await;

    assert_eq!(reply.language, Language::English);
    assert_eq!(reply.outcome, TurnOutcome::Answered);
    assert_eq!(reply.category, Some(Category::WhatIsRealtyplus));
    assert_eq!(reply.messages.len(), 2);
    assert_eq!(
        reply.messages[0],
        catalog().response(Category::WhatIsRealtyplus).unwrap()
    );
    assert!(reply.messages[1].contains("another question"));
    assert!(!reply.awaiting_selection);
}

#[tokio::test]
async fn spanish_question_gets_localized_answer() {
    let agent = agent_with(ScriptedGenerator::new([
        "WHERE_CAN_I_OPEN",
        "Puedes abrir una oficina RealtyPlus en cualquier mercado donde operamos.",
    ]));

    let reply = agent.handle_message(input("u1", "¿dónde puedo abrir?")).await;

    assert_eq!(reply.language, Language::Spanish);
    assert_eq!(reply.outcome, TurnOutcome::Answered);
    assert_eq!(reply.category, Some(Category::WhereCanIOpen));
    assert_eq!(
        reply.messages[0],
        "Puedes abrir una oficina RealtyPlus en cualquier mercado donde operamos."
    );
    assert!(reply.messages[1].contains("otra pregunta"));
}

#[tokio::test]
async fn session_language_is_pinned_on_first_turn() {
    let agent = agent_with(ScriptedGenerator::new([
        "WHAT_IS_REALTYPLUS",
        "WHERE_CAN_I_OPEN",
    ]));

    let first = agent.handle_message(input("u1", "what is RealtyPlus")).await;
    assert_eq!(first.language, Language::English);

    // Later Spanish wording does not flip an already-detected session.
    let second = agent
        .handle_message(input("u1", "¿dónde puedo abrir?"))
        .await;
    assert_eq!(second.language, Language::English);
    assert_eq!(
        second.messages[0],
        catalog().response(Category::WhereCanIOpen).unwrap()
    );
}

#[tokio::test]
async fn unmatched_question_without_overlap_takes_default_path() {
    let agent = agent_with(ScriptedGenerator::new(["OTHER"]));

    let reply = agent.handle_message(input("u1", "lorem ipsum dolor")).await;

    assert_eq!(reply.language, Language::English);
    assert_eq!(reply.outcome, TurnOutcome::NoMatch);
    assert_eq!(reply.messages.len(), 1);
    assert!(reply.messages[0].contains("don't have a specific answer"));
    assert!(!reply.awaiting_selection);
}

#[tokio::test]
async fn ambiguous_question_offers_numbered_suggestions() {
    let agent = agent_with(ScriptedGenerator::new(["OTHER"]));

    let reply = agent
        .handle_message(input("u1", "marketing exclusivity brochure"))
        .await;

    assert_eq!(reply.outcome, TurnOutcome::SuggestionsOffered);
    assert!(reply.awaiting_selection);
    // One keyword hit each; ties keep catalog order.
    assert!(reply.messages[0].contains("1. Area exclusivity"));
    assert!(reply.messages[0].contains("2. Marketing assistance"));
    assert!(reply.messages[0].contains("3. Receive documents/brochure"));
}

#[tokio::test]
async fn in_range_selection_resolves_that_suggestion() {
    let agent = agent_with(ScriptedGenerator::new(["OTHER"]));

    let offered = agent
        .handle_message(input("u1", "marketing exclusivity brochure"))
        .await;
    assert!(offered.awaiting_selection);

    let reply = agent.handle_message(input("u1", "2")).await;

    assert_eq!(reply.outcome, TurnOutcome::Answered);
    assert_eq!(reply.category, Some(Category::MarketingAssistance));
    assert_eq!(
        reply.messages[0],
        catalog().response(Category::MarketingAssistance).unwrap()
    );
    assert!(!reply.awaiting_selection);
}

#[tokio::test]
async fn out_of_range_selection_keeps_the_list() {
    let agent = agent_with(ScriptedGenerator::new(["OTHER"]));

    agent
        .handle_message(input("u1", "marketing exclusivity brochure"))
        .await;

    let invalid = agent.handle_message(input("u1", "9")).await;
    assert_eq!(invalid.outcome, TurnOutcome::InvalidSelection);
    assert!(invalid.awaiting_selection);
    assert!(invalid.messages[0].contains("valid number"));

    // The pending list survived; picking from it still works.
    let resolved = agent.handle_message(input("u1", "2")).await;
    assert_eq!(resolved.outcome, TurnOutcome::Answered);
    assert_eq!(resolved.category, Some(Category::MarketingAssistance));
}

#[tokio::test]
async fn non_numeric_reply_is_treated_as_a_new_question() {
    let agent = agent_with(ScriptedGenerator::new(["OTHER", "WHAT_IS_REALTYPLUS"]));

    let offered = agent
        .handle_message(input("u1", "marketing exclusivity brochure"))
        .await;
    assert!(offered.awaiting_selection);

    let reply = agent
        .handle_message(input("u1", "actually, what is RealtyPlus?"))
        .await;

    assert_eq!(reply.outcome, TurnOutcome::Answered);
    assert_eq!(reply.category, Some(Category::WhatIsRealtyplus));
    assert!(!reply.awaiting_selection);
}

#[tokio::test]
async fn generator_failure_falls_back_to_rules() {
    let agent = agent_with(Arc::new(FailingGenerator));

    let reply = agent.handle_message(input("u1", "what is RealtyPlus?")).await;

    assert_eq!(reply.outcome, TurnOutcome::Answered);
    assert_eq!(reply.category, Some(Category::WhatIsRealtyplus));
    assert_eq!(
        reply.messages[0],
        catalog().response(Category::WhatIsRealtyplus).unwrap()
    );
}

#[tokio::test]
async fn translation_failure_returns_untranslated_answer() {
    let agent = agent_with(Arc::new(FailingGenerator));

    let reply = agent.handle_message(input("u1", "¿qué es RealtyPlus?")).await;

    assert_eq!(reply.language, Language::Spanish);
    assert_eq!(reply.outcome, TurnOutcome::Answered);
    // The canned English text, untranslated, beats a failed turn.
    assert_eq!(
        reply.messages[0],
        catalog().response(Category::WhatIsRealtyplus).unwrap()
    );
    // The framing around it still follows the session language.
    assert!(reply.messages[1].contains("otra pregunta"));
}

#[tokio::test]
async fn sessions_do_not_leak_between_users() {
    let agent = agent_with(ScriptedGenerator::new(["OTHER", "OTHER"]));

    let offered = agent
        .handle_message(input("user-a", "marketing exclusivity brochure"))
        .await;
    assert!(offered.awaiting_selection);

    // A different user sending "2" is asking a fresh question, not picking
    // from user-a's list.
    let other = agent.handle_message(input("user-b", "2")).await;
    assert_ne!(other.outcome, TurnOutcome::Answered);
    assert_eq!(other.category, None);
}
