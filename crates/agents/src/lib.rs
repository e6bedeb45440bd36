use std::sync::Arc;
use std::time::Instant;

use rplus_ai::{
    CategoryClassifier, ClassificationSource, ResponseResolver, TextGenerator,
};
use rplus_catalog::CategoryCatalog;
use rplus_core::{
    detect_language, messages, Category, Language, MessageInput, TurnOutcome, TurnReply,
    UserSession,
};
use rplus_observability::AppMetrics;
use rplus_storage::SessionStore;
use tracing::info;

/// How many topic suggestions a disambiguation prompt offers.
const SUGGESTION_LIMIT: usize = 3;

/// The per-turn orchestrator: detector, classifier, ranker and resolver
/// wired around the Idle / AwaitingSelection session state machine.
///
/// Every capability failure below this layer is already converted into a
/// degraded reply, so a turn always produces messages — `handle_message`
/// has no error path.
#[derive(Clone)]
pub struct SupportAgent<G, S> {
    classifier: CategoryClassifier<G>,
    resolver: ResponseResolver<G>,
    catalog: Arc<CategoryCatalog>,
    store: Arc<S>,
    metrics: Arc<AppMetrics>,
}

impl<G, S> SupportAgent<G, S>
where
    G: TextGenerator,
    S: SessionStore,
{
    pub fn new(
        catalog: Arc<CategoryCatalog>,
        generator: Arc<G>,
        store: Arc<S>,
        metrics: Arc<AppMetrics>,
    ) -> Self {
        Self {
            classifier: CategoryClassifier::new(catalog.clone(), generator.clone()),
            resolver: ResponseResolver::new(catalog.clone(), generator),
            catalog,
            store,
            metrics,
        }
    }

    /// Handle one inbound message for one user. The session entry lock is
    /// held until the reply is built: turns of the same user never
    /// interleave, turns of different users run concurrently.
    pub async fn handle_message(&self, input: MessageInput) -> TurnReply {
        let started = Instant::now();
        self.metrics.inc_turn();

        let entry = self.store.entry(&input.user_id);
        let mut session = entry.lock().await;

        let language = match session.language {
            Some(language) => language,
            None => {
                let detected = detect_language(&input.text);
                session.language = Some(detected);
                detected
            }
        };

        let text = input.text.trim();
        let reply = if session.awaiting_confirmation {
            self.handle_selection(&mut session, text, language).await
        } else {
            self.classify_question(&mut session, text, language).await
        };

        self.metrics.observe_latency(started.elapsed());
        info!(
            user = %input.user_id,
            language = %language.as_code(),
            outcome = ?reply.outcome,
            "turn handled"
        );
        reply
    }

    /// AwaitingSelection: a number picks from the pending list, anything
    /// else is reinterpreted as a fresh question.
    async fn handle_selection(
        &self,
        session: &mut UserSession,
        text: &str,
        language: Language,
    ) -> TurnReply {
        let Ok(choice) = text.parse::<i64>() else {
            session.clear_selection();
            return self.classify_question(session, text, language).await;
        };

        let count = session.pending_suggestions.len() as i64;
        if !(1..=count).contains(&choice) {
            return TurnReply {
                messages: vec![messages::invalid_selection(language).to_string()],
                language,
                outcome: TurnOutcome::InvalidSelection,
                category: None,
                awaiting_selection: true,
            };
        }

        let category = session.pending_suggestions[(choice - 1) as usize];
        session.clear_selection();
        self.answer(category, language).await
    }

    /// Idle: classify, answer on a hit, otherwise suggest or give up.
    async fn classify_question(
        &self,
        session: &mut UserSession,
        text: &str,
        language: Language,
    ) -> TurnReply {
        let classification = self.classifier.classify(text).await;
        match classification.source {
            ClassificationSource::Generator => self.metrics.inc_ai_classified(),
            ClassificationSource::FallbackRules => self.metrics.inc_fallback_classified(),
        }

        if classification.category != Category::Other {
            return self.answer(classification.category, language).await;
        }

        let suggestions = self.catalog.rank_similar(text, SUGGESTION_LIMIT);
        if suggestions.is_empty() {
            return TurnReply {
                messages: vec![messages::default_no_answer(language).to_string()],
                language,
                outcome: TurnOutcome::NoMatch,
                category: None,
                awaiting_selection: false,
            };
        }

        self.metrics.inc_suggestions_offered();
        let prompt = messages::suggestion_prompt(language, &suggestions);
        session.begin_selection(suggestions);
        TurnReply {
            messages: vec![prompt],
            language,
            outcome: TurnOutcome::SuggestionsOffered,
            category: None,
            awaiting_selection: true,
        }
    }

    async fn answer(&self, category: Category, language: Language) -> TurnReply {
        let Some(resolved) = self.resolver.resolve(category, language).await else {
            // Classifier and ranker only report catalog members, so a
            // missing response means the catalog changed under us. Degrade
            // like any other unmatched question.
            return TurnReply {
                messages: vec![messages::default_no_answer(language).to_string()],
                language,
                outcome: TurnOutcome::NoMatch,
                category: None,
                awaiting_selection: false,
            };
        };

        self.metrics.inc_resolved();
        if language == Language::Spanish {
            self.metrics.inc_translation();
            if !resolved.localized {
                self.metrics.inc_translation_failure();
            }
        }

        TurnReply {
            messages: vec![
                resolved.text,
                messages::follow_up(language).to_string(),
            ],
            language,
            outcome: TurnOutcome::Answered,
            category: Some(category),
            awaiting_selection: false,
        }
    }
}
