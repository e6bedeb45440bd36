use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::{GeneratorError, TextGenerator, TextRequest};

/// Replays a fixed sequence of replies, then errors.
pub struct ScriptedGenerator {
    replies: Mutex<VecDeque<String>>,
}

impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, _request: TextRequest) -> Result<String, GeneratorError> {
        self.replies
            .lock()
            .pop_front()
            .ok_or(GeneratorError::EmptyOutput)
    }
}

pub fn scripted_generator<I>(replies: I) -> Arc<ScriptedGenerator>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    Arc::new(ScriptedGenerator {
        replies: Mutex::new(replies.into_iter().map(Into::into).collect()),
    })
}

/// Simulates an unreachable capability.
pub struct FailingGenerator;

impl TextGenerator for FailingGenerator {
    async fn generate(&self, _request: TextRequest) -> Result<String, GeneratorError> {
        Err(GeneratorError::Disabled)
    }
}

pub fn failing_generator() -> Arc<FailingGenerator> {
    Arc::new(FailingGenerator)
}
