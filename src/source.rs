// Question source collaborator - where the bank's contents come from

use crate::error::BoxError;
use crate::models::Question;

/// Anything that can produce the full question set: an HTTP backend, a file,
/// or a fixture. Transport is the implementor's concern; the engine only
/// distinguishes success from failure.
#[allow(async_fn_in_trait)]
pub trait QuestionSource {
    /// Fetch every available question. A failed fetch is terminal for this
    /// attempt; the engine does not retry.
    async fn fetch_all(&self) -> Result<Vec<Question>, BoxError>;
}

/// In-memory source for hosts that already hold the bank, and for tests.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    questions: Vec<Question>,
}

impl StaticSource {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }
}

impl QuestionSource for StaticSource {
    async fn fetch_all(&self) -> Result<Vec<Question>, BoxError> {
        Ok(self.questions.clone())
    }
}
