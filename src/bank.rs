// Question repository - owns the loaded bank, filters it per run

use crate::error::EngineError;
use crate::models::{ModuleRange, Question};
use crate::source::QuestionSource;

/// The full set of loaded questions. Filtering is pure; loading replaces the
/// contents atomically or not at all.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_questions(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Parse the canonical `questions.json` payload.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let questions: Vec<Question> = serde_json::from_str(json)?;
        tracing::info!("parsed {} questions from bank JSON", questions.len());
        Ok(Self { questions })
    }

    /// Replace the bank contents from a source. On failure the previous
    /// contents are kept; a half-loaded bank is never observable.
    pub async fn load_from<S: QuestionSource>(&mut self, source: &S) -> Result<usize, EngineError> {
        let questions = match source.fetch_all().await {
            Ok(questions) => questions,
            Err(e) => {
                tracing::error!("question source failed, keeping {} loaded: {e}", self.len());
                return Err(EngineError::Source(e));
            }
        };

        let count = questions.len();
        self.questions = questions;
        tracing::info!("loaded {count} questions from source");
        Ok(count)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Resolve a question by id (aggregation uses this lookup).
    pub fn get(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Questions for one run: keeps a question if its program matches or it
    /// is program-agnostic, then applies the module range when one is set.
    /// Questions without a module number never match a set range.
    pub fn filter(&self, program: u32, range: Option<ModuleRange>) -> Vec<Question> {
        let filtered: Vec<Question> = self
            .questions
            .iter()
            .filter(|q| q.program.is_none() || q.program == Some(program))
            .filter(|q| match range {
                Some(range) => q.module.is_some_and(|module| range.contains(module)),
                None => true,
            })
            .cloned()
            .collect();

        tracing::debug!(
            "filtered {} of {} questions for program={program}, range={range:?}",
            filtered.len(),
            self.questions.len()
        );
        filtered
    }
}
