use thiserror::Error;

use crate::models::Mode;

/// Boxed transport error produced by a [`crate::QuestionSource`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Every way an engine operation can fail. All variants are recoverable;
/// a failed operation leaves prior state untouched.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Exam selection cannot meet a domain quota.
    #[error("insufficient questions for domain {domain}: {available} available, {required} required")]
    InsufficientDomainQuestions {
        domain: u32,
        available: usize,
        required: usize,
    },

    /// Post-selection sanity check: the assembled exam has the wrong size.
    #[error("exam selection produced {actual} questions, expected {expected}")]
    ExamSizeMismatch { actual: usize, expected: usize },

    /// The requested mode has no selection rules for this program.
    #[error("invalid mode or program: {mode}, program {program}")]
    InvalidModeOrProgram { mode: Mode, program: u32 },

    /// A session cannot start with zero questions.
    #[error("cannot start a session with an empty selection")]
    EmptySelection,

    /// Mutation attempted after the session reached its terminal state.
    #[error("session is already finished")]
    SessionAlreadyFinished,

    /// A recorded answer's question vanished from the bank. Non-fatal:
    /// aggregation skips it for domain stats and logs this error.
    #[error("recorded answer references unknown question {question_id}")]
    UnresolvedQuestionReference { question_id: String },

    /// The question source failed; the bank keeps its previous contents.
    #[error("question source failed: {0}")]
    Source(BoxError),

    /// The bank JSON did not parse.
    #[error("invalid question bank: {0}")]
    BankParse(#[from] serde_json::Error),
}
