//! Core engine for a certification-prep quiz application.
//!
//! The host UI owns rendering, timers and persistence; this crate owns the
//! question bank, mode-specific selection, answer grading, session state and
//! result aggregation. A typical run:
//!
//! 1. load questions into a [`QuestionBank`] (from a [`QuestionSource`] or
//!    straight from the bank JSON),
//! 2. [`QuestionBank::filter`] by program and module range,
//! 3. [`select()`] the session's questions for the chosen [`Mode`],
//! 4. drive a [`Session`] with the user's [`Submission`]s,
//! 5. read the [`SessionResult`] and append it to a [`HistoryStore`].

pub mod bank;
pub mod error;
pub mod evaluate;
pub mod history;
pub mod models;
pub mod report;
pub mod select;
pub mod session;
pub mod source;
pub mod syllabus;

pub use bank::QuestionBank;
pub use error::EngineError;
pub use history::{HistoryStore, MemoryHistory};
pub use models::{
    CorrectAnswer, Mode, ModuleRange, Question, QuestionKind, QuestionOptions, RecordedAnswer,
    Submission,
};
pub use report::SessionResult;
pub use select::select;
pub use session::Session;
pub use source::{QuestionSource, StaticSource};
