// Result aggregation - per-domain error counts, references, history record

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::bank::QuestionBank;
use crate::error::EngineError;
use crate::models::Mode;
use crate::session::Session;
use crate::syllabus;

/// The record of one finished run, shaped for the history log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResult {
    pub token: String,
    pub mode: Mode,
    pub program: u32,
    pub score: u32,
    /// Selection length in Study Mode; the configured exam size in Exam
    /// Mode, even when the timer cut the run short.
    pub total: u32,
    /// Questions actually answered (the denominator for error rates).
    pub answered: u32,
    /// Incorrect answers per domain; every domain present, zeros included.
    pub domain_errors: BTreeMap<u32, u32>,
    /// Reference annotations per domain, in answer order, duplicates kept.
    pub domain_references: BTreeMap<u32, Vec<String>>,
    pub finished_at: DateTime<Utc>,
}

impl SessionResult {
    /// Per-domain error percentage over answered questions, rounded to two
    /// decimals. All zeros when nothing was answered.
    pub fn error_rates(&self) -> BTreeMap<u32, f64> {
        self.domain_errors
            .iter()
            .map(|(&domain, &errors)| {
                let rate = if self.answered == 0 {
                    0.0
                } else {
                    f64::from(errors) * 100.0 / f64::from(self.answered)
                };
                (domain, (rate * 100.0).round() / 100.0)
            })
            .collect()
    }
}

/// Build the result for a finished session. Answers whose question is no
/// longer in the bank still count toward score and answered, but are skipped
/// for domain stats and references.
pub fn aggregate(session: &Session, bank: &QuestionBank) -> SessionResult {
    let mut domain_errors: BTreeMap<u32, u32> =
        syllabus::DOMAINS.iter().map(|&domain| (domain, 0)).collect();
    let mut domain_references: BTreeMap<u32, Vec<String>> = BTreeMap::new();

    for answer in session.answers() {
        let Some(question) = bank.get(&answer.question_id) else {
            tracing::warn!(
                "{}",
                EngineError::UnresolvedQuestionReference {
                    question_id: answer.question_id.clone(),
                }
            );
            continue;
        };

        if !answer.correct {
            *domain_errors.entry(question.domain).or_insert(0) += 1;
        }
        if let Some(reference) = &question.reference {
            domain_references
                .entry(question.domain)
                .or_default()
                .push(reference.clone());
        }
    }

    let total = match session.mode() {
        Mode::Study => session.len(),
        Mode::Exam => syllabus::exam_total(session.program()).unwrap_or_else(|| session.len()),
    };

    SessionResult {
        token: session.token().to_owned(),
        mode: session.mode(),
        program: session.program(),
        score: session.score(),
        total: total as u32,
        answered: session.answers().len() as u32,
        domain_errors,
        domain_references,
        finished_at: session.finished_at().unwrap_or_else(Utc::now),
    }
}
