// Answer grading - one pure function, dispatched on question kind

use crate::models::{CorrectAnswer, Question, QuestionKind, QuestionOptions, Submission};

/// Grade a submission against a question. Pure and idempotent; a submission
/// whose shape does not match the question kind grades incorrect.
pub fn grade(question: &Question, submission: &Submission) -> bool {
    match question.kind {
        QuestionKind::Single | QuestionKind::Scenario => {
            match (&question.answer, submission) {
                (CorrectAnswer::Index(want), Submission::Choice(got)) => got == want,
                _ => false,
            }
        }
        QuestionKind::Multiple => {
            // Banks sometimes store a single-element answer unwrapped.
            let mut want = match &question.answer {
                CorrectAnswer::Indices(indices) => indices.clone(),
                CorrectAnswer::Index(index) => vec![*index],
                _ => return false,
            };
            let Submission::Choices(got) = submission else {
                return false;
            };

            let mut got = got.clone();
            got.sort_unstable();
            want.sort_unstable();
            got == want
        }
        QuestionKind::Matching => match (&question.answer, submission) {
            // Every canonical pair must be matched; extra picks are ignored.
            (CorrectAnswer::Matches(want), Submission::Matches(got)) => want
                .iter()
                .all(|(left, right)| got.get(left) == Some(right)),
            _ => false,
        },
        QuestionKind::Sequencing => {
            let (CorrectAnswer::Ordering(want), Submission::Ranks(ranks)) =
                (&question.answer, submission)
            else {
                return false;
            };
            let QuestionOptions::Listed(options) = &question.options else {
                return false;
            };

            // Each option's claimed rank must be its own position, and the
            // option at that rank must match the canonical ordering. Only
            // the canonical permutation itself passes.
            ranks.len() == options.len()
                && want.len() == options.len()
                && ranks
                    .iter()
                    .enumerate()
                    .all(|(i, &rank)| rank == i + 1 && options[rank - 1] == want[i])
        }
    }
}
