#![allow(dead_code)]

use std::collections::HashMap;

use prepquiz::{CorrectAnswer, Question, QuestionKind, QuestionOptions};

/// A four-option single-choice question; option 1 is correct.
pub fn single_question(id: &str, program: Option<u32>, module: Option<u32>, domain: u32) -> Question {
    Question {
        id: id.to_string(),
        program,
        module,
        domain,
        kind: QuestionKind::Single,
        prompt: format!("Question {id}"),
        options: QuestionOptions::Listed(vec![
            "Option A".to_string(),
            "Option B".to_string(),
            "Option C".to_string(),
            "Option D".to_string(),
        ]),
        answer: CorrectAnswer::Index(1),
        reference: None,
    }
}

pub fn with_reference(mut question: Question, reference: &str) -> Question {
    question.reference = Some(reference.to_string());
    question
}

/// `n` single-choice questions in one domain, ids unique per domain.
pub fn make_questions(n: usize, program: u32, domain: u32) -> Vec<Question> {
    (0..n)
        .map(|i| {
            single_question(
                &format!("p{program}-d{domain}-q{i}"),
                Some(program),
                Some(1),
                domain,
            )
        })
        .collect()
}

/// A pool with the given per-domain counts, all tagged to one program.
pub fn domain_pool(program: u32, counts: &[(u32, usize)]) -> Vec<Question> {
    counts
        .iter()
        .flat_map(|&(domain, count)| make_questions(count, program, domain))
        .collect()
}

pub fn matching_question(id: &str, domain: u32) -> Question {
    Question {
        id: id.to_string(),
        program: Some(1),
        module: Some(1),
        domain,
        kind: QuestionKind::Matching,
        prompt: format!("Match {id}"),
        options: QuestionOptions::Paired {
            left: vec!["Initiating".to_string(), "Closing".to_string()],
            right: vec!["Charter".to_string(), "Lessons learned".to_string()],
        },
        answer: CorrectAnswer::Matches(HashMap::from([
            ("Initiating".to_string(), "Charter".to_string()),
            ("Closing".to_string(), "Lessons learned".to_string()),
        ])),
        reference: None,
    }
}

pub fn sequencing_question(id: &str, domain: u32) -> Question {
    Question {
        id: id.to_string(),
        program: Some(1),
        module: Some(1),
        domain,
        kind: QuestionKind::Sequencing,
        prompt: format!("Order {id}"),
        options: QuestionOptions::Listed(vec![
            "Initiate".to_string(),
            "Plan".to_string(),
            "Execute".to_string(),
        ]),
        answer: CorrectAnswer::Ordering(vec![
            "Initiate".to_string(),
            "Plan".to_string(),
            "Execute".to_string(),
        ]),
        reference: None,
    }
}

pub fn multiple_question(id: &str, domain: u32, answer: Vec<usize>) -> Question {
    Question {
        id: id.to_string(),
        program: Some(1),
        module: Some(1),
        domain,
        kind: QuestionKind::Multiple,
        prompt: format!("Select all for {id}"),
        options: QuestionOptions::Listed(vec![
            "Option A".to_string(),
            "Option B".to_string(),
            "Option C".to_string(),
            "Option D".to_string(),
        ]),
        answer: CorrectAnswer::Indices(answer),
        reference: None,
    }
}
