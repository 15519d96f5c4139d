// Shared data structs for the quiz engine

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::syllabus;

/// Session mode: untimed study runs, or the timed exam with domain quotas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Study,
    Exam,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Study => f.write_str("study"),
            Mode::Exam => f.write_str("exam"),
        }
    }
}

/// Inclusive `[from, to]` filter over module numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRange {
    pub from: u32,
    pub to: u32,
}

impl ModuleRange {
    /// Returns `None` unless `1 <= from <= to`.
    pub fn new(from: u32, to: u32) -> Option<Self> {
        (from >= 1 && from <= to).then_some(Self { from, to })
    }

    /// Range covering a single module (the "one module" dropdown).
    pub fn single(module: u32) -> Option<Self> {
        Self::new(module, module)
    }

    pub fn contains(&self, module: u32) -> bool {
        module >= self.from && module <= self.to
    }

    /// Whether the range stays inside the program's module numbering.
    pub fn valid_for(&self, program: u32) -> bool {
        syllabus::module_count(program).is_some_and(|count| self.to <= count)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Single,
    Multiple,
    Matching,
    Sequencing,
    /// Scenario questions render a vignette but grade exactly like `Single`.
    Scenario,
}

/// Option payload; the shape depends on the question kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuestionOptions {
    /// Ordered option texts for single/multiple/scenario/sequencing questions.
    Listed(Vec<String>),
    /// Left and right columns for matching questions.
    Paired { left: Vec<String>, right: Vec<String> },
}

/// Canonical answer payload; the shape depends on the question kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CorrectAnswer {
    /// Index into the options for single/scenario questions.
    Index(usize),
    /// Set of option indices for multiple-choice questions.
    Indices(Vec<usize>),
    /// Option texts in canonical order for sequencing questions.
    Ordering(Vec<String>),
    /// Left text to right text for matching questions.
    Matches(HashMap<String, String>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    #[serde(deserialize_with = "deserialize_string_or_number")]
    pub id: String,
    /// Certification track; `None` marks a shared, program-agnostic question.
    #[serde(default, deserialize_with = "deserialize_opt_u32_or_string")]
    pub program: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_opt_u32_or_string")]
    pub module: Option<u32>,
    /// Exam content domain, 1 through 4.
    #[serde(deserialize_with = "deserialize_u32_or_string")]
    pub domain: u32,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    #[serde(rename = "question")]
    pub prompt: String,
    pub options: QuestionOptions,
    pub answer: CorrectAnswer,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

/// A typed response submitted by the presentation layer. One shape per
/// question kind; "no answer" is expressed by not submitting at all.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// Selected option index (single/scenario).
    Choice(usize),
    /// Selected option indices (multiple).
    Choices(Vec<usize>),
    /// Chosen right-column text per left-column text (matching).
    Matches(HashMap<String, String>),
    /// Claimed 1-based rank per option position (sequencing).
    Ranks(Vec<usize>),
}

/// One graded answer, recorded the first time a question is submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedAnswer {
    pub question_id: String,
    pub correct: bool,
    /// Copied from the question; surfaced in history, not in live feedback.
    pub reference: Option<String>,
}

/// Deserialize a value the bank JSON encodes as either a string or a number.
/// Hand-edited banks are inconsistent about quoting ids.
fn deserialize_string_or_number<'de, D: serde::Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    struct Vis;
    impl serde::de::Visitor<'_> for Vis {
        type Value = String;
        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("string or number")
        }
        fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_owned())
        }
        fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }
        fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }
    }
    d.deserialize_any(Vis)
}

fn deserialize_u32_or_string<'de, D: serde::Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
    struct Vis;
    impl serde::de::Visitor<'_> for Vis {
        type Value = u32;
        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("number or numeric string")
        }
        fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<u32, E> {
            u32::try_from(v).map_err(E::custom)
        }
        fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<u32, E> {
            u32::try_from(v).map_err(E::custom)
        }
        fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<u32, E> {
            v.trim().parse().map_err(E::custom)
        }
    }
    d.deserialize_any(Vis)
}

/// As above, but tolerating null and the empty string (both mean "unset").
fn deserialize_opt_u32_or_string<'de, D: serde::Deserializer<'de>>(
    d: D,
) -> Result<Option<u32>, D::Error> {
    struct Vis;
    impl serde::de::Visitor<'_> for Vis {
        type Value = Option<u32>;
        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("number, numeric string, or null")
        }
        fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }
        fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Self::Value, E> {
            u32::try_from(v).map(Some).map_err(E::custom)
        }
        fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Self::Value, E> {
            u32::try_from(v).map(Some).map_err(E::custom)
        }
        fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
            if v.trim().is_empty() {
                Ok(None)
            } else {
                v.trim().parse().map(Some).map_err(E::custom)
            }
        }
    }
    d.deserialize_any(Vis)
}
