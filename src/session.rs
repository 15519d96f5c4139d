// Session state machine - sequences one run through its selected questions

use chrono::{DateTime, Utc};
use ulid::Ulid;

use crate::bank::QuestionBank;
use crate::error::EngineError;
use crate::evaluate;
use crate::models::{Mode, Question, RecordedAnswer, Submission};
use crate::report::{self, SessionResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    InProgress { index: usize },
    Finished,
}

/// One quiz run. Starting the session is the only way to construct it, so an
/// un-started session is unrepresentable; every transition goes through the
/// methods below, and `&mut self` receivers keep the grade-record-advance
/// step atomic with respect to the host's exam timer.
#[derive(Debug, Clone)]
pub struct Session {
    token: String,
    mode: Mode,
    program: u32,
    questions: Vec<Question>,
    state: State,
    score: u32,
    answers: Vec<RecordedAnswer>,
    finished_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Begin a run over a non-empty selection. Fails with `EmptySelection`
    /// otherwise; no session exists until this succeeds.
    pub fn start(
        mode: Mode,
        program: u32,
        selection: Vec<Question>,
    ) -> Result<Self, EngineError> {
        if selection.is_empty() {
            return Err(EngineError::EmptySelection);
        }

        let token = Ulid::new().to_string();
        tracing::info!(
            "session started for program={program}: token={token}, mode={mode}, {} questions",
            selection.len()
        );

        Ok(Self {
            token,
            mode,
            program,
            questions: selection,
            state: State::InProgress { index: 0 },
            score: 0,
            answers: Vec::new(),
            finished_at: None,
        })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn program(&self) -> u32 {
        self.program
    }

    /// Number of questions in the selection.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn answers(&self) -> &[RecordedAnswer] {
        &self.answers
    }

    pub fn is_finished(&self) -> bool {
        self.state == State::Finished
    }

    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    /// Zero-based position of the current question; `None` once finished.
    pub fn position(&self) -> Option<usize> {
        match self.state {
            State::InProgress { index } => Some(index),
            State::Finished => None,
        }
    }

    /// The question awaiting an answer; `None` once finished.
    pub fn current(&self) -> Option<&Question> {
        self.position().map(|index| &self.questions[index])
    }

    /// Grade the current question and return the verdict. The first
    /// submission for a question records an immutable answer and scores it;
    /// revisiting (Study Mode `previous`) re-grades for feedback only.
    /// Exam Mode auto-advances after recording.
    pub fn submit(&mut self, submission: &Submission) -> Result<bool, EngineError> {
        let State::InProgress { index } = self.state else {
            return Err(EngineError::SessionAlreadyFinished);
        };

        let question = &self.questions[index];
        let correct = evaluate::grade(question, submission);

        if self.answers.iter().any(|a| a.question_id == question.id) {
            tracing::debug!(
                "question {} already recorded for session {}, not re-scoring",
                question.id,
                self.token
            );
            return Ok(correct);
        }

        self.answers.push(RecordedAnswer {
            question_id: question.id.clone(),
            correct,
            reference: question.reference.clone(),
        });
        if correct {
            self.score += 1;
        }
        tracing::info!(
            "answer recorded for session={} question={}: {}",
            self.token,
            self.questions[index].id,
            if correct { "correct" } else { "incorrect" }
        );

        if self.mode == Mode::Exam {
            self.advance()?;
        }
        Ok(correct)
    }

    /// Move to the next question, or finish after the last one.
    pub fn advance(&mut self) -> Result<(), EngineError> {
        match &mut self.state {
            State::InProgress { index } if *index + 1 < self.questions.len() => {
                *index += 1;
                Ok(())
            }
            State::InProgress { .. } => {
                self.finish("all questions passed");
                Ok(())
            }
            State::Finished => Err(EngineError::SessionAlreadyFinished),
        }
    }

    /// Step back one question (Study Mode navigation); no-op at the first.
    pub fn previous(&mut self) -> Result<(), EngineError> {
        match &mut self.state {
            State::InProgress { index } => {
                if *index > 0 {
                    *index -= 1;
                }
                Ok(())
            }
            State::Finished => Err(EngineError::SessionAlreadyFinished),
        }
    }

    /// Exam timer expiry: finish immediately, keeping every answer recorded
    /// so far. Idempotent, so a timer firing after a manual finish is safe.
    pub fn time_expired(&mut self) {
        if let State::InProgress { index } = self.state {
            tracing::info!(
                "timer expired for session={} at question {} of {}",
                self.token,
                index + 1,
                self.questions.len()
            );
            self.finish("time expired");
        }
    }

    fn finish(&mut self, cause: &str) {
        self.state = State::Finished;
        self.finished_at = Some(Utc::now());
        tracing::info!(
            "session {} finished ({cause}): score {}/{}",
            self.token,
            self.score,
            self.questions.len()
        );
    }

    /// The aggregated result, available only once the session is finished.
    pub fn result(&self, bank: &QuestionBank) -> Option<SessionResult> {
        self.is_finished().then(|| report::aggregate(self, bank))
    }
}
