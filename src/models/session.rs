// src/models/session.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::config::SIMULADO_TIME_BUDGET_SECS;
use crate::models::question::{PublicQuestion, QuizQuestion};
use crate::models::result::QuizResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Intro,
    Playing,
    Finished,
}

/// One timed simulado run.
///
/// All fields are private; the only way to move the session is through the
/// transition operations below. Invalid transitions (confirming with nothing
/// selected, answering a locked question, navigating past the ends) are
/// silent no-ops rather than errors, since the surface above may deliver
/// duplicate events.
#[derive(Debug)]
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    current: usize,
    selected: Vec<Option<usize>>,
    confirmed: Vec<bool>,
    remaining_seconds: u32,
    phase: Phase,
    result: Option<QuizResult>,
    submitted: bool,
}

impl QuizSession {
    pub fn new() -> Self {
        QuizSession {
            questions: Vec::new(),
            current: 0,
            selected: Vec::new(),
            confirmed: Vec::new(),
            remaining_seconds: SIMULADO_TIME_BUDGET_SECS,
            phase: Phase::Intro,
            result: None,
            submitted: false,
        }
    }

    /// Begins a fresh run over `questions`, discarding any previous one:
    /// index, answers, locks, clock and the submit guard all reset.
    pub fn start(&mut self, questions: Vec<QuizQuestion>) {
        let n = questions.len();
        self.questions = questions;
        self.current = 0;
        self.selected = vec![None; n];
        self.confirmed = vec![false; n];
        self.remaining_seconds = SIMULADO_TIME_BUDGET_SECS;
        self.phase = Phase::Playing;
        self.result = None;
        self.submitted = false;
    }

    /// One second of wall-clock time. Reaching zero forces the finished
    /// phase (auto-submit). Returns true when this tick ended the run.
    pub fn tick(&mut self) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        self.remaining_seconds -= 1;
        if self.remaining_seconds == 0 {
            self.finish();
            return true;
        }
        false
    }

    /// Selects an option for the current question. Ignored once the
    /// question is confirmed, and for out-of-range indices.
    pub fn select_answer(&mut self, option_index: usize) {
        if self.phase != Phase::Playing {
            return;
        }
        if option_index >= 4 || self.confirmed[self.current] {
            return;
        }
        self.selected[self.current] = Some(option_index);
    }

    /// Locks the current answer in. One-way: a confirmed answer can never
    /// change again. Ignored while nothing is selected.
    pub fn confirm_answer(&mut self) {
        if self.phase != Phase::Playing {
            return;
        }
        if self.selected[self.current].is_some() {
            self.confirmed[self.current] = true;
        }
    }

    /// Moves to the next question; no wrap, no auto-finish at the end.
    pub fn next(&mut self) {
        if self.phase == Phase::Playing && self.current + 1 < self.questions.len() {
            self.current += 1;
        }
    }

    /// Moves back one question. Per-question state survives navigation.
    pub fn previous(&mut self) {
        if self.phase == Phase::Playing && self.current > 0 {
            self.current -= 1;
        }
    }

    /// Ends the run and computes the result. Idempotent once finished.
    pub fn finish(&mut self) {
        if self.phase != Phase::Playing {
            return;
        }
        self.phase = Phase::Finished;
        let seconds_used = SIMULADO_TIME_BUDGET_SECS - self.remaining_seconds;
        self.result = Some(QuizResult::compute(&self.questions, &self.selected, seconds_used));
    }

    /// Single-submit guard for the result reporter: true only on the first
    /// call, so a duplicate finished observation persists nothing.
    pub fn mark_submitted(&mut self) -> bool {
        if self.submitted {
            return false;
        }
        self.submitted = true;
        true
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.current)
    }

    pub fn selected_option(&self, index: usize) -> Option<usize> {
        self.selected.get(index).copied().flatten()
    }

    pub fn is_confirmed(&self, index: usize) -> bool {
        self.confirmed.get(index).copied().unwrap_or(false)
    }

    pub fn result(&self) -> Option<&QuizResult> {
        self.result.as_ref()
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        QuizSession::new()
    }
}

/// Query parameters for starting a simulado.
#[derive(Debug, Deserialize)]
pub struct StartParams {
    /// Number of questions to draw; defaults to the full exam size.
    pub questions: Option<usize>,
}

/// Body for selecting an answer on the current question.
#[derive(Debug, Deserialize, Validate)]
pub struct SelectAnswerRequest {
    #[validate(range(max = 3))]
    pub option_index: usize,
}

/// Per-question progress flags shown alongside the current question.
#[derive(Debug, Serialize)]
pub struct QuestionStatus {
    pub answered: bool,
    pub confirmed: bool,
}

/// Client view of the session. The correct option is revealed only once the
/// current question has been confirmed, matching the lock-then-feedback
/// semantics of the exam.
#[derive(Debug, Serialize)]
pub struct SimuladoView {
    pub phase: Phase,
    pub current_index: usize,
    pub total_questions: usize,
    pub remaining_seconds: u32,
    pub question: Option<PublicQuestion>,
    pub selected_option: Option<usize>,
    pub confirmed: bool,
    pub correct_option: Option<usize>,
    pub progress: Vec<QuestionStatus>,
    pub result: Option<QuizResult>,
}

impl SimuladoView {
    pub fn of(session: &QuizSession) -> Self {
        let current = session.current_index();
        let confirmed = session.is_confirmed(current);
        let question = session.current_question();

        SimuladoView {
            phase: session.phase(),
            current_index: current,
            total_questions: session.total_questions(),
            remaining_seconds: session.remaining_seconds(),
            question: question.map(PublicQuestion::from),
            selected_option: session.selected_option(current),
            confirmed,
            correct_option: if confirmed {
                question.map(|q| q.correct_option)
            } else {
                None
            },
            progress: (0..session.total_questions())
                .map(|i| QuestionStatus {
                    answered: session.selected_option(i).is_some(),
                    confirmed: session.is_confirmed(i),
                })
                .collect(),
            result: session.result().cloned(),
        }
    }
}
