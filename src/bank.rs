// src/bank.rs

use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::catalog;
use crate::models::question::QuizQuestion;

/// Immutable catalog of simulado questions.
///
/// Sampling is a full uniform shuffle of the catalog truncated to the
/// requested size, so a sample never repeats a question and a request larger
/// than the catalog degrades to the whole catalog.
#[derive(Debug)]
pub struct QuestionBank {
    catalog: Vec<QuizQuestion>,
}

impl QuestionBank {
    pub fn new(catalog: Vec<QuizQuestion>) -> Self {
        QuestionBank { catalog }
    }

    /// Loads the built-in DETRAN question set.
    pub fn detran() -> Self {
        QuestionBank::new(catalog::catalog())
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    /// Returns `min(n, len)` distinct questions in uniformly random order.
    /// Each call shuffles independently; the catalog itself is never mutated.
    pub fn sample(&self, n: usize) -> Vec<QuizQuestion> {
        let mut questions = self.catalog.clone();
        questions.shuffle(&mut thread_rng());
        questions.truncate(n);
        questions
    }
}
