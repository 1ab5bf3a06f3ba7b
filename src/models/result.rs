// src/models/result.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::config::APPROVAL_THRESHOLD;
use crate::models::question::{Category, QuizQuestion};

/// Per-topic aggregation over one session's question set.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryScore {
    pub category: Category,
    pub total: usize,
    pub correct: usize,
    pub percent: u32,
}

/// The outcome of a finished simulado. Computed exactly once when the
/// session leaves the playing phase; a pure function of the question set,
/// the selected answers and the time spent.
#[derive(Debug, Clone, Serialize)]
pub struct QuizResult {
    pub correct_count: usize,
    pub total_questions: usize,
    pub score_percent: u32,
    pub passed: bool,
    pub seconds_used: u32,
    pub category_breakdown: Vec<CategoryScore>,
    pub best_category: Option<Category>,
}

fn percent(correct: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((correct as f64 / total as f64) * 100.0).round() as u32
}

impl QuizResult {
    /// Scores a session. Unanswered questions count as incorrect; the pass
    /// threshold is the absolute `APPROVAL_THRESHOLD`, deliberately not
    /// scaled with the sampled set size.
    pub fn compute(questions: &[QuizQuestion], selected: &[Option<usize>], seconds_used: u32) -> Self {
        let total_questions = questions.len();
        let correct_count = questions
            .iter()
            .zip(selected)
            .filter(|(q, s)| **s == Some(q.correct_option))
            .count();

        // Breakdown groups are kept in first-encountered order; ties for the
        // best category resolve to the earliest group.
        let mut breakdown: Vec<CategoryScore> = Vec::new();
        for (q, s) in questions.iter().zip(selected) {
            let correct = *s == Some(q.correct_option);
            match breakdown.iter_mut().find(|c| c.category == q.category) {
                Some(entry) => {
                    entry.total += 1;
                    entry.correct += usize::from(correct);
                }
                None => breakdown.push(CategoryScore {
                    category: q.category,
                    total: 1,
                    correct: usize::from(correct),
                    percent: 0,
                }),
            }
        }
        for entry in &mut breakdown {
            entry.percent = percent(entry.correct, entry.total);
        }

        let mut best_category = None;
        let mut best_percent = 0;
        for entry in &breakdown {
            if best_category.is_none() || entry.percent > best_percent {
                best_category = Some(entry.category);
                best_percent = entry.percent;
            }
        }

        QuizResult {
            correct_count,
            total_questions,
            score_percent: percent(correct_count, total_questions),
            passed: correct_count >= APPROVAL_THRESHOLD,
            seconds_used,
            category_breakdown: breakdown,
            best_category,
        }
    }
}

/// Row of the `simulado_results` table. `nota` holds the score percent,
/// which is the figure the result history displays.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct SimuladoResult {
    pub id: i64,
    pub user_id: i64,
    pub nota: i32,
    pub correct_count: i32,
    pub total_questions: i32,
    pub seconds_used: i32,
    pub passed: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Insert payload for a completed simulado.
#[derive(Debug, Clone)]
pub struct NewSimuladoResult {
    pub user_id: i64,
    pub nota: i32,
    pub correct_count: i32,
    pub total_questions: i32,
    pub seconds_used: i32,
    pub passed: bool,
}

impl NewSimuladoResult {
    pub fn from_result(user_id: i64, result: &QuizResult) -> Self {
        NewSimuladoResult {
            user_id,
            nota: result.score_percent as i32,
            correct_count: result.correct_count as i32,
            total_questions: result.total_questions as i32,
            seconds_used: result.seconds_used as i32,
            passed: result.passed,
        }
    }
}
