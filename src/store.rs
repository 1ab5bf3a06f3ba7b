// src/store.rs

use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::AppError;
use crate::models::result::{NewSimuladoResult, SimuladoResult};

/// External persistence for finished simulados.
///
/// The engine only ever inserts one row per completed run and reads the
/// user's own history; everything else about storage lives behind this seam,
/// which is also what lets the HTTP tests run without a database.
#[async_trait]
pub trait ResultStore: Send + Sync {
    async fn insert_result(&self, row: NewSimuladoResult) -> Result<(), AppError>;

    async fn results_for_user(&self, user_id: i64) -> Result<Vec<SimuladoResult>, AppError>;
}

/// Postgres-backed store used by the server binary.
pub struct PgResultStore {
    pool: PgPool,
}

impl PgResultStore {
    pub fn new(pool: PgPool) -> Self {
        PgResultStore { pool }
    }
}

#[async_trait]
impl ResultStore for PgResultStore {
    async fn insert_result(&self, row: NewSimuladoResult) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO simulado_results
                (user_id, nota, correct_count, total_questions, seconds_used, passed)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(row.user_id)
        .bind(row.nota)
        .bind(row.correct_count)
        .bind(row.total_questions)
        .bind(row.seconds_used)
        .bind(row.passed)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn results_for_user(&self, user_id: i64) -> Result<Vec<SimuladoResult>, AppError> {
        let rows = sqlx::query_as::<_, SimuladoResult>(
            r#"
            SELECT id, user_id, nota, correct_count, total_questions,
                   seconds_used, passed, created_at
            FROM simulado_results
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT 20
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}

/// In-memory store. Backs the session registry tests and the HTTP
/// integration tests, where persistence side effects need to be observable
/// without a running Postgres.
#[derive(Default)]
pub struct MemoryResultStore {
    rows: std::sync::Mutex<Vec<SimuladoResult>>,
}

impl MemoryResultStore {
    pub fn new() -> Self {
        MemoryResultStore::default()
    }

    pub fn inserted(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl ResultStore for MemoryResultStore {
    async fn insert_result(&self, row: NewSimuladoResult) -> Result<(), AppError> {
        let mut rows = self.rows.lock().unwrap();
        let id = rows.len() as i64 + 1;
        rows.push(SimuladoResult {
            id,
            user_id: row.user_id,
            nota: row.nota,
            correct_count: row.correct_count,
            total_questions: row.total_questions,
            seconds_used: row.seconds_used,
            passed: row.passed,
            created_at: Some(chrono::Utc::now()),
        });
        Ok(())
    }

    async fn results_for_user(&self, user_id: i64) -> Result<Vec<SimuladoResult>, AppError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect())
    }
}
