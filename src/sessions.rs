// src/sessions.rs

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::AbortHandle;

use crate::models::question::QuizQuestion;
use crate::models::result::{NewSimuladoResult, QuizResult};
use crate::models::session::{QuizSession, SimuladoView};
use crate::store::ResultStore;

struct Entry {
    session: QuizSession,
    /// Identifies the run this entry belongs to, so a ticker that survived
    /// an abort race can never touch a successor session.
    generation: u64,
    timer: Option<AbortHandle>,
}

/// Registry of active simulados, one per user.
///
/// Owns the per-run countdown ticker: starting a run spawns it, and every
/// exit path from the playing phase (explicit finish, natural expiry,
/// restart, abandonment) cancels it.
#[derive(Clone)]
pub struct SimuladoSessions {
    inner: Arc<Mutex<HashMap<i64, Entry>>>,
    generations: Arc<AtomicU64>,
}

impl SimuladoSessions {
    pub fn new() -> Self {
        SimuladoSessions {
            inner: Arc::new(Mutex::new(HashMap::new())),
            generations: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Begins a fresh run for the user, discarding (and never submitting)
    /// any run already in flight.
    pub async fn start(
        &self,
        user_id: i64,
        questions: Vec<QuizQuestion>,
        store: Arc<dyn ResultStore>,
    ) -> SimuladoView {
        let mut map = self.inner.lock().await;

        if let Some(old) = map.remove(&user_id) {
            if let Some(timer) = old.timer {
                timer.abort();
            }
        }

        let generation = self.generations.fetch_add(1, Ordering::Relaxed);
        let mut session = QuizSession::new();
        session.start(questions);

        let ticker = tokio::spawn(Self::run_timer(
            self.inner.clone(),
            store,
            user_id,
            generation,
        ));

        let entry = Entry {
            session,
            generation,
            timer: Some(ticker.abort_handle()),
        };
        let view = SimuladoView::of(&entry.session);
        map.insert(user_id, entry);
        view
    }

    /// Runs an operation against the user's active session, if any.
    pub async fn with_session<R>(
        &self,
        user_id: i64,
        f: impl FnOnce(&mut QuizSession) -> R,
    ) -> Option<R> {
        let mut map = self.inner.lock().await;
        map.get_mut(&user_id).map(|entry| f(&mut entry.session))
    }

    /// Ends the run, cancels its ticker and reports the result. Idempotent:
    /// a second call returns the same result and submits nothing.
    pub async fn finish(&self, user_id: i64, store: Arc<dyn ResultStore>) -> Option<QuizResult> {
        let mut map = self.inner.lock().await;
        let entry = map.get_mut(&user_id)?;

        if let Some(timer) = entry.timer.take() {
            timer.abort();
        }
        entry.session.finish();
        submit_result(&mut entry.session, user_id, &store);

        entry.session.result().cloned()
    }

    /// Drops the run mid-flight: the ticker is cancelled and no result is
    /// computed or submitted.
    pub async fn abandon(&self, user_id: i64) -> bool {
        let mut map = self.inner.lock().await;
        match map.remove(&user_id) {
            Some(entry) => {
                if let Some(timer) = entry.timer {
                    timer.abort();
                }
                true
            }
            None => false,
        }
    }

    /// The countdown for one run: one tick per wall-clock second while the
    /// session is playing. Stops itself the moment the session is gone,
    /// replaced or no longer playing; on natural expiry it reports the
    /// result and exits.
    async fn run_timer(
        sessions: Arc<Mutex<HashMap<i64, Entry>>>,
        store: Arc<dyn ResultStore>,
        user_id: i64,
        generation: u64,
    ) {
        let mut interval = tokio::time::interval(Duration::from_secs(1));
        // The first interval tick resolves immediately; the countdown
        // starts one full second after the session does.
        interval.tick().await;

        loop {
            interval.tick().await;

            let mut map = sessions.lock().await;
            let Some(entry) = map.get_mut(&user_id) else {
                return;
            };
            if entry.generation != generation || !entry.session.is_playing() {
                return;
            }
            if entry.session.tick() {
                entry.timer = None;
                tracing::info!("Simulado for user {} expired, auto-submitting", user_id);
                submit_result(&mut entry.session, user_id, &store);
                return;
            }
        }
    }
}

impl Default for SimuladoSessions {
    fn default() -> Self {
        SimuladoSessions::new()
    }
}

/// Persists a finished run, at most once per session. The insert is
/// fire-and-forget: the locally computed result is authoritative for
/// display, so a storage failure is only logged.
fn submit_result(session: &mut QuizSession, user_id: i64, store: &Arc<dyn ResultStore>) {
    if !session.mark_submitted() {
        return;
    }
    let Some(result) = session.result() else {
        return;
    };

    let row = NewSimuladoResult::from_result(user_id, result);
    let store = store.clone();
    tokio::spawn(async move {
        if let Err(e) = store.insert_result(row).await {
            tracing::warn!("Failed to persist simulado result for user {}: {}", user_id, e);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::QuestionBank;
    use crate::config::SIMULADO_TIME_BUDGET_SECS;
    use crate::models::session::Phase;
    use crate::store::MemoryResultStore;

    fn thirty_questions() -> Vec<QuizQuestion> {
        QuestionBank::detran().sample(30)
    }

    // Paused-clock sleeps land half a second past the tick boundary so the
    // number of elapsed ticks is deterministic.
    async fn advance(seconds: u64) {
        tokio::time::sleep(Duration::from_secs(seconds) + Duration::from_millis(500)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn ticker_counts_down_while_playing() {
        let sessions = SimuladoSessions::new();
        let store: Arc<dyn ResultStore> = Arc::new(MemoryResultStore::new());

        sessions.start(1, thirty_questions(), store).await;
        advance(10).await;

        let remaining = sessions
            .with_session(1, |s| s.remaining_seconds())
            .await
            .unwrap();
        assert_eq!(remaining, SIMULADO_TIME_BUDGET_SECS - 10);
    }

    #[tokio::test(start_paused = true)]
    async fn expiry_finishes_and_submits_exactly_once() {
        let sessions = SimuladoSessions::new();
        let store = Arc::new(MemoryResultStore::new());

        sessions
            .start(1, thirty_questions(), store.clone())
            .await;
        advance(SIMULADO_TIME_BUDGET_SECS as u64 + 5).await;

        let phase = sessions.with_session(1, |s| s.phase()).await.unwrap();
        assert_eq!(phase, Phase::Finished);
        assert_eq!(store.inserted(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn duplicate_finish_submits_once() {
        let sessions = SimuladoSessions::new();
        let store = Arc::new(MemoryResultStore::new());

        sessions
            .start(1, thirty_questions(), store.clone())
            .await;
        advance(3).await;

        let first = sessions.finish(1, store.clone()).await.unwrap();
        let second = sessions.finish(1, store.clone()).await.unwrap();
        assert_eq!(first.seconds_used, second.seconds_used);

        advance(1).await;
        assert_eq!(store.inserted(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn finish_stops_the_ticker() {
        let sessions = SimuladoSessions::new();
        let store = Arc::new(MemoryResultStore::new());

        sessions
            .start(1, thirty_questions(), store.clone())
            .await;
        advance(5).await;
        sessions.finish(1, store.clone()).await.unwrap();

        advance(60).await;
        let remaining = sessions
            .with_session(1, |s| s.remaining_seconds())
            .await
            .unwrap();
        assert_eq!(remaining, SIMULADO_TIME_BUDGET_SECS - 5);
    }

    #[tokio::test(start_paused = true)]
    async fn abandon_cancels_and_submits_nothing() {
        let sessions = SimuladoSessions::new();
        let store = Arc::new(MemoryResultStore::new());

        sessions
            .start(1, thirty_questions(), store.clone())
            .await;
        advance(5).await;

        assert!(sessions.abandon(1).await);
        assert!(sessions.with_session(1, |_| ()).await.is_none());

        advance(SIMULADO_TIME_BUDGET_SECS as u64).await;
        assert_eq!(store.inserted(), 0);
        assert!(!sessions.abandon(1).await);
    }

    #[tokio::test(start_paused = true)]
    async fn restart_replaces_the_run_and_its_ticker() {
        let sessions = SimuladoSessions::new();
        let store = Arc::new(MemoryResultStore::new());

        sessions
            .start(1, thirty_questions(), store.clone())
            .await;
        advance(30).await;

        sessions
            .start(1, thirty_questions(), store.clone())
            .await;
        advance(10).await;

        // One ticker for the new run: a surviving old ticker would have
        // drained the clock twice as fast.
        let remaining = sessions
            .with_session(1, |s| s.remaining_seconds())
            .await
            .unwrap();
        assert_eq!(remaining, SIMULADO_TIME_BUDGET_SECS - 10);

        // The discarded run never reaches the store.
        advance(1).await;
        assert_eq!(store.inserted(), 0);
    }
}
