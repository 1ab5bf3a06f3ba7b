use std::sync::Arc;

use crate::bank::QuestionBank;
use crate::config::Config;
use crate::sessions::SimuladoSessions;
use crate::store::ResultStore;
use axum::extract::FromRef;

#[derive(Clone)]
pub struct AppState {
    pub bank: Arc<QuestionBank>,
    pub sessions: SimuladoSessions,
    pub store: Arc<dyn ResultStore>,
    pub config: Config,
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
