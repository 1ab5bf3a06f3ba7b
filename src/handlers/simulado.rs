// src/handlers/simulado.rs

use axum::{
    Extension, Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use validator::Validate;

use crate::{
    config::SIMULADO_QUESTION_COUNT,
    error::AppError,
    models::session::{SelectAnswerRequest, SimuladoView, StartParams},
    state::AppState,
    utils::jwt::Claims,
};

fn user_id(claims: &Claims) -> i64 {
    claims.sub.parse::<i64>().unwrap_or(0)
}

fn no_active_simulado() -> AppError {
    AppError::NotFound("No active simulado".to_string())
}

/// Starts a new simulado for the user, discarding any run in progress.
///
/// Draws `?questions=N` questions (default 30; capped at the bank size) and
/// begins the 60-minute countdown.
pub async fn start(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Query(params): Query<StartParams>,
) -> Result<impl IntoResponse, AppError> {
    let requested = params.questions.unwrap_or(SIMULADO_QUESTION_COUNT);
    if requested == 0 {
        return Err(AppError::BadRequest(
            "questions must be at least 1".to_string(),
        ));
    }

    let questions = state.bank.sample(requested);
    tracing::info!(
        "Starting simulado for user {} with {} questions",
        user_id(&claims),
        questions.len()
    );

    let view = state
        .sessions
        .start(user_id(&claims), questions, state.store.clone())
        .await;

    Ok((StatusCode::CREATED, Json(view)))
}

/// Returns the current session view (404 when no simulado is active).
pub async fn get_state(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    let view = state
        .sessions
        .with_session(user_id(&claims), |s| SimuladoView::of(s))
        .await
        .ok_or_else(no_active_simulado)?;

    Ok(Json(view))
}

/// Selects an option for the current question. Selecting on an already
/// confirmed question is ignored, not an error.
pub async fn select_answer(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<SelectAnswerRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let view = state
        .sessions
        .with_session(user_id(&claims), |s| {
            s.select_answer(payload.option_index);
            SimuladoView::of(s)
        })
        .await
        .ok_or_else(no_active_simulado)?;

    Ok(Json(view))
}

/// Locks in the currently selected answer, revealing the correct option.
pub async fn confirm_answer(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    let view = state
        .sessions
        .with_session(user_id(&claims), |s| {
            s.confirm_answer();
            SimuladoView::of(s)
        })
        .await
        .ok_or_else(no_active_simulado)?;

    Ok(Json(view))
}

/// Advances to the next question (no-op on the last one).
pub async fn next_question(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    let view = state
        .sessions
        .with_session(user_id(&claims), |s| {
            s.next();
            SimuladoView::of(s)
        })
        .await
        .ok_or_else(no_active_simulado)?;

    Ok(Json(view))
}

/// Steps back to the previous question (no-op on the first one).
pub async fn previous_question(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    let view = state
        .sessions
        .with_session(user_id(&claims), |s| {
            s.previous();
            SimuladoView::of(s)
        })
        .await
        .ok_or_else(no_active_simulado)?;

    Ok(Json(view))
}

/// Ends the simulado and returns the computed result.
///
/// Idempotent: repeating the call returns the same result and the stored
/// row is written at most once. The response never waits on persistence.
pub async fn finish(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    let result = state
        .sessions
        .finish(user_id(&claims), state.store.clone())
        .await
        .ok_or_else(no_active_simulado)?;

    Ok(Json(result))
}

/// Abandons the simulado mid-flight: the countdown is cancelled and nothing
/// is persisted.
pub async fn abandon(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    if state.sessions.abandon(user_id(&claims)).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(no_active_simulado())
    }
}

/// Lists the user's persisted simulado results, most recent first.
pub async fn history(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    let results = state.store.results_for_user(user_id(&claims)).await?;
    Ok(Json(results))
}
