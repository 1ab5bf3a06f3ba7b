// src/routes.rs

use axum::{
    Router, http::Method, middleware,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{handlers::simulado, state::AppState, utils::jwt::auth_middleware};

/// Assembles the main application router.
///
/// * All simulado routes require a valid bearer token (the auth middleware
///   injects the identity provider's claims).
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (bank, session registry, result store).
pub fn create_router(state: AppState) -> Router {
    let origins = [
        "http://localhost:3000".parse().unwrap(),
        "http://127.0.0.1:3000".parse().unwrap(),
    ];

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
        ]);

    let simulado_routes = Router::new()
        .route("/start", post(simulado::start))
        .route("/", get(simulado::get_state).delete(simulado::abandon))
        .route("/answer", post(simulado::select_answer))
        .route("/confirm", post(simulado::confirm_answer))
        .route("/next", post(simulado::next_question))
        .route("/previous", post(simulado::previous_question))
        .route("/finish", post(simulado::finish))
        .route("/history", get(simulado::history))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .nest("/api/simulado", simulado_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
