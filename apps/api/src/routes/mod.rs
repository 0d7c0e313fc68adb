pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::chatbot;
use crate::corpus;
use crate::forecast;
use crate::session;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Navigation (sessions)
        .route(
            "/api/v1/sessions",
            post(session::handlers::handle_create_session),
        )
        .route(
            "/api/v1/sessions/:id",
            get(session::handlers::handle_get_session),
        )
        .route(
            "/api/v1/sessions/:id/navigate",
            post(session::handlers::handle_navigate),
        )
        // Corpus inspection
        .route("/api/v1/corpus", get(corpus::handlers::handle_get_corpus))
        // Prediction page
        .route("/api/v1/forecast", post(forecast::handlers::handle_forecast))
        .route(
            "/api/v1/forecast/ask",
            post(forecast::handlers::handle_ask_agent),
        )
        // Chatbot page
        .route(
            "/api/v1/chatbot/ask",
            post(chatbot::handlers::handle_ask_chatbot),
        )
        .with_state(state)
}
