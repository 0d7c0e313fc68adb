//! Axum route handler for the chatbot API.

use std::path::Path;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::chatbot::service::candidate_info;
use crate::corpus::{self, CorpusIssue};
use crate::errors::AppError;
use crate::prompt;
use crate::state::AppState;

const REPLY_SOURCES: [&str; 4] = [
    "www.ihp.lk",
    "www.wikipedia.org",
    "www.mawranews.lk",
    "Party websites",
];

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
    pub sources: Vec<&'static str>,
    pub corpus_issues: Vec<CorpusIssue>,
}

/// POST /api/v1/chatbot/ask
///
/// Candidate/manifesto question. A reduced or empty corpus does not block
/// the call — the loader's issues ride along so the caller can surface them.
pub async fn handle_ask_chatbot(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if request.message.trim().is_empty() {
        return Err(AppError::Validation(
            "message cannot be empty".to_string(),
        ));
    }

    let corpus = corpus::load(Path::new(&state.config.data_dir));
    let corpus_text = prompt::join_questions(&corpus.questions);
    let reply = candidate_info(state.llm.as_ref(), &corpus_text, &request.message).await?;

    Ok(Json(ChatResponse {
        reply,
        sources: REPLY_SOURCES.to_vec(),
        corpus_issues: corpus.issues,
    }))
}
