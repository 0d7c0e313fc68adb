//! Axum route handler exposing the loaded corpus, including per-file issues,
//! so the front end can render the same warnings the loader logs.

use std::path::Path;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::corpus::{self, CorpusIssue};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CorpusResponse {
    pub question_count: usize,
    pub questions: Vec<String>,
    pub issues: Vec<CorpusIssue>,
}

/// GET /api/v1/corpus
///
/// Re-reads the data directory on every call — the corpus is never cached.
pub async fn handle_get_corpus(
    State(state): State<AppState>,
) -> Result<Json<CorpusResponse>, AppError> {
    let corpus = corpus::load(Path::new(&state.config.data_dir));
    Ok(Json(CorpusResponse {
        question_count: corpus.questions.len(),
        questions: corpus.questions,
        issues: corpus.issues,
    }))
}
