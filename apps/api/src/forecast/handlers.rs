//! Axum route handlers for the forecast API.

use std::path::Path;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::corpus::{self, CorpusIssue};
use crate::errors::AppError;
use crate::forecast::service::{ask_agent, generate_forecast, Forecast};
use crate::prompt;
use crate::state::AppState;

/// Attribution lines shown with every forecast, carried over from the
/// original data sources.
const FORECAST_SOURCES: [&str; 3] = ["www.ihp.lk", "www.wikipedia.org", "www.mawranews.lk"];
const REPLY_SOURCES: [&str; 4] = [
    "www.ihp.lk",
    "www.wikipedia.org",
    "www.mawranews.lk",
    "Party websites",
];

#[derive(Debug, Serialize)]
pub struct ForecastResponse {
    pub forecast: Forecast,
    pub sources: Vec<&'static str>,
    pub corpus_issues: Vec<CorpusIssue>,
}

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub reply: String,
    pub sources: Vec<&'static str>,
    pub corpus_issues: Vec<CorpusIssue>,
}

/// POST /api/v1/forecast
///
/// Loads the corpus, builds the forecast prompt, and returns the parsed
/// percentage breakdown. An empty corpus is unprocessable: there is nothing
/// for the model to analyze, so no call is made.
pub async fn handle_forecast(
    State(state): State<AppState>,
) -> Result<Json<ForecastResponse>, AppError> {
    let corpus = corpus::load(Path::new(&state.config.data_dir));

    if corpus.questions.is_empty() {
        let detail: Vec<String> = corpus.issues.iter().map(|i| i.to_string()).collect();
        return Err(AppError::UnprocessableEntity(format!(
            "no election data available ({})",
            detail.join("; ")
        )));
    }

    let corpus_text = prompt::join_questions(&corpus.questions);
    let forecast = generate_forecast(state.llm.as_ref(), &corpus_text).await?;

    Ok(Json(ForecastResponse {
        forecast,
        sources: FORECAST_SOURCES.to_vec(),
        corpus_issues: corpus.issues,
    }))
}

/// POST /api/v1/forecast/ask
///
/// Free-form question about the prediction. Proceeds even when the corpus is
/// reduced or empty — the loader's issues ride along in the response.
pub async fn handle_ask_agent(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>, AppError> {
    if request.message.trim().is_empty() {
        return Err(AppError::Validation(
            "message cannot be empty".to_string(),
        ));
    }

    let corpus = corpus::load(Path::new(&state.config.data_dir));
    let corpus_text = prompt::join_questions(&corpus.questions);
    let reply = ask_agent(state.llm.as_ref(), &corpus_text, &request.message).await?;

    Ok(Json(AskResponse {
        reply,
        sources: REPLY_SOURCES.to_vec(),
        corpus_issues: corpus.issues,
    }))
}
