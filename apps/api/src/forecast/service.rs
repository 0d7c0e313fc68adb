//! Forecast service — wraps the model call for the prediction flows and
//! validates the reply's shape before anything reaches a caller.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::llm_client::{strip_code_fences, TextGenerator};
use crate::prompt;

/// Parsed forecast: candidate names and their predicted vote shares,
/// corresponding index-wise. Construction goes through `parse_forecast`,
/// which enforces the invariant the wire format only implies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub candidates: Vec<String>,
    pub percentages: Vec<f64>,
}

/// Asks the model for a percentage breakdown over the loaded corpus.
/// Transport failures map to `AppError::Llm`; shape problems in the reply
/// map to `AppError::MalformedUpstream`.
pub async fn generate_forecast(
    llm: &dyn TextGenerator,
    corpus_text: &str,
) -> Result<Forecast, AppError> {
    let prompt = prompt::forecast_prompt(corpus_text);
    let raw = llm
        .generate(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("forecast request failed: {e}")))?;
    parse_forecast(&raw)
}

/// Parses and validates the model's forecast reply.
pub fn parse_forecast(raw: &str) -> Result<Forecast, AppError> {
    let text = strip_code_fences(raw);
    let forecast: Forecast = serde_json::from_str(text).map_err(|e| {
        AppError::MalformedUpstream(format!("forecast reply is not the expected JSON: {e}"))
    })?;

    if forecast.candidates.is_empty() || forecast.percentages.is_empty() {
        return Err(AppError::MalformedUpstream(
            "forecast reply has empty candidates or percentages".to_string(),
        ));
    }
    if forecast.candidates.len() != forecast.percentages.len() {
        return Err(AppError::MalformedUpstream(format!(
            "forecast reply has {} candidates but {} percentages",
            forecast.candidates.len(),
            forecast.percentages.len()
        )));
    }

    Ok(forecast)
}

/// Free-form question against the prediction corpus. The reply is the
/// model's text, verbatim.
pub async fn ask_agent(
    llm: &dyn TextGenerator,
    corpus_text: &str,
    user_message: &str,
) -> Result<String, AppError> {
    let prompt = prompt::agent_reply_prompt(corpus_text, user_message);
    llm.generate(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("agent reply request failed: {e}")))
}
