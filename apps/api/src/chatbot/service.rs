//! Chatbot service — informational replies about candidates and manifestos.

use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::prompt;

/// Asks the model for candidate/manifesto information relevant to the
/// user's message. The reply is the model's text, verbatim.
pub async fn candidate_info(
    llm: &dyn TextGenerator,
    corpus_text: &str,
    user_message: &str,
) -> Result<String, AppError> {
    let prompt = prompt::candidate_info_prompt(corpus_text, user_message);
    llm.generate(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("candidate info request failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;

    struct EchoPromptModel;

    #[async_trait]
    impl TextGenerator for EchoPromptModel {
        async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
            Ok(prompt.to_string())
        }
    }

    #[tokio::test]
    async fn test_candidate_info_sends_corpus_and_delimited_message() {
        let sent = candidate_info(&EchoPromptModel, "q1\nq2", "Who is Candidate X?")
            .await
            .unwrap();
        assert!(sent.starts_with("q1\nq2\n"));
        assert!(sent.contains("<<<\nWho is Candidate X?\n>>>"));
        assert!(sent.ends_with(prompt::CANDIDATE_INFO_INSTRUCTION));
    }

    struct RefusingModel;

    #[async_trait]
    impl TextGenerator for RefusingModel {
        async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
            Err(LlmError::Api {
                status: 503,
                message: "overloaded".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_model_failure_surfaces_as_llm_error() {
        let result = candidate_info(&RefusingModel, "q1", "Who is Candidate X?").await;
        assert!(matches!(result, Err(AppError::Llm(_))));
    }
}
