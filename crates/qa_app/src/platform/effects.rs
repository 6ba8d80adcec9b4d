use std::sync::Arc;

use chrono::Utc;
use iced::Task;
use qa_client::{AnswerResponse, ExtractResponse, ModelsResponse, QaBackend};
use qa_core::{AnswerPayload, Effect, ExtractedContent, ModelCatalog, ModelDescriptor, Msg};
use qa_logging::{qa_debug, qa_info, qa_warn};

/// Executes core effects against the backend and feeds completions back as messages.
#[derive(Clone)]
pub struct EffectRunner {
    backend: Arc<dyn QaBackend>,
}

impl EffectRunner {
    pub fn new(backend: Arc<dyn QaBackend>) -> Self {
        Self { backend }
    }

    pub fn run(&self, effects: Vec<Effect>) -> Task<Msg> {
        Task::batch(effects.into_iter().map(|effect| self.spawn(effect)))
    }

    fn spawn(&self, effect: Effect) -> Task<Msg> {
        Task::future(execute(self.backend.clone(), effect))
    }
}

/// Performs one effect and returns the completion message for it.
async fn execute(backend: Arc<dyn QaBackend>, effect: Effect) -> Msg {
    match effect {
        Effect::Extract { token, urls } => {
            qa_info!("Extract {} url_count={}", token, urls.len());
            match backend.extract(&urls).await {
                Ok(response) => Msg::ExtractSucceeded {
                    token,
                    content: map_extracted(response),
                },
                Err(err) => Msg::ExtractFailed {
                    token,
                    message: err.user_message(),
                },
            }
        }
        Effect::FetchModels { token } => {
            qa_info!("FetchModels {}", token);
            match backend.list_models().await {
                Ok(response) => Msg::ModelsLoaded {
                    token,
                    catalog: map_catalog(response),
                },
                Err(err) => {
                    qa_warn!("Model catalog unavailable, using fallback: {}", err);
                    Msg::ModelsFailed { token }
                }
            }
        }
        Effect::Answer {
            token,
            question,
            urls,
            model_key,
        } => {
            qa_info!(
                "Answer {} model={} url_count={} question_len={}",
                token,
                model_key,
                urls.len(),
                question.len()
            );
            match backend.answer(&question, &urls, &model_key).await {
                Ok(response) => Msg::AnswerSucceeded {
                    token,
                    answer: map_answer(response),
                    received_at: Utc::now(),
                },
                Err(err) => Msg::AnswerFailed {
                    token,
                    message: err.user_message(),
                },
            }
        }
        Effect::ClearNoticeAfter { token, delay } => {
            qa_debug!("Notice {:?} clears in {:?}", token, delay);
            tokio::time::sleep(delay).await;
            Msg::NoticeExpired(token)
        }
    }
}

fn map_extracted(response: ExtractResponse) -> ExtractedContent {
    ExtractedContent {
        content: response.content,
        summary: response.summary.filter(|summary| !summary.trim().is_empty()),
    }
}

fn map_answer(response: AnswerResponse) -> AnswerPayload {
    AnswerPayload {
        answer: response.answer,
        confidence: response.confidence,
        context: response.context,
        model_used: response.model_used,
    }
}

fn map_catalog(response: ModelsResponse) -> ModelCatalog {
    ModelCatalog::new(
        response
            .models
            .into_iter()
            .map(|(key, info)| ModelDescriptor {
                key,
                name: info.name,
                description: info.description,
                available: info.available,
            }),
        response.default,
    )
}
