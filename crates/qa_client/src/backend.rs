use qa_logging::{qa_debug, qa_warn};
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::{
    AnswerRequest, AnswerResponse, ApiError, ApiErrorKind, BuildError, ClientConfig, ErrorBody,
    ExtractRequest, ExtractResponse, ModelsResponse, Operation,
};

/// The three backend calls the page depends on. One attempt per call.
#[async_trait::async_trait]
pub trait QaBackend: Send + Sync {
    async fn extract(&self, urls: &[String]) -> Result<ExtractResponse, ApiError>;

    async fn answer(
        &self,
        question: &str,
        urls: &[String],
        model_key: &str,
    ) -> Result<AnswerResponse, ApiError>;

    async fn list_models(&self) -> Result<ModelsResponse, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestBackend {
    config: ClientConfig,
    client: reqwest::Client,
}

impl ReqwestBackend {
    pub fn new(config: ClientConfig) -> Result<Self, BuildError> {
        let parsed = reqwest::Url::parse(&config.base_url).map_err(|err| {
            BuildError::InvalidBaseUrl {
                url: config.base_url.clone(),
                reason: err.to_string(),
            }
        })?;
        if parsed.cannot_be_a_base() {
            return Err(BuildError::InvalidBaseUrl {
                url: config.base_url.clone(),
                reason: "not a hierarchical url".to_string(),
            });
        }

        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn post_json<B: Serialize>(
        &self,
        operation: Operation,
        path: &str,
        body: &B,
    ) -> Result<reqwest::RequestBuilder, ApiError> {
        let payload = serde_json::to_vec(body)
            .map_err(|err| ApiError::new(operation, ApiErrorKind::Encode, err.to_string()))?;
        let url = self.config.endpoint(path);
        qa_debug!("POST {} ({} bytes)", url, payload.len());
        Ok(self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(payload))
    }

    async fn send<T: DeserializeOwned>(
        &self,
        operation: Operation,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let result = self.send_inner(operation, request).await;
        if let Err(err) = &result {
            qa_warn!("Backend call failed: {}", err);
        }
        result
    }

    async fn send_inner<T: DeserializeOwned>(
        &self,
        operation: Operation,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|err| map_reqwest_error(operation, err))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|err| map_reqwest_error(operation, err))?;

        if !status.is_success() {
            let server_message = serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .and_then(|body| body.error);
            return Err(ApiError::new(
                operation,
                ApiErrorKind::HttpStatus(status.as_u16()),
                status.to_string(),
            )
            .with_server_message(server_message));
        }

        serde_json::from_slice(&body)
            .map_err(|err| ApiError::new(operation, ApiErrorKind::Decode, err.to_string()))
    }
}

#[async_trait::async_trait]
impl QaBackend for ReqwestBackend {
    async fn extract(&self, urls: &[String]) -> Result<ExtractResponse, ApiError> {
        let request = self.post_json(Operation::Extract, "extract", &ExtractRequest { urls })?;
        self.send(Operation::Extract, request).await
    }

    async fn answer(
        &self,
        question: &str,
        urls: &[String],
        model_key: &str,
    ) -> Result<AnswerResponse, ApiError> {
        let body = AnswerRequest {
            question,
            urls,
            model_type: model_key,
        };
        let request = self.post_json(Operation::Answer, "answer", &body)?;
        self.send(Operation::Answer, request).await
    }

    async fn list_models(&self) -> Result<ModelsResponse, ApiError> {
        let url = self.config.endpoint("models");
        qa_debug!("GET {}", url);
        let request = self.client.get(url);
        self.send(Operation::ListModels, request).await
    }
}

fn map_reqwest_error(operation: Operation, err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(operation, ApiErrorKind::Timeout, err.to_string());
    }
    ApiError::new(operation, ApiErrorKind::Network, err.to_string())
}
