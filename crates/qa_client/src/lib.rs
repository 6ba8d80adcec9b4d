//! QA client: HTTP adapter for the extraction and question-answering backend.
mod backend;
mod config;
mod error;
mod types;

pub use backend::{QaBackend, ReqwestBackend};
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::{ApiError, ApiErrorKind, BuildError, Operation};
pub use types::{
    AnswerRequest, AnswerResponse, ErrorBody, ExtractRequest, ExtractResponse, ModelInfo,
    ModelsResponse,
};
