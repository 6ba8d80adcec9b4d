use std::fmt;

use thiserror::Error;

/// Backend operation a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Extract,
    Answer,
    ListModels,
}

impl Operation {
    /// Message shown when the backend did not supply one.
    pub fn fallback_message(self) -> &'static str {
        match self {
            Operation::Extract => "Failed to extract content from URLs",
            Operation::Answer => "Failed to get answer",
            Operation::ListModels => "Failed to load models",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Extract => write!(f, "extract"),
            Operation::Answer => write!(f, "answer"),
            Operation::ListModels => write!(f, "list models"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorKind {
    Timeout,
    Network,
    HttpStatus(u16),
    Encode,
    Decode,
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiErrorKind::Timeout => write!(f, "timeout"),
            ApiErrorKind::Network => write!(f, "network error"),
            ApiErrorKind::HttpStatus(code) => write!(f, "http status {code}"),
            ApiErrorKind::Encode => write!(f, "request encoding failed"),
            ApiErrorKind::Decode => write!(f, "response decoding failed"),
        }
    }
}

/// Uniform failure shape for every backend call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{operation} failed ({kind}): {detail}")]
pub struct ApiError {
    pub operation: Operation,
    pub kind: ApiErrorKind,
    /// The `error` field of the response body, when the server sent one.
    pub server_message: Option<String>,
    pub detail: String,
}

impl ApiError {
    pub fn new(operation: Operation, kind: ApiErrorKind, detail: impl Into<String>) -> Self {
        Self {
            operation,
            kind,
            server_message: None,
            detail: detail.into(),
        }
    }

    pub fn with_server_message(mut self, message: Option<String>) -> Self {
        self.server_message = message.filter(|message| !message.trim().is_empty());
        self
    }

    /// Text for the user: the server's message if any, else the operation's fallback.
    pub fn user_message(&self) -> String {
        self.server_message
            .clone()
            .unwrap_or_else(|| self.operation.fallback_message().to_string())
    }
}

/// Failure to construct a backend from its configuration.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("invalid base url {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("http client setup failed: {0}")]
    Client(#[from] reqwest::Error),
}
