use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::catalog::{CatalogStatus, ModelCatalog, DEFAULT_MODEL_KEY};
use crate::{HistoryEntry, RequestToken};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Please enter a question")]
    EmptyQuestion,
}

/// What the backend returned for one question.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerPayload {
    pub answer: String,
    pub confidence: f64,
    pub context: Option<String>,
    pub model_used: String,
}

/// The answer currently on display. Never edited after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerRecord {
    pub question: String,
    pub answer: String,
    /// Always within `0.0..=1.0`.
    pub confidence: f64,
    pub context: Option<String>,
    pub model_key: String,
    pub answered_at: DateTime<Utc>,
}

/// Arguments for one answer call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRequest {
    pub question: String,
    pub urls: Vec<String>,
    pub model_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct InFlightAnswer {
    token: RequestToken,
    question: String,
}

/// Question step: pending question, model choice, catalog and current answer.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryController {
    question: String,
    selected_model: String,
    catalog: ModelCatalog,
    catalog_status: CatalogStatus,
    answer: Option<AnswerRecord>,
    in_flight: Option<InFlightAnswer>,
}

impl Default for QueryController {
    fn default() -> Self {
        Self {
            question: String::new(),
            selected_model: DEFAULT_MODEL_KEY.to_string(),
            catalog: ModelCatalog::default(),
            catalog_status: CatalogStatus::NotRequested,
            answer: None,
            in_flight: None,
        }
    }
}

impl QueryController {
    pub fn question(&self) -> &str {
        &self.question
    }

    /// Replaces the pending question verbatim.
    pub fn set_question(&mut self, text: impl Into<String>) {
        self.question = text.into();
    }

    pub fn selected_model(&self) -> &str {
        &self.selected_model
    }

    /// Availability is left to the view; any key is accepted here.
    pub fn select_model(&mut self, key: impl Into<String>) {
        self.selected_model = key.into();
    }

    pub fn catalog(&self) -> &ModelCatalog {
        &self.catalog
    }

    pub fn catalog_status(&self) -> CatalogStatus {
        self.catalog_status
    }

    pub fn answer(&self) -> Option<&AnswerRecord> {
        self.answer.as_ref()
    }

    pub fn is_answering(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Supersedes any catalog request in flight. The current catalog stays visible.
    pub fn begin_catalog_fetch(&mut self, token: RequestToken) {
        self.catalog_status = CatalogStatus::Loading(token);
    }

    /// Installs a fetched catalog and selects its default.
    pub fn apply_catalog(&mut self, token: RequestToken, catalog: ModelCatalog) -> bool {
        if self.catalog_status != CatalogStatus::Loading(token) {
            return false;
        }
        self.selected_model = catalog.default_key().to_string();
        self.catalog = catalog;
        self.catalog_status = CatalogStatus::Ready;
        true
    }

    /// Installs the single-entry fallback catalog and selects it.
    pub fn apply_catalog_fallback(&mut self, token: RequestToken) -> bool {
        if self.catalog_status != CatalogStatus::Loading(token) {
            return false;
        }
        self.catalog = ModelCatalog::fallback();
        self.selected_model = self.catalog.default_key().to_string();
        self.catalog_status = CatalogStatus::Fallback;
        true
    }

    /// Starts an answer call scoped to `urls`.
    pub fn begin_answer(
        &mut self,
        token: RequestToken,
        urls: &[String],
    ) -> Result<AnswerRequest, QueryError> {
        let question = self.question.trim();
        if question.is_empty() {
            return Err(QueryError::EmptyQuestion);
        }
        let question = question.to_owned();
        self.in_flight = Some(InFlightAnswer {
            token,
            question: question.clone(),
        });
        Ok(AnswerRequest {
            question,
            urls: urls.to_vec(),
            model_key: self.selected_model.clone(),
        })
    }

    /// Publishes the answer for `token` and returns the matching history entry.
    ///
    /// The record carries the model the server reports, not the one requested.
    pub fn complete_answer(
        &mut self,
        token: RequestToken,
        payload: AnswerPayload,
        received_at: DateTime<Utc>,
    ) -> Option<HistoryEntry> {
        let in_flight = self.take_in_flight(token)?;
        let entry = HistoryEntry {
            question: in_flight.question.clone(),
            model_key: payload.model_used.clone(),
            asked_at: received_at,
        };
        self.answer = Some(AnswerRecord {
            question: in_flight.question,
            answer: payload.answer,
            confidence: clamp_confidence(payload.confidence),
            context: payload.context.filter(|context| !context.trim().is_empty()),
            model_key: payload.model_used,
            answered_at: received_at,
        });
        Some(entry)
    }

    pub fn fail_answer(&mut self, token: RequestToken) -> bool {
        self.take_in_flight(token).is_some()
    }

    /// Drops the current answer and forgets any answer call in flight.
    pub fn reset_answer(&mut self) {
        self.answer = None;
        self.in_flight = None;
    }

    fn take_in_flight(&mut self, token: RequestToken) -> Option<InFlightAnswer> {
        match &self.in_flight {
            Some(in_flight) if in_flight.token == token => self.in_flight.take(),
            _ => None,
        }
    }
}

fn clamp_confidence(confidence: f64) -> f64 {
    if confidence.is_nan() {
        0.0
    } else {
        confidence.clamp(0.0, 1.0)
    }
}
