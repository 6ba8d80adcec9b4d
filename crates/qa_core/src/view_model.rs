use chrono::{DateTime, Utc};

use crate::{AppState, PageStage};

/// Questions longer than this are cut in the history list.
pub const HISTORY_QUESTION_MAX_CHARS: usize = 60;

/// Display bucket for a confidence score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
}

impl ConfidenceTier {
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= 0.7 {
            ConfidenceTier::High
        } else if confidence >= 0.4 {
            ConfidenceTier::Medium
        } else {
            ConfidenceTier::Low
        }
    }

    pub fn badge(self) -> &'static str {
        match self {
            ConfidenceTier::High => "success",
            ConfidenceTier::Medium => "warning",
            ConfidenceTier::Low => "danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub stage: PageStage,
    pub loading: bool,
    pub notice: Option<String>,
    pub url_input: String,
    pub candidates: Vec<String>,
    pub can_extract: bool,
    pub content: Option<ContentView>,
    pub question_step: Option<QuestionStepView>,
    pub answer: Option<AnswerView>,
    pub history: Vec<HistoryRowView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentView {
    pub processed_urls: Vec<String>,
    pub summary: Option<String>,
    pub content_chars: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionStepView {
    pub question: String,
    pub can_ask: bool,
    pub models: Vec<ModelOptionView>,
    pub selected_model: String,
    pub selected_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelOptionView {
    pub key: String,
    pub name: String,
    pub available: bool,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnswerView {
    pub question: String,
    pub answer: String,
    pub confidence_percent: u8,
    pub tier: ConfidenceTier,
    pub context: Option<String>,
    pub model_key: String,
    pub model_name: String,
    pub answered_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRowView {
    pub index: usize,
    pub question: String,
    pub model_key: String,
    pub model_name: String,
    pub asked_at: DateTime<Utc>,
}

/// Rounded percentage for a confidence already clamped to `0.0..=1.0`.
pub fn confidence_percent(confidence: f64) -> u8 {
    (confidence.clamp(0.0, 1.0) * 100.0).round() as u8
}

pub(crate) fn build(state: &AppState) -> AppViewModel {
    let submission = state.submission();
    let query = state.query();
    let catalog = query.catalog();
    let stage = state.stage();

    let content = submission
        .extraction()
        .filter(|_| submission.content_loaded())
        .map(|extraction| ContentView {
            processed_urls: extraction.processed_urls.clone(),
            summary: extraction.summary.clone(),
            content_chars: extraction.content.chars().count(),
        });

    let question_step = submission.content_loaded().then(|| QuestionStepView {
        question: query.question().to_string(),
        can_ask: !query.question().trim().is_empty(),
        models: catalog
            .models()
            .map(|model| ModelOptionView {
                key: model.key.clone(),
                name: model.name.clone(),
                available: model.available,
                selected: model.key == query.selected_model(),
            })
            .collect(),
        selected_model: query.selected_model().to_string(),
        selected_description: catalog
            .get(query.selected_model())
            .map(|model| model.description.clone()),
    });

    let answer = query
        .answer()
        .filter(|_| stage == PageStage::Answered)
        .map(|record| AnswerView {
            question: record.question.clone(),
            answer: record.answer.clone(),
            confidence_percent: confidence_percent(record.confidence),
            tier: ConfidenceTier::from_confidence(record.confidence),
            context: record.context.clone(),
            model_key: record.model_key.clone(),
            model_name: catalog.display_name(&record.model_key).to_string(),
            answered_at: record.answered_at,
        });

    let history = state
        .history()
        .entries()
        .enumerate()
        .map(|(index, entry)| HistoryRowView {
            index,
            question: truncate_question(&entry.question, HISTORY_QUESTION_MAX_CHARS),
            model_key: entry.model_key.clone(),
            model_name: catalog.display_name(&entry.model_key).to_string(),
            asked_at: entry.asked_at,
        })
        .collect();

    AppViewModel {
        stage,
        loading: state.is_loading(),
        notice: state.notice().map(ToOwned::to_owned),
        url_input: submission.input().to_string(),
        candidates: submission.candidates().to_vec(),
        can_extract: !submission.candidates().is_empty(),
        content,
        question_step,
        answer,
        history,
    }
}

fn truncate_question(question: &str, max_chars: usize) -> String {
    match question.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &question[..cut]),
        None => question.to_string(),
    }
}
