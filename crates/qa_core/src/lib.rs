//! QA core: pure page state machine, controllers and view-model helpers.
mod catalog;
mod effect;
mod history;
mod msg;
mod notice;
mod query;
mod state;
mod submission;
mod token;
mod update;
mod view_model;

pub use catalog::{CatalogStatus, ModelCatalog, ModelDescriptor, DEFAULT_MODEL_KEY};
pub use effect::Effect;
pub use history::{HistoryEntry, HistoryStore, HISTORY_LIMIT};
pub use msg::Msg;
pub use notice::{Notice, NoticeToken, NOTICE_TTL};
pub use query::{AnswerPayload, AnswerRecord, AnswerRequest, QueryController, QueryError};
pub use state::{AppState, PageStage};
pub use submission::{
    CandidateError, ExtractedContent, ExtractionResult, SubmissionController, SubmitError,
};
pub use token::RequestToken;
pub use update::update;
pub use view_model::{
    confidence_percent, AnswerView, AppViewModel, ConfidenceTier, ContentView, HistoryRowView,
    ModelOptionView, QuestionStepView, HISTORY_QUESTION_MAX_CHARS,
};
