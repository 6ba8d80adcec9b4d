use chrono::{DateTime, Utc};

use crate::{AnswerPayload, ExtractedContent, ModelCatalog, NoticeToken, RequestToken};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User edited the URL input box.
    UrlInputChanged(String),
    /// User asked to add the typed URL to the candidate list.
    AddUrlClicked,
    /// User removed the candidate at this position.
    RemoveUrlClicked(usize),
    /// User submitted the candidate list for extraction.
    ExtractClicked,
    ExtractSucceeded {
        token: RequestToken,
        content: ExtractedContent,
    },
    ExtractFailed {
        token: RequestToken,
        message: String,
    },
    ModelsLoaded {
        token: RequestToken,
        catalog: ModelCatalog,
    },
    ModelsFailed {
        token: RequestToken,
    },
    /// User edited the question box.
    QuestionChanged(String),
    /// User picked a model.
    ModelSelected(String),
    /// User submitted the question.
    AskClicked,
    AnswerSucceeded {
        token: RequestToken,
        answer: AnswerPayload,
        received_at: DateTime<Utc>,
    },
    AnswerFailed {
        token: RequestToken,
        message: String,
    },
    /// User clicked a row in the question history.
    HistorySelected(usize),
    /// A scheduled notice clear fired.
    NoticeExpired(NoticeToken),
    /// Fallback for placeholder wiring.
    NoOp,
}
