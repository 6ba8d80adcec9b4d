use crate::notice::NoticeSlot;
use crate::token::TokenSource;
use crate::view_model::{self, AppViewModel};
use crate::{Effect, HistoryStore, QueryController, RequestToken, SubmissionController, NOTICE_TTL};

/// Coarse page state. Loading and notices are orthogonal to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageStage {
    #[default]
    Empty,
    ContentReady,
    Answered,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub(crate) submission: SubmissionController,
    pub(crate) query: QueryController,
    pub(crate) history: HistoryStore,
    pub(crate) notice: NoticeSlot,
    tokens: TokenSource,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submission(&self) -> &SubmissionController {
        &self.submission
    }

    pub fn query(&self) -> &QueryController {
        &self.query
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.message()
    }

    pub fn stage(&self) -> PageStage {
        if !self.submission.content_loaded() {
            PageStage::Empty
        } else if self.query.answer().is_some() {
            PageStage::Answered
        } else {
            PageStage::ContentReady
        }
    }

    /// True while an extract or answer call is outstanding.
    pub fn is_loading(&self) -> bool {
        self.submission.is_extracting() || self.query.is_answering()
    }

    pub fn view(&self) -> AppViewModel {
        view_model::build(self)
    }

    /// Returns whether anything changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn next_token(&mut self) -> RequestToken {
        self.tokens.next()
    }

    /// Shows `message` and schedules its removal.
    pub(crate) fn raise_notice(&mut self, message: impl Into<String>) -> Effect {
        let token = self.notice.raise(message);
        self.mark_dirty();
        Effect::ClearNoticeAfter {
            token,
            delay: NOTICE_TTL,
        }
    }

    pub(crate) fn clear_notice(&mut self) {
        if self.notice.clear() {
            self.mark_dirty();
        }
    }
}
