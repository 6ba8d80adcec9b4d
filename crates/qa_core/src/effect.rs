use std::time::Duration;

use crate::{NoticeToken, RequestToken};

/// Work the platform must perform on behalf of the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Extract {
        token: RequestToken,
        urls: Vec<String>,
    },
    FetchModels {
        token: RequestToken,
    },
    Answer {
        token: RequestToken,
        question: String,
        urls: Vec<String>,
        model_key: String,
    },
    /// Deliver `Msg::NoticeExpired(token)` after `delay`.
    ClearNoticeAfter { token: NoticeToken, delay: Duration },
}
