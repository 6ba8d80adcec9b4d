use std::time::Duration;

/// How long a transient notice stays visible.
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoticeToken(pub u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub token: NoticeToken,
}

/// Holds at most one transient message. Every raise gets a fresh token, so a
/// scheduled clear for an older message can never remove a newer one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct NoticeSlot {
    current: Option<Notice>,
    issued: u64,
}

impl NoticeSlot {
    pub(crate) fn raise(&mut self, message: impl Into<String>) -> NoticeToken {
        self.issued += 1;
        let token = NoticeToken(self.issued);
        self.current = Some(Notice {
            message: message.into(),
            token,
        });
        token
    }

    /// Clears the notice if `token` still names it. Returns whether anything changed.
    pub(crate) fn expire(&mut self, token: NoticeToken) -> bool {
        match &self.current {
            Some(notice) if notice.token == token => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn clear(&mut self) -> bool {
        self.current.take().is_some()
    }

    pub(crate) fn message(&self) -> Option<&str> {
        self.current.as_ref().map(|notice| notice.message.as_str())
    }
}
