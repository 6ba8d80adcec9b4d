use std::fmt;

/// Identifies one outbound request. Only the completion that carries the
/// latest token issued for a controller may mutate that controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(pub u64);

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "req#{}", self.0)
    }
}

/// Monotonic source for request tokens, shared by every controller.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct TokenSource {
    last: u64,
}

impl TokenSource {
    pub(crate) fn next(&mut self) -> RequestToken {
        self.last += 1;
        RequestToken(self.last)
    }
}
