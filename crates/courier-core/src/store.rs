use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// A post-ready message payload.
///
/// Formatting (title, link) happens once at load time; everything
/// downstream treats the payload as opaque text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message(String);

impl Message {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Message {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Message {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Ordered, immutable, non-empty collection of postable messages.
///
/// Construction is the load-time gate: an empty load is rejected here, so
/// the picker's non-empty precondition holds for the lifetime of the
/// process. Clones share the underlying slice.
#[derive(Debug, Clone)]
pub struct MessageStore {
    messages: Arc<[Message]>,
}

impl MessageStore {
    pub fn new(messages: Vec<Message>) -> crate::error::Result<Self> {
        if messages.is_empty() {
            return Err(crate::error::CourierError::Config(
                "message store cannot be empty".to_string(),
            ));
        }
        Ok(Self {
            messages: messages.into(),
        })
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
