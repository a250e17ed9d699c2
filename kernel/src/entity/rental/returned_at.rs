use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Set exactly once when the book comes back; never cleared or reset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReturnedAt(OffsetDateTime);

impl ReturnedAt {
    pub fn new(time: impl Into<OffsetDateTime>) -> Self {
        Self(time.into())
    }
}

impl AsRef<OffsetDateTime> for ReturnedAt {
    fn as_ref(&self) -> &OffsetDateTime {
        &self.0
    }
}

impl From<ReturnedAt> for OffsetDateTime {
    fn from(value: ReturnedAt) -> Self {
        value.0
    }
}
