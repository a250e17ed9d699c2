use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Caller-supplied, immutable. The workflow rejects past due dates before
/// touching storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DueDate(OffsetDateTime);

impl DueDate {
    pub fn new(time: impl Into<OffsetDateTime>) -> Self {
        Self(time.into())
    }

    pub fn is_past(&self, now: OffsetDateTime) -> bool {
        self.0 < now
    }
}

impl AsRef<OffsetDateTime> for DueDate {
    fn as_ref(&self) -> &OffsetDateTime {
        &self.0
    }
}

impl From<DueDate> for OffsetDateTime {
    fn from(value: DueDate) -> Self {
        value.0
    }
}
