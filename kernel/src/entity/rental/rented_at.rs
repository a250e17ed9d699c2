use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Set at creation, immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RentedAt(OffsetDateTime);

impl RentedAt {
    pub fn new(time: impl Into<OffsetDateTime>) -> Self {
        Self(time.into())
    }
}

impl AsRef<OffsetDateTime> for RentedAt {
    fn as_ref(&self) -> &OffsetDateTime {
        &self.0
    }
}

impl From<RentedAt> for OffsetDateTime {
    fn from(value: RentedAt) -> Self {
        value.0
    }
}
