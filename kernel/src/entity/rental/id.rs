use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct RentalId(Uuid);

impl RentalId {
    pub fn new(id: impl Into<Uuid>) -> Self {
        Self(id.into())
    }
}

impl AsRef<Uuid> for RentalId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl From<RentalId> for Uuid {
    fn from(value: RentalId) -> Self {
        value.0
    }
}
