use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct IdCardId(Uuid);

impl IdCardId {
    pub fn new(id: impl Into<Uuid>) -> Self {
        Self(id.into())
    }
}

impl AsRef<Uuid> for IdCardId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl From<IdCardId> for Uuid {
    fn from(value: IdCardId) -> Self {
        value.0
    }
}
