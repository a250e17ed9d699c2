mod id;
mod number;
mod status;

pub use self::{id::*, number::*, status::*};
use crate::entity::StudentId;
use serde::{Deserialize, Serialize};

/// Identity credential owned by exactly one student, created once at
/// onboarding. Only its status feeds the eligibility gate.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct IdCard {
    id: IdCardId,
    number: CardNumber,
    status: CardStatus,
    student_id: StudentId,
}

impl IdCard {
    pub fn new(id: IdCardId, number: CardNumber, status: CardStatus, student_id: StudentId) -> Self {
        Self {
            id,
            number,
            status,
            student_id,
        }
    }

    pub fn id(&self) -> &IdCardId {
        &self.id
    }

    pub fn number(&self) -> &CardNumber {
        &self.number
    }

    pub fn status(&self) -> CardStatus {
        self.status
    }

    pub fn student_id(&self) -> &StudentId {
        &self.student_id
    }
}
