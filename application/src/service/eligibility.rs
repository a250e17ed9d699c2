use error_stack::{Report, ResultExt};

use kernel::interface::database::Transaction;
use kernel::interface::query::{DependOnIdCardQuery, IdCardQuery};
use kernel::prelude::entity::{CardStatus, StudentId};
use kernel::RentalError;

/// Verdict of the eligibility gate. Ineligibility carries the offending card
/// status so the caller can echo it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    Eligible,
    Ineligible(CardStatus),
}

/// Read-only gate over the student's identity credential. A missing student
/// or a missing card is a data problem, not a business rejection, and
/// surfaces as `RentalError::Storage`.
#[async_trait::async_trait]
pub trait EligibilityGate<Connection: Transaction + Send>:
    'static + Sync + Send + DependOnIdCardQuery<Connection>
{
    async fn check_eligibility(
        &self,
        con: &mut Connection,
        student_id: &StudentId,
    ) -> error_stack::Result<Eligibility, RentalError> {
        let card = self
            .id_card_query()
            .find_by_student_id(con, student_id)
            .await
            .change_context(RentalError::Storage)?
            .ok_or_else(|| {
                Report::new(RentalError::Storage).attach_printable(format!(
                    "No student or ID card found for student {}",
                    student_id.as_ref()
                ))
            })?;

        Ok(match card.status() {
            CardStatus::Active => Eligibility::Eligible,
            status => Eligibility::Ineligible(status),
        })
    }
}

impl<Connection: Transaction + Send, T> EligibilityGate<Connection> for T where
    T: DependOnIdCardQuery<Connection>
{
}
