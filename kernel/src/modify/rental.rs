use crate::database::Transaction;
use crate::entity::{Rental, RentalId, ReturnedAt};
use crate::KernelError;

/// Result of the atomic close. At most one concurrent `close` on the same
/// rental observes `Closed`; later calls observe `AlreadyClosed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloseOutcome {
    Closed(Rental),
    AlreadyClosed,
    NotFound,
}

#[async_trait::async_trait]
pub trait RentalModifier<Connection: Transaction>: 'static + Sync + Send {
    async fn create(
        &self,
        con: &mut Connection,
        rental: &Rental,
    ) -> error_stack::Result<(), KernelError>;

    /// Set `returned_at` if and only if it is still null, as one conditional
    /// update. The check and the write must not be separable.
    async fn close(
        &self,
        con: &mut Connection,
        rental_id: &RentalId,
        returned_at: &ReturnedAt,
    ) -> error_stack::Result<CloseOutcome, KernelError>;
}

pub trait DependOnRentalModifier<Connection: Transaction>: 'static + Sync + Send {
    type RentalModifier: RentalModifier<Connection>;
    fn rental_modifier(&self) -> &Self::RentalModifier;
}
