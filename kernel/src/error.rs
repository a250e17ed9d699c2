use std::fmt::Display;

use error_stack::Context;

use crate::entity::CardStatus;

/// Storage-layer faults. Business outcomes of the rental workflow live in
/// [`RentalError`]; nothing in this enum is user-actionable.
#[derive(Debug)]
pub enum KernelError {
    Timeout,
    Integrity,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::Timeout => write!(f, "Process timed out"),
            KernelError::Integrity => write!(f, "Stored data violates an invariant"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}

/// Outcome contexts of `rent_book`/`return_book`. Every variant except
/// `Storage` is a business rejection reported to the caller as-is, never
/// retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RentalError {
    BookNotFound,
    BookUnavailable,
    IneligibleBorrower(CardStatus),
    RentalNotFound,
    AlreadyReturned,
    InvalidDueDate,
    Storage,
}

impl Display for RentalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RentalError::BookNotFound => write!(f, "Book not found"),
            RentalError::BookUnavailable => write!(f, "Book is not available for rent"),
            RentalError::IneligibleBorrower(status) => {
                write!(f, "Student's ID card is not active (status: {status})")
            }
            RentalError::RentalNotFound => write!(f, "Rental not found"),
            RentalError::AlreadyReturned => write!(f, "This book has already been returned"),
            RentalError::InvalidDueDate => write!(f, "Due date must lie in the future"),
            RentalError::Storage => write!(f, "Storage failure in rental workflow"),
        }
    }
}

impl Context for RentalError {}
