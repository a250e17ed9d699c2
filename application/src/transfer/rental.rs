use kernel::prelude::entity::Rental;
use time::OffsetDateTime;
use uuid::Uuid;

/// The externally visible rental record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RentalDto {
    pub id: Uuid,
    pub rented_at: OffsetDateTime,
    pub due_date: OffsetDateTime,
    pub returned_at: Option<OffsetDateTime>,
    pub book_id: Uuid,
    pub student_id: Uuid,
}

impl From<Rental> for RentalDto {
    fn from(value: Rental) -> Self {
        Self {
            id: *value.id().as_ref(),
            rented_at: *value.rented_at().as_ref(),
            due_date: *value.due_date().as_ref(),
            returned_at: value.returned_at().map(|at| *at.as_ref()),
            book_id: *value.book_id().as_ref(),
            student_id: *value.student_id().as_ref(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RentBookDto {
    pub book_id: Uuid,
    pub student_id: Uuid,
    pub due_date: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct ReturnBookDto {
    pub rental_id: Uuid,
}

#[derive(Debug, Clone)]
pub struct GetRentalDto {
    pub id: Uuid,
}

#[derive(Debug, Clone)]
pub struct GetStudentRentalsDto {
    pub student_id: Uuid,
}
