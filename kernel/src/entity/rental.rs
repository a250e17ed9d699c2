mod due_date;
mod id;
mod rented_at;
mod returned_at;

pub use self::{due_date::*, id::*, rented_at::*, returned_at::*};
use crate::entity::{BookId, StudentId};
use serde::{Deserialize, Serialize};

/// One book lent to one student. Open while `returned_at` is `None`; `Closed`
/// is terminal. References are identifier-based, resolved through lookups.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Rental {
    id: RentalId,
    rented_at: RentedAt,
    due_date: DueDate,
    returned_at: Option<ReturnedAt>,
    book_id: BookId,
    student_id: StudentId,
}

impl Rental {
    pub fn new(
        id: RentalId,
        rented_at: RentedAt,
        due_date: DueDate,
        returned_at: Option<ReturnedAt>,
        book_id: BookId,
        student_id: StudentId,
    ) -> Self {
        Self {
            id,
            rented_at,
            due_date,
            returned_at,
            book_id,
            student_id,
        }
    }

    pub fn id(&self) -> &RentalId {
        &self.id
    }

    pub fn rented_at(&self) -> &RentedAt {
        &self.rented_at
    }

    pub fn due_date(&self) -> &DueDate {
        &self.due_date
    }

    pub fn returned_at(&self) -> Option<&ReturnedAt> {
        self.returned_at.as_ref()
    }

    pub fn book_id(&self) -> &BookId {
        &self.book_id
    }

    pub fn student_id(&self) -> &StudentId {
        &self.student_id
    }

    pub fn is_returned(&self) -> bool {
        self.returned_at.is_some()
    }

    /// Open -> Closed transition. `None` if the rental is already closed;
    /// `returned_at` is never overwritten.
    pub fn close(self, returned_at: ReturnedAt) -> Option<Self> {
        if self.returned_at.is_some() {
            return None;
        }
        Some(Self {
            returned_at: Some(returned_at),
            ..self
        })
    }
}

#[cfg(test)]
mod test {
    use time::OffsetDateTime;
    use uuid::Uuid;

    use crate::entity::{BookId, DueDate, Rental, RentalId, RentedAt, ReturnedAt, StudentId};

    fn open_rental() -> Rental {
        let now = OffsetDateTime::now_utc();
        Rental::new(
            RentalId::new(Uuid::new_v4()),
            RentedAt::new(now),
            DueDate::new(now + time::Duration::days(14)),
            None,
            BookId::new(Uuid::new_v4()),
            StudentId::new(Uuid::new_v4()),
        )
    }

    #[test]
    fn close_sets_returned_at_once() {
        let rental = open_rental();
        assert!(!rental.is_returned());

        let closed = rental.close(ReturnedAt::new(OffsetDateTime::now_utc())).unwrap();
        assert!(closed.is_returned());

        // Closed is terminal
        assert!(closed.close(ReturnedAt::new(OffsetDateTime::now_utc())).is_none());
    }
}
