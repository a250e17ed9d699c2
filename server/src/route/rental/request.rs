use serde::Deserialize;
use time::OffsetDateTime;
use uuid::Uuid;

use application::transfer::RentBookDto;

#[derive(Debug, Deserialize)]
pub struct RentBookRequest {
    book_id: Uuid,
    student_id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    due_date: OffsetDateTime,
}

impl From<RentBookRequest> for RentBookDto {
    fn from(value: RentBookRequest) -> Self {
        Self {
            book_id: value.book_id,
            student_id: value.student_id,
            due_date: value.due_date,
        }
    }
}
