use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

use application::transfer::RentalDto;

#[derive(Debug, Serialize)]
pub struct RentalResponse {
    id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    rented_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    due_date: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    returned_at: Option<OffsetDateTime>,
    book_id: Uuid,
    student_id: Uuid,
}

impl From<RentalDto> for RentalResponse {
    fn from(value: RentalDto) -> Self {
        Self {
            id: value.id,
            rented_at: value.rented_at,
            due_date: value.due_date,
            returned_at: value.returned_at,
            book_id: value.book_id,
            student_id: value.student_id,
        }
    }
}

impl IntoResponse for RentalResponse {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}
