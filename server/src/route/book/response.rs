use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

use application::transfer::BookDto;

#[derive(Debug, Serialize)]
pub struct BookResponse {
    id: Uuid,
    author: String,
    title: String,
    isbn: String,
    #[serde(with = "time::serde::rfc3339")]
    created_at: OffsetDateTime,
    stock: Option<i32>,
}

impl From<BookDto> for BookResponse {
    fn from(value: BookDto) -> Self {
        Self {
            id: value.id,
            author: value.author,
            title: value.title,
            isbn: value.isbn,
            created_at: value.created_at,
            stock: value.stock,
        }
    }
}

impl IntoResponse for BookResponse {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}
