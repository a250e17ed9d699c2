use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use application::transfer::{IdCardDto, StudentDto};
use kernel::prelude::entity::CardStatus;

#[derive(Debug, Serialize)]
pub struct IdCardResponse {
    id: Uuid,
    card_number: String,
    status: CardStatus,
}

impl From<IdCardDto> for IdCardResponse {
    fn from(value: IdCardDto) -> Self {
        Self {
            id: value.id,
            card_number: value.card_number,
            status: value.status,
        }
    }
}

impl IntoResponse for IdCardResponse {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct StudentResponse {
    id: Uuid,
    first_name: String,
    last_name: String,
    email: String,
    age: i32,
    id_card: IdCardResponse,
}

impl From<StudentDto> for StudentResponse {
    fn from(value: StudentDto) -> Self {
        Self {
            id: value.id,
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
            age: value.age,
            id_card: IdCardResponse::from(value.id_card),
        }
    }
}

impl IntoResponse for StudentResponse {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}
