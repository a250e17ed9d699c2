use serde::Deserialize;
use uuid::Uuid;

use application::transfer::{CreateBookDto, GetAllBookDto, UpdateBookDto};

#[derive(Debug, Deserialize)]
pub struct CreateBookRequest {
    author: String,
    title: String,
    isbn: String,
    stock: Option<i32>,
}

impl From<CreateBookRequest> for CreateBookDto {
    fn from(value: CreateBookRequest) -> Self {
        Self {
            author: value.author,
            title: value.title,
            isbn: value.isbn,
            stock: value.stock,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateBookRequest {
    author: Option<String>,
    title: Option<String>,
    isbn: Option<String>,
    stock: Option<i32>,
}

impl UpdateBookRequest {
    pub fn into_dto(self, id: Uuid) -> UpdateBookDto {
        UpdateBookDto {
            id,
            author: self.author,
            title: self.title,
            isbn: self.isbn,
            stock: self.stock,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct GetAllBookRequest {
    limit: Option<i32>,
    offset: Option<i32>,
}

impl From<GetAllBookRequest> for GetAllBookDto {
    fn from(value: GetAllBookRequest) -> Self {
        Self {
            limit: value.limit,
            offset: value.offset,
        }
    }
}
