use serde::Deserialize;
use uuid::Uuid;

use application::transfer::{
    CreateStudentDto, GetAllStudentDto, UpdateCardStatusDto, UpdateStudentDto,
};
use kernel::prelude::entity::CardStatus;

#[derive(Debug, Deserialize)]
pub struct CreateStudentRequest {
    first_name: String,
    last_name: String,
    email: String,
    age: i32,
}

impl From<CreateStudentRequest> for CreateStudentDto {
    fn from(value: CreateStudentRequest) -> Self {
        Self {
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
            age: value.age,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateStudentRequest {
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    age: Option<i32>,
}

impl UpdateStudentRequest {
    pub fn into_dto(self, id: Uuid) -> UpdateStudentDto {
        UpdateStudentDto {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            age: self.age,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct GetAllStudentRequest {
    limit: Option<i32>,
    offset: Option<i32>,
}

impl From<GetAllStudentRequest> for GetAllStudentDto {
    fn from(value: GetAllStudentRequest) -> Self {
        Self {
            limit: value.limit,
            offset: value.offset,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateCardStatusRequest {
    status: CardStatus,
}

impl UpdateCardStatusRequest {
    pub fn into_dto(self, student_id: Uuid) -> UpdateCardStatusDto {
        UpdateCardStatusDto {
            student_id,
            status: self.status,
        }
    }
}
