use kernel::prelude::entity::{CardStatus, IdCard, Student};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct IdCardDto {
    pub id: Uuid,
    pub card_number: String,
    pub status: CardStatus,
}

impl From<IdCard> for IdCardDto {
    fn from(value: IdCard) -> Self {
        Self {
            id: *value.id().as_ref(),
            card_number: value.number().as_ref().to_string(),
            status: value.status(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StudentDto {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: i32,
    pub id_card: IdCardDto,
}

impl StudentDto {
    pub fn from_parts(student: Student, card: IdCard) -> Self {
        Self {
            id: *student.id().as_ref(),
            first_name: student.first_name().as_ref().to_string(),
            last_name: student.last_name().as_ref().to_string(),
            email: student.email().as_ref().to_string(),
            age: *student.age().as_ref(),
            id_card: IdCardDto::from(card),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateStudentDto {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: i32,
}

#[derive(Debug, Clone)]
pub struct UpdateStudentDto {
    pub id: Uuid,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct GetStudentDto {
    pub id: Uuid,
}

#[derive(Debug, Clone, Default)]
pub struct GetAllStudentDto {
    pub limit: Option<i32>,
    pub offset: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct DeleteStudentDto {
    pub id: Uuid,
}

#[derive(Debug, Clone)]
pub struct UpdateCardStatusDto {
    pub student_id: Uuid,
    pub status: CardStatus,
}
