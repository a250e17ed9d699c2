use error_stack::Report;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{DependOnIdCardQuery, DependOnStudentQuery, IdCardQuery, StudentQuery};
use kernel::interface::update::{
    DependOnIdCardModifier, DependOnStudentModifier, IdCardModifier, StudentModifier,
};
use kernel::prelude::entity::{
    CardNumber, CardStatus, EmailAddress, IdCard, IdCardId, SelectLimit, SelectOffset, Student,
    StudentAge, StudentId, StudentName,
};
use kernel::KernelError;

use crate::transfer::{
    CreateStudentDto, DeleteStudentDto, GetAllStudentDto, GetStudentDto, IdCardDto, StudentDto,
    UpdateCardStatusDto, UpdateStudentDto,
};

fn generate_card_number() -> CardNumber {
    let hex = Uuid::new_v4().simple().to_string();
    CardNumber::new(format!("CARD-{}", hex[..10].to_uppercase()))
}

#[async_trait::async_trait]
pub trait GetStudentService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnStudentQuery<Connection>
    + DependOnIdCardQuery<Connection>
{
    async fn get_student(
        &self,
        dto: GetStudentDto,
    ) -> error_stack::Result<Option<StudentDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = StudentId::new(dto.id);
        let student = self.student_query().find_by_id(&mut connection, &id).await?;
        let Some(student) = student else {
            connection.commit().await?;
            return Ok(None);
        };
        let card = self
            .id_card_query()
            .find_by_student_id(&mut connection, &id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::Integrity)
                    .attach_printable(format!("Student {} has no ID card", dto.id))
            })?;
        connection.commit().await?;

        Ok(Some(StudentDto::from_parts(student, card)))
    }

    async fn get_all_students(
        &self,
        dto: GetAllStudentDto,
    ) -> error_stack::Result<Vec<StudentDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let limit = dto.limit.map(SelectLimit::new).unwrap_or_default();
        let offset = dto.offset.map(SelectOffset::new).unwrap_or_default();
        let students = self
            .student_query()
            .find_all(&mut connection, &limit, &offset)
            .await?;

        let mut dtos = Vec::with_capacity(students.len());
        for student in students {
            let card = self
                .id_card_query()
                .find_by_student_id(&mut connection, student.id())
                .await?
                .ok_or_else(|| {
                    Report::new(KernelError::Integrity)
                        .attach_printable(format!("Student {} has no ID card", student.id().as_ref()))
                })?;
            dtos.push(StudentDto::from_parts(student, card));
        }
        connection.commit().await?;

        Ok(dtos)
    }
}

impl<Connection: Transaction + Send, T> GetStudentService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnStudentQuery<Connection>
        + DependOnIdCardQuery<Connection>
{
}

#[async_trait::async_trait]
pub trait CreateStudentService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnStudentModifier<Connection>
    + DependOnIdCardModifier<Connection>
{
    /// Onboarding creates the student and their ID card (ACTIVE, generated
    /// card number) in the same unit of work. The card is never recreated.
    async fn create_student(
        &self,
        dto: CreateStudentDto,
    ) -> error_stack::Result<StudentDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let student = Student::new(
            StudentId::new(Uuid::new_v4()),
            StudentName::new(dto.first_name),
            StudentName::new(dto.last_name),
            EmailAddress::new(dto.email),
            StudentAge::new(dto.age),
        );
        self.student_modifier()
            .create(&mut connection, &student)
            .await?;

        let card = IdCard::new(
            IdCardId::new(Uuid::new_v4()),
            generate_card_number(),
            CardStatus::Active,
            student.id().clone(),
        );
        self.id_card_modifier().create(&mut connection, &card).await?;
        connection.commit().await?;

        tracing::info!(
            student_id = %student.id().as_ref(),
            card_number = card.number().as_ref(),
            "student enrolled"
        );
        Ok(StudentDto::from_parts(student, card))
    }
}

impl<Connection: Transaction + Send, T> CreateStudentService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnStudentModifier<Connection>
        + DependOnIdCardModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait UpdateStudentService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnStudentModifier<Connection>
    + DependOnIdCardQuery<Connection>
{
    async fn update_student(
        &self,
        dto: UpdateStudentDto,
    ) -> error_stack::Result<Option<StudentDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = StudentId::new(dto.id);
        let updated = self
            .student_modifier()
            .update(
                &mut connection,
                &id,
                dto.first_name.map(StudentName::new),
                dto.last_name.map(StudentName::new),
                dto.email.map(EmailAddress::new),
                dto.age.map(StudentAge::new),
            )
            .await?;
        let Some(student) = updated else {
            connection.commit().await?;
            return Ok(None);
        };
        let card = self
            .id_card_query()
            .find_by_student_id(&mut connection, &id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::Integrity)
                    .attach_printable(format!("Student {} has no ID card", dto.id))
            })?;
        connection.commit().await?;

        Ok(Some(StudentDto::from_parts(student, card)))
    }
}

impl<Connection: Transaction + Send, T> UpdateStudentService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnStudentModifier<Connection>
        + DependOnIdCardQuery<Connection>
{
}

#[async_trait::async_trait]
pub trait DeleteStudentService<Connection: Transaction + Send>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnStudentModifier<Connection>
{
    async fn delete_student(&self, dto: DeleteStudentDto) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = StudentId::new(dto.id);
        self.student_modifier().delete(&mut connection, &id).await?;
        connection.commit().await?;

        tracing::info!(student_id = %dto.id, "student deleted");
        Ok(())
    }
}

impl<Connection: Transaction + Send, T> DeleteStudentService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnStudentModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait UpdateCardStatusService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnIdCardQuery<Connection>
    + DependOnIdCardModifier<Connection>
{
    /// Administrative path; the rental workflow re-reads the status on every
    /// rent attempt, so a change here takes effect immediately.
    async fn update_card_status(
        &self,
        dto: UpdateCardStatusDto,
    ) -> error_stack::Result<Option<IdCardDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let student_id = StudentId::new(dto.student_id);
        let card = self
            .id_card_query()
            .find_by_student_id(&mut connection, &student_id)
            .await?;
        let Some(card) = card else {
            connection.commit().await?;
            return Ok(None);
        };
        let updated = self
            .id_card_modifier()
            .update_status(&mut connection, card.id(), dto.status)
            .await?;
        connection.commit().await?;

        tracing::info!(student_id = %dto.student_id, status = %dto.status, "card status changed");
        Ok(updated.map(IdCardDto::from))
    }
}

impl<Connection: Transaction + Send, T> UpdateCardStatusService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnIdCardQuery<Connection>
        + DependOnIdCardModifier<Connection>
{
}
