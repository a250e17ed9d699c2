use std::str::FromStr;

use error_stack::ResultExt;
use sqlx::PgConnection;
use uuid::Uuid;

use kernel::interface::query::{IdCardQuery, StudentQuery};
use kernel::interface::update::{IdCardModifier, StudentModifier};
use kernel::prelude::entity::{
    CardNumber, CardStatus, EmailAddress, IdCard, IdCardId, SelectLimit, SelectOffset, Student,
    StudentAge, StudentId, StudentName,
};
use kernel::KernelError;

use crate::database::postgres::PgTransaction;
use crate::error::ConvertError;

pub struct PostgresStudentRepository;

#[async_trait::async_trait]
impl StudentQuery<PgTransaction> for PostgresStudentRepository {
    async fn find_by_id(
        &self,
        con: &mut PgTransaction,
        id: &StudentId,
    ) -> error_stack::Result<Option<Student>, KernelError> {
        PgStudentInternal::find_by_id(con, id).await
    }

    async fn find_all(
        &self,
        con: &mut PgTransaction,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<Student>, KernelError> {
        PgStudentInternal::find_all(con, limit, offset).await
    }
}

#[async_trait::async_trait]
impl StudentModifier<PgTransaction> for PostgresStudentRepository {
    async fn create(
        &self,
        con: &mut PgTransaction,
        student: &Student,
    ) -> error_stack::Result<(), KernelError> {
        PgStudentInternal::create(con, student).await
    }

    async fn update(
        &self,
        con: &mut PgTransaction,
        id: &StudentId,
        first_name: Option<StudentName>,
        last_name: Option<StudentName>,
        email: Option<EmailAddress>,
        age: Option<StudentAge>,
    ) -> error_stack::Result<Option<Student>, KernelError> {
        PgStudentInternal::update(con, id, first_name, last_name, email, age).await
    }

    async fn delete(
        &self,
        con: &mut PgTransaction,
        student_id: &StudentId,
    ) -> error_stack::Result<(), KernelError> {
        PgStudentInternal::delete(con, student_id).await
    }
}

pub struct PostgresIdCardRepository;

#[async_trait::async_trait]
impl IdCardQuery<PgTransaction> for PostgresIdCardRepository {
    async fn find_by_student_id(
        &self,
        con: &mut PgTransaction,
        student_id: &StudentId,
    ) -> error_stack::Result<Option<IdCard>, KernelError> {
        PgIdCardInternal::find_by_student_id(con, student_id).await
    }
}

#[async_trait::async_trait]
impl IdCardModifier<PgTransaction> for PostgresIdCardRepository {
    async fn create(
        &self,
        con: &mut PgTransaction,
        card: &IdCard,
    ) -> error_stack::Result<(), KernelError> {
        PgIdCardInternal::create(con, card).await
    }

    async fn update_status(
        &self,
        con: &mut PgTransaction,
        card_id: &IdCardId,
        status: CardStatus,
    ) -> error_stack::Result<Option<IdCard>, KernelError> {
        PgIdCardInternal::update_status(con, card_id, status).await
    }
}

#[derive(sqlx::FromRow)]
struct StudentRow {
    id: Uuid,
    first_name: String,
    last_name: String,
    email: String,
    age: i32,
}

impl From<StudentRow> for Student {
    fn from(value: StudentRow) -> Self {
        Student::new(
            StudentId::new(value.id),
            StudentName::new(value.first_name),
            StudentName::new(value.last_name),
            EmailAddress::new(value.email),
            StudentAge::new(value.age),
        )
    }
}

#[derive(sqlx::FromRow)]
struct IdCardRow {
    id: Uuid,
    card_number: String,
    status: String,
    student_id: Uuid,
}

impl TryFrom<IdCardRow> for IdCard {
    type Error = error_stack::Report<KernelError>;

    fn try_from(value: IdCardRow) -> Result<Self, Self::Error> {
        let status = CardStatus::from_str(&value.status).change_context(KernelError::Integrity)?;
        Ok(IdCard::new(
            IdCardId::new(value.id),
            CardNumber::new(value.card_number),
            status,
            StudentId::new(value.student_id),
        ))
    }
}

pub(in crate::database) struct PgStudentInternal;

impl PgStudentInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &StudentId,
    ) -> error_stack::Result<Option<Student>, KernelError> {
        let row = sqlx::query_as::<_, StudentRow>(
            // language=postgresql
            r#"
            SELECT id, first_name, last_name, email, age
            FROM students
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Student::from))
    }

    async fn find_all(
        con: &mut PgConnection,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<Student>, KernelError> {
        let rows = sqlx::query_as::<_, StudentRow>(
            // language=postgresql
            r#"
            SELECT id, first_name, last_name, email, age
            FROM students
            ORDER BY last_name, first_name, id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit.as_ref())
        .bind(offset.as_ref())
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Student::from).collect())
    }

    async fn create(
        con: &mut PgConnection,
        student: &Student,
    ) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO students (id, first_name, last_name, email, age)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(student.id().as_ref())
        .bind(student.first_name().as_ref())
        .bind(student.last_name().as_ref())
        .bind(student.email().as_ref())
        .bind(student.age().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn update(
        con: &mut PgConnection,
        id: &StudentId,
        first_name: Option<StudentName>,
        last_name: Option<StudentName>,
        email: Option<EmailAddress>,
        age: Option<StudentAge>,
    ) -> error_stack::Result<Option<Student>, KernelError> {
        let row = sqlx::query_as::<_, StudentRow>(
            // language=postgresql
            r#"
            UPDATE students
            SET first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                email = COALESCE($4, email),
                age = COALESCE($5, age)
            WHERE id = $1
            RETURNING id, first_name, last_name, email, age
            "#,
        )
        .bind(id.as_ref())
        .bind(first_name.map(String::from))
        .bind(last_name.map(String::from))
        .bind(email.map(String::from))
        .bind(age.map(i32::from))
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Student::from))
    }

    async fn delete(
        con: &mut PgConnection,
        student_id: &StudentId,
    ) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            DELETE FROM students
            WHERE id = $1
            "#,
        )
        .bind(student_id.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}

pub(in crate::database) struct PgIdCardInternal;

impl PgIdCardInternal {
    /// Joins `students` so a dangling student id and a student without a
    /// card both come back as `None`.
    async fn find_by_student_id(
        con: &mut PgConnection,
        student_id: &StudentId,
    ) -> error_stack::Result<Option<IdCard>, KernelError> {
        let row = sqlx::query_as::<_, IdCardRow>(
            // language=postgresql
            r#"
            SELECT c.id, c.card_number, c.status, c.student_id
            FROM student_id_cards c
            JOIN students s ON s.id = c.student_id
            WHERE c.student_id = $1
            "#,
        )
        .bind(student_id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        row.map(IdCard::try_from).transpose()
    }

    async fn create(con: &mut PgConnection, card: &IdCard) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO student_id_cards (id, card_number, status, student_id)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(card.id().as_ref())
        .bind(card.number().as_ref())
        .bind(card.status().as_str())
        .bind(card.student_id().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn update_status(
        con: &mut PgConnection,
        card_id: &IdCardId,
        status: CardStatus,
    ) -> error_stack::Result<Option<IdCard>, KernelError> {
        let row = sqlx::query_as::<_, IdCardRow>(
            // language=postgresql
            r#"
            UPDATE student_id_cards
            SET status = $2
            WHERE id = $1
            RETURNING id, card_number, status, student_id
            "#,
        )
        .bind(card_id.as_ref())
        .bind(status.as_str())
        .fetch_optional(con)
        .await
        .convert_error()?;
        row.map(IdCard::try_from).transpose()
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::database::{DatabaseConnection, Transaction};
    use kernel::interface::query::{IdCardQuery, StudentQuery};
    use kernel::interface::update::{IdCardModifier, StudentModifier};
    use kernel::prelude::entity::{
        CardNumber, CardStatus, EmailAddress, IdCard, IdCardId, Student, StudentAge, StudentId,
        StudentName,
    };
    use kernel::KernelError;

    use crate::database::postgres::{
        PostgresDatabase, PostgresIdCardRepository, PostgresStudentRepository,
    };

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn student_and_card_roundtrip() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        let mut con = db.transact().await?;

        let student_id = StudentId::new(uuid::Uuid::new_v4());
        let student = Student::new(
            student_id.clone(),
            StudentName::new("Ged"),
            StudentName::new("Sparrowhawk"),
            EmailAddress::new(format!("{}@roke.example", student_id.as_ref())),
            StudentAge::new(19),
        );
        PostgresStudentRepository.create(&mut con, &student).await?;

        let found = PostgresStudentRepository
            .find_by_id(&mut con, &student_id)
            .await?;
        assert_eq!(found, Some(student));

        let card = IdCard::new(
            IdCardId::new(uuid::Uuid::new_v4()),
            CardNumber::new("CARD-TEST000001"),
            CardStatus::Active,
            student_id.clone(),
        );
        PostgresIdCardRepository.create(&mut con, &card).await?;

        let found = PostgresIdCardRepository
            .find_by_student_id(&mut con, &student_id)
            .await?;
        assert_eq!(found, Some(card.clone()));

        let suspended = PostgresIdCardRepository
            .update_status(&mut con, card.id(), CardStatus::Suspended)
            .await?;
        assert_eq!(suspended.map(|c| c.status()), Some(CardStatus::Suspended));

        con.roll_back().await?;
        Ok(())
    }
}
