use sqlx::PgConnection;
use time::OffsetDateTime;
use uuid::Uuid;

use kernel::interface::query::RentalQuery;
use kernel::interface::update::{CloseOutcome, RentalModifier};
use kernel::prelude::entity::{
    BookId, DueDate, Rental, RentalId, RentedAt, ReturnedAt, StudentId,
};
use kernel::KernelError;

use crate::database::postgres::PgTransaction;
use crate::error::ConvertError;

pub struct PostgresRentalRepository;

#[async_trait::async_trait]
impl RentalQuery<PgTransaction> for PostgresRentalRepository {
    async fn find_by_id(
        &self,
        con: &mut PgTransaction,
        id: &RentalId,
    ) -> error_stack::Result<Option<Rental>, KernelError> {
        PgRentalInternal::find_by_id(con, id).await
    }

    async fn find_by_student_id(
        &self,
        con: &mut PgTransaction,
        student_id: &StudentId,
    ) -> error_stack::Result<Vec<Rental>, KernelError> {
        PgRentalInternal::find_by_student_id(con, student_id).await
    }
}

#[async_trait::async_trait]
impl RentalModifier<PgTransaction> for PostgresRentalRepository {
    async fn create(
        &self,
        con: &mut PgTransaction,
        rental: &Rental,
    ) -> error_stack::Result<(), KernelError> {
        PgRentalInternal::create(con, rental).await
    }

    async fn close(
        &self,
        con: &mut PgTransaction,
        rental_id: &RentalId,
        returned_at: &ReturnedAt,
    ) -> error_stack::Result<CloseOutcome, KernelError> {
        PgRentalInternal::close(con, rental_id, returned_at).await
    }
}

#[derive(sqlx::FromRow)]
struct RentalRow {
    id: Uuid,
    rented_at: OffsetDateTime,
    due_date: OffsetDateTime,
    returned_at: Option<OffsetDateTime>,
    book_id: Uuid,
    student_id: Uuid,
}

impl From<RentalRow> for Rental {
    fn from(value: RentalRow) -> Self {
        Rental::new(
            RentalId::new(value.id),
            RentedAt::new(value.rented_at),
            DueDate::new(value.due_date),
            value.returned_at.map(ReturnedAt::new),
            BookId::new(value.book_id),
            StudentId::new(value.student_id),
        )
    }
}

pub(in crate::database) struct PgRentalInternal;

impl PgRentalInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &RentalId,
    ) -> error_stack::Result<Option<Rental>, KernelError> {
        let row = sqlx::query_as::<_, RentalRow>(
            // language=postgresql
            r#"
            SELECT id, rented_at, due_date, returned_at, book_id, student_id
            FROM rentals
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Rental::from))
    }

    async fn find_by_student_id(
        con: &mut PgConnection,
        student_id: &StudentId,
    ) -> error_stack::Result<Vec<Rental>, KernelError> {
        let rows = sqlx::query_as::<_, RentalRow>(
            // language=postgresql
            r#"
            SELECT id, rented_at, due_date, returned_at, book_id, student_id
            FROM rentals
            WHERE student_id = $1
            ORDER BY rented_at
            "#,
        )
        .bind(student_id.as_ref())
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Rental::from).collect())
    }

    async fn create(
        con: &mut PgConnection,
        rental: &Rental,
    ) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO rentals (id, rented_at, due_date, returned_at, book_id, student_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(rental.id().as_ref())
        .bind(rental.rented_at().as_ref())
        .bind(rental.due_date().as_ref())
        .bind(rental.returned_at().map(|at| *at.as_ref()))
        .bind(rental.book_id().as_ref())
        .bind(rental.student_id().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    /// `returned_at` is written only while still null; the condition and the
    /// write are one statement, so concurrent double returns cannot both
    /// succeed.
    async fn close(
        con: &mut PgConnection,
        rental_id: &RentalId,
        returned_at: &ReturnedAt,
    ) -> error_stack::Result<CloseOutcome, KernelError> {
        let closed = sqlx::query_as::<_, RentalRow>(
            // language=postgresql
            r#"
            UPDATE rentals
            SET returned_at = $2
            WHERE id = $1 AND returned_at IS NULL
            RETURNING id, rented_at, due_date, returned_at, book_id, student_id
            "#,
        )
        .bind(rental_id.as_ref())
        .bind(returned_at.as_ref())
        .fetch_optional(&mut *con)
        .await
        .convert_error()?;

        if let Some(row) = closed {
            return Ok(CloseOutcome::Closed(Rental::from(row)));
        }

        let exists = sqlx::query_scalar::<_, bool>(
            // language=postgresql
            r#"
            SELECT EXISTS(SELECT 1 FROM rentals WHERE id = $1)
            "#,
        )
        .bind(rental_id.as_ref())
        .fetch_one(con)
        .await
        .convert_error()?;

        Ok(if exists {
            CloseOutcome::AlreadyClosed
        } else {
            CloseOutcome::NotFound
        })
    }
}

#[cfg(test)]
mod test {
    use time::{Duration, OffsetDateTime};

    use kernel::interface::database::{DatabaseConnection, Transaction};
    use kernel::interface::query::RentalQuery;
    use kernel::interface::update::{
        BookModifier, CloseOutcome, RentalModifier, StudentModifier,
    };
    use kernel::prelude::entity::{
        Book, BookAuthor, BookId, BookStock, BookTitle, CreatedAt, DueDate, EmailAddress, Isbn,
        Rental, RentalId, RentedAt, ReturnedAt, Student, StudentAge, StudentId, StudentName,
    };
    use kernel::KernelError;

    use crate::database::postgres::{
        PostgresBookRepository, PostgresDatabase, PostgresRentalRepository,
        PostgresStudentRepository,
    };

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn close_succeeds_exactly_once() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        let mut con = db.transact().await?;

        let book_id = BookId::new(uuid::Uuid::new_v4());
        let book = Book::new(
            book_id.clone(),
            BookAuthor::new("Italo Calvino"),
            BookTitle::new("Invisible Cities"),
            Isbn::new("978-0156453806"),
            CreatedAt::new(OffsetDateTime::now_utc()),
            BookStock::new(2),
        );
        PostgresBookRepository.create(&mut con, &book).await?;

        let student_id = StudentId::new(uuid::Uuid::new_v4());
        let student = Student::new(
            student_id.clone(),
            StudentName::new("Marco"),
            StudentName::new("Polo"),
            EmailAddress::new(format!("{}@venezia.example", student_id.as_ref())),
            StudentAge::new(22),
        );
        PostgresStudentRepository.create(&mut con, &student).await?;

        let now = OffsetDateTime::now_utc();
        let rental_id = RentalId::new(uuid::Uuid::new_v4());
        let rental = Rental::new(
            rental_id.clone(),
            RentedAt::new(now),
            DueDate::new(now + Duration::days(14)),
            None,
            book_id,
            student_id,
        );
        PostgresRentalRepository.create(&mut con, &rental).await?;

        let found = PostgresRentalRepository
            .find_by_id(&mut con, &rental_id)
            .await?;
        assert!(matches!(found, Some(ref r) if !r.is_returned()));

        let returned_at = ReturnedAt::new(now + Duration::hours(1));
        let first = PostgresRentalRepository
            .close(&mut con, &rental_id, &returned_at)
            .await?;
        assert!(matches!(first, CloseOutcome::Closed(ref r) if r.is_returned()));

        let second = PostgresRentalRepository
            .close(&mut con, &rental_id, &returned_at)
            .await?;
        assert_eq!(second, CloseOutcome::AlreadyClosed);

        let missing = PostgresRentalRepository
            .close(&mut con, &RentalId::new(uuid::Uuid::new_v4()), &returned_at)
            .await?;
        assert_eq!(missing, CloseOutcome::NotFound);

        con.roll_back().await?;
        Ok(())
    }
}
