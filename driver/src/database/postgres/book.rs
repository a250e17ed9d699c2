use sqlx::PgConnection;
use time::OffsetDateTime;
use uuid::Uuid;

use kernel::interface::query::BookQuery;
use kernel::interface::update::{BookModifier, ReleaseOutcome, ReserveOutcome};
use kernel::prelude::entity::{
    Book, BookAuthor, BookId, BookStock, BookTitle, CreatedAt, Isbn, SelectLimit, SelectOffset,
};
use kernel::KernelError;

use crate::database::postgres::PgTransaction;
use crate::error::ConvertError;

pub struct PostgresBookRepository;

#[async_trait::async_trait]
impl BookQuery<PgTransaction> for PostgresBookRepository {
    async fn find_by_id(
        &self,
        con: &mut PgTransaction,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        PgBookInternal::find_by_id(con, id).await
    }

    async fn find_all(
        &self,
        con: &mut PgTransaction,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        PgBookInternal::find_all(con, limit, offset).await
    }
}

#[async_trait::async_trait]
impl BookModifier<PgTransaction> for PostgresBookRepository {
    async fn create(
        &self,
        con: &mut PgTransaction,
        book: &Book,
    ) -> error_stack::Result<(), KernelError> {
        PgBookInternal::create(con, book).await
    }

    async fn update(
        &self,
        con: &mut PgTransaction,
        id: &BookId,
        author: Option<BookAuthor>,
        title: Option<BookTitle>,
        isbn: Option<Isbn>,
        stock: Option<BookStock>,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        PgBookInternal::update(con, id, author, title, isbn, stock).await
    }

    async fn delete(
        &self,
        con: &mut PgTransaction,
        book_id: &BookId,
    ) -> error_stack::Result<(), KernelError> {
        PgBookInternal::delete(con, book_id).await
    }

    async fn reserve(
        &self,
        con: &mut PgTransaction,
        book_id: &BookId,
        quantity: i32,
    ) -> error_stack::Result<ReserveOutcome, KernelError> {
        PgBookInternal::reserve(con, book_id, quantity).await
    }

    async fn release(
        &self,
        con: &mut PgTransaction,
        book_id: &BookId,
        quantity: i32,
    ) -> error_stack::Result<ReleaseOutcome, KernelError> {
        PgBookInternal::release(con, book_id, quantity).await
    }
}

#[derive(sqlx::FromRow)]
struct BookRow {
    id: Uuid,
    author: String,
    title: String,
    isbn: String,
    created_at: OffsetDateTime,
    stock: Option<i32>,
}

impl From<BookRow> for Book {
    fn from(value: BookRow) -> Self {
        Book::new(
            BookId::new(value.id),
            BookAuthor::new(value.author),
            BookTitle::new(value.title),
            Isbn::new(value.isbn),
            CreatedAt::new(value.created_at),
            BookStock::new(value.stock),
        )
    }
}

pub(in crate::database) struct PgBookInternal;

impl PgBookInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        let row = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            SELECT id, author, title, isbn, created_at, stock
            FROM books
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Book::from))
    }

    async fn find_all(
        con: &mut PgConnection,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        let rows = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            SELECT id, author, title, isbn, created_at, stock
            FROM books
            ORDER BY created_at, id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit.as_ref())
        .bind(offset.as_ref())
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Book::from).collect())
    }

    async fn create(con: &mut PgConnection, book: &Book) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO books (id, author, title, isbn, created_at, stock)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(book.id().as_ref())
        .bind(book.author().as_ref())
        .bind(book.title().as_ref())
        .bind(book.isbn().as_ref())
        .bind(book.created_at().as_ref())
        .bind(book.stock().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn update(
        con: &mut PgConnection,
        id: &BookId,
        author: Option<BookAuthor>,
        title: Option<BookTitle>,
        isbn: Option<Isbn>,
        stock: Option<BookStock>,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        let row = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            UPDATE books
            SET author = COALESCE($2, author),
                title = COALESCE($3, title),
                isbn = COALESCE($4, isbn),
                stock = COALESCE($5, stock)
            WHERE id = $1
            RETURNING id, author, title, isbn, created_at, stock
            "#,
        )
        .bind(id.as_ref())
        .bind(author.map(String::from))
        .bind(title.map(String::from))
        .bind(isbn.map(String::from))
        .bind(stock.and_then(|s| s.get()))
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Book::from))
    }

    async fn delete(
        con: &mut PgConnection,
        book_id: &BookId,
    ) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            DELETE FROM books
            WHERE id = $1
            "#,
        )
        .bind(book_id.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    /// Single conditional update; the row lock serializes concurrent
    /// reservations so stock can never go negative. `NULL` stock (untracked)
    /// always passes and stays `NULL`.
    async fn reserve(
        con: &mut PgConnection,
        book_id: &BookId,
        quantity: i32,
    ) -> error_stack::Result<ReserveOutcome, KernelError> {
        let updated = sqlx::query_scalar::<_, Option<i32>>(
            // language=postgresql
            r#"
            UPDATE books
            SET stock = stock - $2
            WHERE id = $1 AND (stock IS NULL OR stock >= $2)
            RETURNING stock
            "#,
        )
        .bind(book_id.as_ref())
        .bind(quantity)
        .fetch_optional(&mut *con)
        .await
        .convert_error()?;

        if let Some(stock) = updated {
            return Ok(ReserveOutcome::Reserved(BookStock::new(stock)));
        }

        let exists = sqlx::query_scalar::<_, bool>(
            // language=postgresql
            r#"
            SELECT EXISTS(SELECT 1 FROM books WHERE id = $1)
            "#,
        )
        .bind(book_id.as_ref())
        .fetch_one(con)
        .await
        .convert_error()?;

        Ok(if exists {
            ReserveOutcome::OutOfStock
        } else {
            ReserveOutcome::NotFound
        })
    }

    async fn release(
        con: &mut PgConnection,
        book_id: &BookId,
        quantity: i32,
    ) -> error_stack::Result<ReleaseOutcome, KernelError> {
        let updated = sqlx::query_scalar::<_, Option<i32>>(
            // language=postgresql
            r#"
            UPDATE books
            SET stock = stock + $2
            WHERE id = $1
            RETURNING stock
            "#,
        )
        .bind(book_id.as_ref())
        .bind(quantity)
        .fetch_optional(con)
        .await
        .convert_error()?;

        Ok(match updated {
            Some(stock) => ReleaseOutcome::Released(BookStock::new(stock)),
            None => ReleaseOutcome::NotFound,
        })
    }
}

#[cfg(test)]
mod test {
    use time::OffsetDateTime;

    use kernel::interface::database::{DatabaseConnection, Transaction};
    use kernel::interface::query::BookQuery;
    use kernel::interface::update::{BookModifier, ReleaseOutcome, ReserveOutcome};
    use kernel::prelude::entity::{
        Book, BookAuthor, BookId, BookStock, BookTitle, CreatedAt, Isbn,
    };
    use kernel::KernelError;

    use crate::database::postgres::{PostgresBookRepository, PostgresDatabase};

    fn sample_book(id: BookId, stock: Option<i32>) -> Book {
        Book::new(
            id,
            BookAuthor::new("Ursula K. Le Guin"),
            BookTitle::new("A Wizard of Earthsea"),
            Isbn::new("978-0547773742"),
            CreatedAt::new(OffsetDateTime::now_utc()),
            BookStock::new(stock),
        )
    }

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn crud() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        let mut con = db.transact().await?;
        let id = BookId::new(uuid::Uuid::new_v4());

        let book = sample_book(id.clone(), Some(3));
        PostgresBookRepository.create(&mut con, &book).await?;

        let found = PostgresBookRepository.find_by_id(&mut con, &id).await?;
        assert_eq!(found, Some(book));

        let updated = PostgresBookRepository
            .update(
                &mut con,
                &id,
                None,
                Some(BookTitle::new("The Tombs of Atuan")),
                None,
                None,
            )
            .await?;
        assert_eq!(
            updated.map(|b| b.title().as_ref().to_string()),
            Some("The Tombs of Atuan".to_string())
        );

        PostgresBookRepository.delete(&mut con, &id).await?;
        let found = PostgresBookRepository.find_by_id(&mut con, &id).await?;
        assert!(found.is_none());

        con.roll_back().await?;
        Ok(())
    }

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn reserve_stops_at_zero() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        let mut con = db.transact().await?;
        let id = BookId::new(uuid::Uuid::new_v4());

        PostgresBookRepository
            .create(&mut con, &sample_book(id.clone(), Some(1)))
            .await?;

        let first = PostgresBookRepository.reserve(&mut con, &id, 1).await?;
        assert_eq!(first, ReserveOutcome::Reserved(BookStock::new(0)));

        let second = PostgresBookRepository.reserve(&mut con, &id, 1).await?;
        assert_eq!(second, ReserveOutcome::OutOfStock);

        let released = PostgresBookRepository.release(&mut con, &id, 1).await?;
        assert_eq!(released, ReleaseOutcome::Released(BookStock::new(1)));

        con.roll_back().await?;
        Ok(())
    }

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn untracked_stock_passes_reserve() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        let mut con = db.transact().await?;
        let id = BookId::new(uuid::Uuid::new_v4());

        PostgresBookRepository
            .create(&mut con, &sample_book(id.clone(), None))
            .await?;

        let outcome = PostgresBookRepository.reserve(&mut con, &id, 1).await?;
        assert_eq!(outcome, ReserveOutcome::Reserved(BookStock::untracked()));

        con.roll_back().await?;
        Ok(())
    }

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn reserve_unknown_book_is_not_found() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        let mut con = db.transact().await?;
        let id = BookId::new(uuid::Uuid::new_v4());

        let outcome = PostgresBookRepository.reserve(&mut con, &id, 1).await?;
        assert_eq!(outcome, ReserveOutcome::NotFound);

        con.roll_back().await?;
        Ok(())
    }
}
