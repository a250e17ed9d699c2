use error_stack::{Report, ResultExt};
use time::OffsetDateTime;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{DependOnRentalQuery, RentalQuery};
use kernel::interface::update::{
    BookModifier, CloseOutcome, DependOnBookModifier, DependOnRentalModifier, ReleaseOutcome,
    RentalModifier, ReserveOutcome,
};
use kernel::prelude::entity::{
    BookId, DueDate, Rental, RentalId, RentedAt, ReturnedAt, StudentId,
};
use kernel::{KernelError, RentalError};

use crate::service::eligibility::{Eligibility, EligibilityGate};
use crate::transfer::{GetRentalDto, GetStudentRentalsDto, RentBookDto, RentalDto, ReturnBookDto};

/// Rent workflow: eligibility gate, atomic stock reservation, ledger entry.
/// The three storage steps share one transaction; any failure rolls the
/// whole unit of work back, so a reservation can never leak.
#[async_trait::async_trait]
pub trait RentBookService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + EligibilityGate<Connection>
    + DependOnBookModifier<Connection>
    + DependOnRentalModifier<Connection>
{
    async fn rent_book(&self, dto: RentBookDto) -> error_stack::Result<RentalDto, RentalError> {
        let now = OffsetDateTime::now_utc();
        let due_date = DueDate::new(dto.due_date);
        if due_date.is_past(now) {
            return Err(Report::new(RentalError::InvalidDueDate));
        }

        tracing::info!(
            book_id = %dto.book_id,
            student_id = %dto.student_id,
            due_date = %dto.due_date,
            "rent requested"
        );

        let mut connection = self
            .database_connection()
            .transact()
            .await
            .change_context(RentalError::Storage)?;

        match process_rent(self, &mut connection, dto, due_date, now).await {
            Ok(rental) => {
                connection
                    .commit()
                    .await
                    .change_context(RentalError::Storage)?;
                tracing::info!(rental_id = %rental.id, "rental created");
                Ok(rental)
            }
            Err(report) => {
                connection
                    .roll_back()
                    .await
                    .change_context(RentalError::Storage)?;
                Err(report)
            }
        }
    }
}

impl<Connection: Transaction + Send, T> RentBookService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + EligibilityGate<Connection>
        + DependOnBookModifier<Connection>
        + DependOnRentalModifier<Connection>
{
}

async fn process_rent<Connection, S>(
    service: &S,
    con: &mut Connection,
    dto: RentBookDto,
    due_date: DueDate,
    now: OffsetDateTime,
) -> error_stack::Result<RentalDto, RentalError>
where
    Connection: Transaction + Send,
    S: EligibilityGate<Connection>
        + DependOnBookModifier<Connection>
        + DependOnRentalModifier<Connection>
        + ?Sized,
{
    let student_id = StudentId::new(dto.student_id);
    let book_id = BookId::new(dto.book_id);

    if let Eligibility::Ineligible(status) = service.check_eligibility(con, &student_id).await? {
        tracing::warn!(student_id = %dto.student_id, %status, "borrower ineligible");
        return Err(Report::new(RentalError::IneligibleBorrower(status)));
    }

    match service
        .book_modifier()
        .reserve(con, &book_id, 1)
        .await
        .change_context(RentalError::Storage)?
    {
        ReserveOutcome::Reserved(stock) => {
            tracing::debug!(book_id = %dto.book_id, stock = ?stock.get(), "stock reserved");
        }
        ReserveOutcome::OutOfStock => return Err(Report::new(RentalError::BookUnavailable)),
        ReserveOutcome::NotFound => return Err(Report::new(RentalError::BookNotFound)),
    }

    let rental = Rental::new(
        RentalId::new(Uuid::new_v4()),
        RentedAt::new(now),
        due_date,
        None,
        book_id,
        student_id,
    );
    service
        .rental_modifier()
        .create(con, &rental)
        .await
        .change_context(RentalError::Storage)?;

    Ok(RentalDto::from(rental))
}

/// Return workflow: close the rental (at most once) and put the copy back in
/// stock, in one transaction.
#[async_trait::async_trait]
pub trait ReturnBookService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnBookModifier<Connection>
    + DependOnRentalModifier<Connection>
{
    async fn return_book(&self, dto: ReturnBookDto) -> error_stack::Result<RentalDto, RentalError> {
        tracing::info!(rental_id = %dto.rental_id, "return requested");

        let mut connection = self
            .database_connection()
            .transact()
            .await
            .change_context(RentalError::Storage)?;

        match process_return(self, &mut connection, dto).await {
            Ok(rental) => {
                connection
                    .commit()
                    .await
                    .change_context(RentalError::Storage)?;
                tracing::info!(rental_id = %rental.id, "book returned");
                Ok(rental)
            }
            Err(report) => {
                connection
                    .roll_back()
                    .await
                    .change_context(RentalError::Storage)?;
                Err(report)
            }
        }
    }
}

impl<Connection: Transaction + Send, T> ReturnBookService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnBookModifier<Connection>
        + DependOnRentalModifier<Connection>
{
}

async fn process_return<Connection, S>(
    service: &S,
    con: &mut Connection,
    dto: ReturnBookDto,
) -> error_stack::Result<RentalDto, RentalError>
where
    Connection: Transaction + Send,
    S: DependOnBookModifier<Connection> + DependOnRentalModifier<Connection> + ?Sized,
{
    let rental_id = RentalId::new(dto.rental_id);
    let returned_at = ReturnedAt::new(OffsetDateTime::now_utc());

    // The conditional update settles NotFound/AlreadyClosed and hands back
    // the closed rental in one step.
    let rental = match service
        .rental_modifier()
        .close(con, &rental_id, &returned_at)
        .await
        .change_context(RentalError::Storage)?
    {
        CloseOutcome::Closed(rental) => rental,
        CloseOutcome::AlreadyClosed => return Err(Report::new(RentalError::AlreadyReturned)),
        CloseOutcome::NotFound => return Err(Report::new(RentalError::RentalNotFound)),
    };

    match service
        .book_modifier()
        .release(con, rental.book_id(), 1)
        .await
        .change_context(RentalError::Storage)?
    {
        ReleaseOutcome::Released(stock) => {
            tracing::debug!(book_id = %rental.book_id().as_ref(), stock = ?stock.get(), "stock released");
        }
        ReleaseOutcome::NotFound => {
            return Err(Report::new(RentalError::Storage).attach_printable(format!(
                "Rental {} references missing book {}",
                rental.id().as_ref(),
                rental.book_id().as_ref()
            )));
        }
    }

    Ok(RentalDto::from(rental))
}

#[async_trait::async_trait]
pub trait GetRentalService<Connection: Transaction + Send>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnRentalQuery<Connection>
{
    async fn get_rental(
        &self,
        dto: GetRentalDto,
    ) -> error_stack::Result<Option<RentalDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = RentalId::new(dto.id);
        let rental = self.rental_query().find_by_id(&mut connection, &id).await?;
        connection.commit().await?;

        Ok(rental.map(RentalDto::from))
    }

    async fn get_student_rentals(
        &self,
        dto: GetStudentRentalsDto,
    ) -> error_stack::Result<Vec<RentalDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let student_id = StudentId::new(dto.student_id);
        let rentals = self
            .rental_query()
            .find_by_student_id(&mut connection, &student_id)
            .await?;
        connection.commit().await?;

        Ok(rentals.into_iter().map(RentalDto::from).collect())
    }
}

impl<Connection: Transaction + Send, T> GetRentalService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnRentalQuery<Connection>
{
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex, MutexGuard};

    use error_stack::Report;
    use time::{Duration, OffsetDateTime};
    use uuid::Uuid;

    use kernel::interface::database::{DatabaseConnection, Transaction};
    use kernel::interface::query::{DependOnIdCardQuery, DependOnRentalQuery, IdCardQuery, RentalQuery};
    use kernel::interface::update::{
        BookModifier, CloseOutcome, DependOnBookModifier, DependOnRentalModifier, ReleaseOutcome,
        RentalModifier, ReserveOutcome,
    };
    use kernel::prelude::entity::{
        Book, BookAuthor, BookId, BookStock, BookTitle, CardNumber, CardStatus, CreatedAt, IdCard,
        IdCardId, Isbn, Rental, RentalId, ReturnedAt, StudentId,
    };
    use kernel::{KernelError, RentalError};

    use crate::service::{RentBookService, ReturnBookService};
    use crate::transfer::{RentBookDto, ReturnBookDto};

    #[derive(Debug, Clone, Default)]
    struct StoreState {
        books: HashMap<Uuid, Book>,
        cards: HashMap<Uuid, IdCard>,
        rentals: HashMap<Uuid, Rental>,
        fail_rental_create: bool,
    }

    /// In-memory store. Writes land in the shared state immediately;
    /// `roll_back` restores the snapshot taken at `transact` time, which is
    /// all the isolation the single-threaded scenarios need.
    #[derive(Clone, Default)]
    struct MemoryDatabase {
        state: Arc<Mutex<StoreState>>,
    }

    impl MemoryDatabase {
        fn lock(&self) -> MutexGuard<'_, StoreState> {
            self.state.lock().unwrap()
        }

        fn insert_book(&self, id: Uuid, stock: Option<i32>) {
            let book = Book::new(
                BookId::new(id),
                BookAuthor::new("Frank Herbert"),
                BookTitle::new("Dune"),
                Isbn::new("978-0441172719"),
                CreatedAt::new(OffsetDateTime::now_utc()),
                BookStock::new(stock),
            );
            self.lock().books.insert(id, book);
        }

        fn insert_card(&self, student_id: Uuid, status: CardStatus) {
            let card = IdCard::new(
                IdCardId::new(Uuid::new_v4()),
                CardNumber::new("CARD-0000000001"),
                status,
                StudentId::new(student_id),
            );
            self.lock().cards.insert(student_id, card);
        }

        fn stock_of(&self, book_id: Uuid) -> Option<i32> {
            self.lock().books.get(&book_id).unwrap().stock().get()
        }

        fn rental_count(&self) -> usize {
            self.lock().rentals.len()
        }
    }

    struct MemoryTransaction {
        state: Arc<Mutex<StoreState>>,
        snapshot: StoreState,
    }

    impl MemoryTransaction {
        fn lock(&self) -> MutexGuard<'_, StoreState> {
            self.state.lock().unwrap()
        }
    }

    #[async_trait::async_trait]
    impl Transaction for MemoryTransaction {
        async fn commit(self) -> error_stack::Result<(), KernelError> {
            Ok(())
        }

        async fn roll_back(self) -> error_stack::Result<(), KernelError> {
            *self.state.lock().unwrap() = self.snapshot;
            Ok(())
        }
    }

    #[async_trait::async_trait]
    impl DatabaseConnection<MemoryTransaction> for MemoryDatabase {
        async fn transact(&self) -> error_stack::Result<MemoryTransaction, KernelError> {
            let snapshot = self.lock().clone();
            Ok(MemoryTransaction {
                state: Arc::clone(&self.state),
                snapshot,
            })
        }
    }

    struct MemoryBookRepository;

    #[async_trait::async_trait]
    impl BookModifier<MemoryTransaction> for MemoryBookRepository {
        async fn create(
            &self,
            con: &mut MemoryTransaction,
            book: &Book,
        ) -> error_stack::Result<(), KernelError> {
            con.lock().books.insert(*book.id().as_ref(), book.clone());
            Ok(())
        }

        async fn update(
            &self,
            _con: &mut MemoryTransaction,
            _id: &BookId,
            _author: Option<BookAuthor>,
            _title: Option<BookTitle>,
            _isbn: Option<Isbn>,
            _stock: Option<BookStock>,
        ) -> error_stack::Result<Option<Book>, KernelError> {
            unreachable!("not exercised by the workflow tests")
        }

        async fn delete(
            &self,
            con: &mut MemoryTransaction,
            book_id: &BookId,
        ) -> error_stack::Result<(), KernelError> {
            con.lock().books.remove(book_id.as_ref());
            Ok(())
        }

        async fn reserve(
            &self,
            con: &mut MemoryTransaction,
            book_id: &BookId,
            quantity: i32,
        ) -> error_stack::Result<ReserveOutcome, KernelError> {
            let mut state = con.lock();
            let Some(book) = state.books.get(book_id.as_ref()) else {
                return Ok(ReserveOutcome::NotFound);
            };
            let stock = match book.stock().get() {
                None => BookStock::untracked(),
                Some(n) if n >= quantity => BookStock::new(n - quantity),
                Some(_) => return Ok(ReserveOutcome::OutOfStock),
            };
            let updated = rebuild_with_stock(book, stock);
            state.books.insert(*book_id.as_ref(), updated);
            Ok(ReserveOutcome::Reserved(stock))
        }

        async fn release(
            &self,
            con: &mut MemoryTransaction,
            book_id: &BookId,
            quantity: i32,
        ) -> error_stack::Result<ReleaseOutcome, KernelError> {
            let mut state = con.lock();
            let Some(book) = state.books.get(book_id.as_ref()) else {
                return Ok(ReleaseOutcome::NotFound);
            };
            let stock = match book.stock().get() {
                None => BookStock::untracked(),
                Some(n) => BookStock::new(n + quantity),
            };
            let updated = rebuild_with_stock(book, stock);
            state.books.insert(*book_id.as_ref(), updated);
            Ok(ReleaseOutcome::Released(stock))
        }
    }

    fn rebuild_with_stock(book: &Book, stock: BookStock) -> Book {
        Book::new(
            book.id().clone(),
            book.author().clone(),
            book.title().clone(),
            book.isbn().clone(),
            book.created_at().clone(),
            stock,
        )
    }

    struct MemoryIdCardRepository;

    #[async_trait::async_trait]
    impl IdCardQuery<MemoryTransaction> for MemoryIdCardRepository {
        async fn find_by_student_id(
            &self,
            con: &mut MemoryTransaction,
            student_id: &StudentId,
        ) -> error_stack::Result<Option<IdCard>, KernelError> {
            Ok(con.lock().cards.get(student_id.as_ref()).cloned())
        }
    }

    struct MemoryRentalRepository;

    #[async_trait::async_trait]
    impl RentalModifier<MemoryTransaction> for MemoryRentalRepository {
        async fn create(
            &self,
            con: &mut MemoryTransaction,
            rental: &Rental,
        ) -> error_stack::Result<(), KernelError> {
            let mut state = con.lock();
            if state.fail_rental_create {
                return Err(Report::new(KernelError::Internal)
                    .attach_printable("injected ledger failure"));
            }
            state.rentals.insert(*rental.id().as_ref(), rental.clone());
            Ok(())
        }

        async fn close(
            &self,
            con: &mut MemoryTransaction,
            rental_id: &RentalId,
            returned_at: &ReturnedAt,
        ) -> error_stack::Result<CloseOutcome, KernelError> {
            let mut state = con.lock();
            let Some(rental) = state.rentals.get(rental_id.as_ref()).cloned() else {
                return Ok(CloseOutcome::NotFound);
            };
            match rental.close(returned_at.clone()) {
                Some(closed) => {
                    state.rentals.insert(*rental_id.as_ref(), closed.clone());
                    Ok(CloseOutcome::Closed(closed))
                }
                None => Ok(CloseOutcome::AlreadyClosed),
            }
        }
    }

    #[async_trait::async_trait]
    impl RentalQuery<MemoryTransaction> for MemoryRentalRepository {
        async fn find_by_id(
            &self,
            con: &mut MemoryTransaction,
            id: &RentalId,
        ) -> error_stack::Result<Option<Rental>, KernelError> {
            Ok(con.lock().rentals.get(id.as_ref()).cloned())
        }

        async fn find_by_student_id(
            &self,
            con: &mut MemoryTransaction,
            student_id: &StudentId,
        ) -> error_stack::Result<Vec<Rental>, KernelError> {
            Ok(con
                .lock()
                .rentals
                .values()
                .filter(|rental| rental.student_id() == student_id)
                .cloned()
                .collect())
        }
    }

    impl DependOnBookModifier<MemoryTransaction> for MemoryDatabase {
        type BookModifier = MemoryBookRepository;
        fn book_modifier(&self) -> &Self::BookModifier {
            &MemoryBookRepository
        }
    }

    impl DependOnIdCardQuery<MemoryTransaction> for MemoryDatabase {
        type IdCardQuery = MemoryIdCardRepository;
        fn id_card_query(&self) -> &Self::IdCardQuery {
            &MemoryIdCardRepository
        }
    }

    impl DependOnRentalModifier<MemoryTransaction> for MemoryDatabase {
        type RentalModifier = MemoryRentalRepository;
        fn rental_modifier(&self) -> &Self::RentalModifier {
            &MemoryRentalRepository
        }
    }

    impl DependOnRentalQuery<MemoryTransaction> for MemoryDatabase {
        type RentalQuery = MemoryRentalRepository;
        fn rental_query(&self) -> &Self::RentalQuery {
            &MemoryRentalRepository
        }
    }

    fn due_in_two_weeks() -> OffsetDateTime {
        OffsetDateTime::now_utc() + Duration::days(14)
    }

    fn rent_dto(book_id: Uuid, student_id: Uuid) -> RentBookDto {
        RentBookDto {
            book_id,
            student_id,
            due_date: due_in_two_weeks(),
        }
    }

    #[tokio::test]
    async fn rent_then_return_restores_stock() {
        let db = MemoryDatabase::default();
        let book_id = Uuid::new_v4();
        let student_id = Uuid::new_v4();
        db.insert_book(book_id, Some(10));
        db.insert_card(student_id, CardStatus::Active);

        let rental = db.rent_book(rent_dto(book_id, student_id)).await.unwrap();
        assert_eq!(db.stock_of(book_id), Some(9));
        assert!(rental.returned_at.is_none());
        assert_eq!(rental.book_id, book_id);
        assert_eq!(rental.student_id, student_id);

        let returned = db
            .return_book(ReturnBookDto {
                rental_id: rental.id,
            })
            .await
            .unwrap();
        assert_eq!(db.stock_of(book_id), Some(10));
        assert!(returned.returned_at.is_some());
    }

    #[tokio::test]
    async fn exhausted_stock_is_rejected_without_mutation() {
        let db = MemoryDatabase::default();
        let book_id = Uuid::new_v4();
        let student_id = Uuid::new_v4();
        db.insert_book(book_id, Some(0));
        db.insert_card(student_id, CardStatus::Active);

        let err = db.rent_book(rent_dto(book_id, student_id)).await.unwrap_err();
        assert_eq!(err.current_context(), &RentalError::BookUnavailable);
        assert_eq!(db.stock_of(book_id), Some(0));
        assert_eq!(db.rental_count(), 0);
    }

    #[tokio::test]
    async fn stock_never_oversold_across_sequential_rents() {
        let db = MemoryDatabase::default();
        let book_id = Uuid::new_v4();
        let student_id = Uuid::new_v4();
        db.insert_book(book_id, Some(2));
        db.insert_card(student_id, CardStatus::Active);

        assert!(db.rent_book(rent_dto(book_id, student_id)).await.is_ok());
        assert!(db.rent_book(rent_dto(book_id, student_id)).await.is_ok());
        let err = db.rent_book(rent_dto(book_id, student_id)).await.unwrap_err();
        assert_eq!(err.current_context(), &RentalError::BookUnavailable);

        // stock = initial - open rentals, never negative
        assert_eq!(db.stock_of(book_id), Some(0));
        assert_eq!(db.rental_count(), 2);
    }

    #[tokio::test]
    async fn double_return_is_rejected_once_closed() {
        let db = MemoryDatabase::default();
        let book_id = Uuid::new_v4();
        let student_id = Uuid::new_v4();
        db.insert_book(book_id, Some(5));
        db.insert_card(student_id, CardStatus::Active);

        let rental = db.rent_book(rent_dto(book_id, student_id)).await.unwrap();
        db.return_book(ReturnBookDto {
            rental_id: rental.id,
        })
        .await
        .unwrap();

        let err = db
            .return_book(ReturnBookDto {
                rental_id: rental.id,
            })
            .await
            .unwrap_err();
        assert_eq!(err.current_context(), &RentalError::AlreadyReturned);
        // the failed second return must not release another unit
        assert_eq!(db.stock_of(book_id), Some(5));
    }

    #[tokio::test]
    async fn suspended_card_is_ineligible_and_mutates_nothing() {
        let db = MemoryDatabase::default();
        let book_id = Uuid::new_v4();
        let student_id = Uuid::new_v4();
        db.insert_book(book_id, Some(3));
        db.insert_card(student_id, CardStatus::Suspended);

        let err = db.rent_book(rent_dto(book_id, student_id)).await.unwrap_err();
        assert_eq!(
            err.current_context(),
            &RentalError::IneligibleBorrower(CardStatus::Suspended)
        );
        assert_eq!(db.stock_of(book_id), Some(3));
        assert_eq!(db.rental_count(), 0);
    }

    #[tokio::test]
    async fn expired_card_is_ineligible() {
        let db = MemoryDatabase::default();
        let book_id = Uuid::new_v4();
        let student_id = Uuid::new_v4();
        db.insert_book(book_id, Some(3));
        db.insert_card(student_id, CardStatus::Expired);

        let err = db.rent_book(rent_dto(book_id, student_id)).await.unwrap_err();
        assert_eq!(
            err.current_context(),
            &RentalError::IneligibleBorrower(CardStatus::Expired)
        );
    }

    #[tokio::test]
    async fn past_due_date_is_rejected_before_any_storage_call() {
        let db = MemoryDatabase::default();
        let book_id = Uuid::new_v4();
        let student_id = Uuid::new_v4();
        db.insert_book(book_id, Some(3));
        db.insert_card(student_id, CardStatus::Active);

        let err = db
            .rent_book(RentBookDto {
                book_id,
                student_id,
                due_date: OffsetDateTime::now_utc() - Duration::days(1),
            })
            .await
            .unwrap_err();
        assert_eq!(err.current_context(), &RentalError::InvalidDueDate);
        assert_eq!(db.stock_of(book_id), Some(3));
    }

    #[tokio::test]
    async fn ledger_failure_rolls_back_the_reservation() {
        let db = MemoryDatabase::default();
        let book_id = Uuid::new_v4();
        let student_id = Uuid::new_v4();
        db.insert_book(book_id, Some(4));
        db.insert_card(student_id, CardStatus::Active);
        db.lock().fail_rental_create = true;

        let err = db.rent_book(rent_dto(book_id, student_id)).await.unwrap_err();
        assert_eq!(err.current_context(), &RentalError::Storage);
        // the reserved unit must come back with the rollback
        assert_eq!(db.stock_of(book_id), Some(4));
        assert_eq!(db.rental_count(), 0);
    }

    #[tokio::test]
    async fn untracked_stock_is_always_rentable() {
        let db = MemoryDatabase::default();
        let book_id = Uuid::new_v4();
        let student_id = Uuid::new_v4();
        db.insert_book(book_id, None);
        db.insert_card(student_id, CardStatus::Active);

        let rental = db.rent_book(rent_dto(book_id, student_id)).await.unwrap();
        assert_eq!(db.stock_of(book_id), None);

        db.return_book(ReturnBookDto {
            rental_id: rental.id,
        })
        .await
        .unwrap();
        assert_eq!(db.stock_of(book_id), None);
    }

    #[tokio::test]
    async fn unknown_book_is_not_found() {
        let db = MemoryDatabase::default();
        let student_id = Uuid::new_v4();
        db.insert_card(student_id, CardStatus::Active);

        let err = db
            .rent_book(rent_dto(Uuid::new_v4(), student_id))
            .await
            .unwrap_err();
        assert_eq!(err.current_context(), &RentalError::BookNotFound);
    }

    #[tokio::test]
    async fn unknown_rental_return_is_not_found() {
        let db = MemoryDatabase::default();

        let err = db
            .return_book(ReturnBookDto {
                rental_id: Uuid::new_v4(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.current_context(), &RentalError::RentalNotFound);
    }

    #[tokio::test]
    async fn missing_card_is_a_data_fault_not_a_rejection() {
        let db = MemoryDatabase::default();
        let book_id = Uuid::new_v4();
        db.insert_book(book_id, Some(3));

        let err = db
            .rent_book(rent_dto(book_id, Uuid::new_v4()))
            .await
            .unwrap_err();
        assert_eq!(err.current_context(), &RentalError::Storage);
        assert_eq!(db.stock_of(book_id), Some(3));
    }
}
