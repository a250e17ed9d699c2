use crate::database::Transaction;
use crate::entity::{Book, BookAuthor, BookId, BookStock, BookTitle, Isbn};
use crate::KernelError;

/// Result of the atomic conditional stock decrement. `Reserved` carries the
/// stock left after the decrement (`None` when the book is untracked).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReserveOutcome {
    Reserved(BookStock),
    OutOfStock,
    NotFound,
}

/// Result of the atomic stock increment. Unbounded above; returns are always
/// accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseOutcome {
    Released(BookStock),
    NotFound,
}

#[async_trait::async_trait]
pub trait BookModifier<Connection: Transaction>: 'static + Sync + Send {
    async fn create(
        &self,
        con: &mut Connection,
        book: &Book,
    ) -> error_stack::Result<(), KernelError>;

    async fn update(
        &self,
        con: &mut Connection,
        id: &BookId,
        author: Option<BookAuthor>,
        title: Option<BookTitle>,
        isbn: Option<Isbn>,
        stock: Option<BookStock>,
    ) -> error_stack::Result<Option<Book>, KernelError>;

    async fn delete(
        &self,
        con: &mut Connection,
        book_id: &BookId,
    ) -> error_stack::Result<(), KernelError>;

    /// Atomically verify availability and decrement stock by `quantity` in a
    /// single conditional update. Implementations must not read-then-write;
    /// two concurrent reservations of the last copy would both succeed.
    async fn reserve(
        &self,
        con: &mut Connection,
        book_id: &BookId,
        quantity: i32,
    ) -> error_stack::Result<ReserveOutcome, KernelError>;

    /// Atomically increment stock by `quantity`.
    async fn release(
        &self,
        con: &mut Connection,
        book_id: &BookId,
        quantity: i32,
    ) -> error_stack::Result<ReleaseOutcome, KernelError>;
}

pub trait DependOnBookModifier<Connection: Transaction>: 'static + Sync + Send {
    type BookModifier: BookModifier<Connection>;
    fn book_modifier(&self) -> &Self::BookModifier;
}
