use kernel::prelude::entity::Book;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct BookDto {
    pub id: Uuid,
    pub author: String,
    pub title: String,
    pub isbn: String,
    pub created_at: OffsetDateTime,
    pub stock: Option<i32>,
}

impl From<Book> for BookDto {
    fn from(value: Book) -> Self {
        Self {
            id: *value.id().as_ref(),
            author: value.author().as_ref().to_string(),
            title: value.title().as_ref().to_string(),
            isbn: value.isbn().as_ref().to_string(),
            created_at: *value.created_at().as_ref(),
            stock: value.stock().get(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateBookDto {
    pub author: String,
    pub title: String,
    pub isbn: String,
    pub stock: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct UpdateBookDto {
    pub id: Uuid,
    pub author: Option<String>,
    pub title: Option<String>,
    pub isbn: Option<String>,
    /// `None` leaves the stock untouched. A tracked count can be changed
    /// here, but a book cannot be reverted to untracked stock via update.
    pub stock: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct GetBookDto {
    pub id: Uuid,
}

#[derive(Debug, Clone, Default)]
pub struct GetAllBookDto {
    pub limit: Option<i32>,
    pub offset: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct DeleteBookDto {
    pub id: Uuid,
}
