mod author;
mod id;
mod isbn;
mod stock;
mod title;

pub use self::{author::*, id::*, isbn::*, stock::*, title::*};
use crate::entity::common::CreatedAt;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Book {
    id: BookId,
    author: BookAuthor,
    title: BookTitle,
    isbn: Isbn,
    created_at: CreatedAt<Book>,
    stock: BookStock,
}

impl Book {
    pub fn new(
        id: BookId,
        author: BookAuthor,
        title: BookTitle,
        isbn: Isbn,
        created_at: CreatedAt<Book>,
        stock: BookStock,
    ) -> Self {
        Self {
            id,
            author,
            title,
            isbn,
            created_at,
            stock,
        }
    }

    pub fn id(&self) -> &BookId {
        &self.id
    }

    pub fn author(&self) -> &BookAuthor {
        &self.author
    }

    pub fn title(&self) -> &BookTitle {
        &self.title
    }

    pub fn isbn(&self) -> &Isbn {
        &self.isbn
    }

    pub fn created_at(&self) -> &CreatedAt<Book> {
        &self.created_at
    }

    pub fn stock(&self) -> &BookStock {
        &self.stock
    }
}
