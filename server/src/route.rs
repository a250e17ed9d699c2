pub use self::{book::BookRouter, rental::RentalRouter, student::StudentRouter};

pub mod book;
pub mod rental;
pub mod student;
