pub use self::{book::*, common::*, id_card::*, rental::*, student::*};

mod book;
mod common;
mod id_card;
mod rental;
mod student;
