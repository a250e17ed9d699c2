pub use self::{book::*, rental::*, student::*};

mod book;
mod rental;
mod student;
