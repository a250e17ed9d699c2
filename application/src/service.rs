pub use self::{book::*, eligibility::*, rental::*, student::*};

mod book;
mod eligibility;
mod rental;
mod student;
