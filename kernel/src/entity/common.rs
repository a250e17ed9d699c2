pub use self::{operation::*, time::*};

mod operation;
mod time;
