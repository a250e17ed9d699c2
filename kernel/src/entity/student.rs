mod age;
mod email;
mod id;
mod name;

pub use self::{age::*, email::*, id::*, name::*};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Student {
    id: StudentId,
    first_name: StudentName,
    last_name: StudentName,
    email: EmailAddress,
    age: StudentAge,
}

impl Student {
    pub fn new(
        id: StudentId,
        first_name: StudentName,
        last_name: StudentName,
        email: EmailAddress,
        age: StudentAge,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            email,
            age,
        }
    }

    pub fn id(&self) -> &StudentId {
        &self.id
    }

    pub fn first_name(&self) -> &StudentName {
        &self.first_name
    }

    pub fn last_name(&self) -> &StudentName {
        &self.last_name
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn age(&self) -> &StudentAge {
        &self.age
    }
}
