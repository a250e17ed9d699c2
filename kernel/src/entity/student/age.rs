use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct StudentAge(i32);

impl StudentAge {
    pub fn new(age: impl Into<i32>) -> Self {
        Self(age.into())
    }
}

impl AsRef<i32> for StudentAge {
    fn as_ref(&self) -> &i32 {
        &self.0
    }
}

impl From<StudentAge> for i32 {
    fn from(value: StudentAge) -> Self {
        value.0
    }
}
