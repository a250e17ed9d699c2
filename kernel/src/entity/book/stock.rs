use serde::{Deserialize, Serialize};

/// Count of currently lendable copies. `None` means the inventory of this
/// book is untracked and every rent request passes the stock check.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct BookStock(Option<i32>);

impl BookStock {
    pub fn new(stock: impl Into<Option<i32>>) -> Self {
        Self(stock.into())
    }

    pub fn untracked() -> Self {
        Self(None)
    }

    pub fn get(&self) -> Option<i32> {
        self.0
    }

    pub fn is_tracked(&self) -> bool {
        self.0.is_some()
    }
}

impl AsRef<Option<i32>> for BookStock {
    fn as_ref(&self) -> &Option<i32> {
        &self.0
    }
}

impl From<BookStock> for Option<i32> {
    fn from(value: BookStock) -> Self {
        value.0
    }
}
