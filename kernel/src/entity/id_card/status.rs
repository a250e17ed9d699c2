use std::fmt::Display;
use std::str::FromStr;

use error_stack::Context;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardStatus {
    Active,
    Suspended,
    Expired,
}

impl CardStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardStatus::Active => "ACTIVE",
            CardStatus::Suspended => "SUSPENDED",
            CardStatus::Expired => "EXPIRED",
        }
    }
}

impl Display for CardStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug)]
pub struct InvalidCardStatus(String);

impl Display for InvalidCardStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown card status: {}", self.0)
    }
}

impl Context for InvalidCardStatus {}

impl FromStr for CardStatus {
    type Err = InvalidCardStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACTIVE" => Ok(CardStatus::Active),
            "SUSPENDED" => Ok(CardStatus::Suspended),
            "EXPIRED" => Ok(CardStatus::Expired),
            other => Err(InvalidCardStatus(other.to_string())),
        }
    }
}
