use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// User entity - represents a registered user in the system.
///
/// The id is assigned by the store at creation time and never reused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub birth_date: NaiveDate,
}

/// A user awaiting persistence - everything but the store-assigned id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub birth_date: NaiveDate,
}

impl NewUser {
    pub fn new(name: impl Into<String>, birth_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            birth_date,
        }
    }

    /// Attach a store-assigned id, producing the persisted entity.
    pub fn with_id(self, id: i32) -> User {
        User {
            id,
            name: self.name,
            birth_date: self.birth_date,
        }
    }
}
