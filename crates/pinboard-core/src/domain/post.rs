use serde::{Deserialize, Serialize};

/// Post entity - a short text owned by exactly one user.
///
/// `user_id` is a back-reference, not ownership: many posts may reference the
/// same user, but a post's lifecycle never controls the user's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub user_id: i32,
    pub description: String,
}

/// A post awaiting persistence. `user_id` must reference an existing user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPost {
    pub user_id: i32,
    pub description: String,
}

impl NewPost {
    pub fn new(user_id: i32, description: impl Into<String>) -> Self {
        Self {
            user_id,
            description: description.into(),
        }
    }

    pub fn with_id(self, id: i32) -> Post {
        Post {
            id,
            user_id: self.user_id,
            description: self.description,
        }
    }
}
